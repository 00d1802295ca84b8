//! Smart contract interactions.

use clap::Subcommand;
use serde::Serialize;
use serde_json::Value;

use super::{ApiCall, CommandContext};
use crate::error::{CliError, Result};

#[derive(Debug, Subcommand)]
pub enum ContractCommand {
    /// Call a read-only contract function
    Call {
        /// Contract address
        #[arg(long)]
        address: String,
        /// Function name
        #[arg(long)]
        function: String,
        /// Contract ABI (JSON string)
        #[arg(long)]
        abi: String,
        /// Function parameters (JSON array)
        #[arg(long, default_value = "[]")]
        params: String,
        /// Block number to query at
        #[arg(long)]
        to_block: Option<String>,
    },
}

/// Body for `/v1/contract/call`. The only POST on the Web3 data API; the
/// chain ID is a number here, unlike the query-string endpoints.
#[derive(Debug, Serialize)]
struct ContractCallBody {
    chain_id: u64,
    contract_address: String,
    function_name: String,
    abi: String,
    params: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    to_block: Option<String>,
}

pub async fn run(cmd: ContractCommand, ctx: &CommandContext) -> Result<Value> {
    let call = build(cmd, ctx)?;
    ctx.execute(call).await
}

fn build(cmd: ContractCommand, ctx: &CommandContext) -> Result<ApiCall> {
    let ContractCommand::Call {
        address,
        function,
        abi,
        params,
        to_block,
    } = cmd;

    let params: Value = serde_json::from_str(&params).map_err(|e| CliError::InvalidJson {
        flag: "--params",
        source: e,
    })?;
    let chain_id: u64 = ctx.chain_id.parse().map_err(|_| {
        CliError::InvalidArgument(format!(
            "chain ID '{}' must be numeric for contract calls",
            ctx.chain_id
        ))
    })?;

    let body = ContractCallBody {
        chain_id,
        contract_address: address,
        function_name: function,
        abi,
        params,
        to_block,
    };
    Ok(ApiCall::post("/v1/contract/call", serde_json::to_value(body)?))
}
