//! Transaction queries.

use clap::Subcommand;
use serde_json::Value;

use super::{ApiCall, CommandContext, QueryParams};
use crate::error::Result;

#[derive(Debug, Subcommand)]
pub enum TxCommand {
    /// Get transaction by hash
    Detail { hash: String },
    /// Get transactions by account
    List {
        address: String,
        /// Start block number
        #[arg(long)]
        from_block: Option<String>,
        /// End block number
        #[arg(long)]
        to_block: Option<String>,
        /// Start timestamp
        #[arg(long)]
        from_timestamp: Option<String>,
        /// End timestamp
        #[arg(long)]
        end_timestamp: Option<String>,
    },
}

pub async fn run(cmd: TxCommand, ctx: &CommandContext) -> Result<Value> {
    let call = match cmd {
        TxCommand::Detail { hash } => {
            let mut params = QueryParams::new();
            params.push("chain_id", &ctx.chain_id);
            params.push("hash", hash);
            ApiCall::get("/v1/tx/detail", params)
        }
        TxCommand::List {
            address,
            from_block,
            to_block,
            from_timestamp,
            end_timestamp,
        } => {
            let mut params = QueryParams::new();
            params.push("chain_id", &ctx.chain_id);
            params.push("address", address);
            ctx.paging(&mut params);
            params.push_opt("from_block", from_block);
            params.push_opt("to_block", to_block);
            params.push_opt("from_timestamp", from_timestamp);
            params.push_opt("end_timestamp", end_timestamp);
            ApiCall::get("/v1/account/txs", params)
        }
    };
    ctx.execute(call).await
}
