//! Token queries.

use clap::Subcommand;
use serde_json::Value;

use super::{ApiCall, CommandContext, QueryParams};
use crate::error::Result;

#[derive(Debug, Subcommand)]
pub enum TokenCommand {
    /// Get token metadata
    Metadata { contract: String },
    /// Get token transfers
    Transfers {
        /// Contract address
        #[arg(long)]
        contract: Option<String>,
        /// Wallet address
        #[arg(long)]
        address: Option<String>,
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
    /// Get token holders
    Holders { contract: String },
    /// Get top token holders
    TopHolders { contract: String },
    /// Get token price
    Price { contract: String },
    /// Get token price history
    PriceHistory {
        contract: String,
        /// Start timestamp
        #[arg(long)]
        from: String,
        /// End timestamp
        #[arg(long)]
        to: String,
    },
}

pub async fn run(cmd: TokenCommand, ctx: &CommandContext) -> Result<Value> {
    let call = match cmd {
        TokenCommand::Metadata { contract } => {
            let mut params = QueryParams::new();
            params.push("chain_id", &ctx.chain_id);
            params.push("contract_address", contract);
            ApiCall::get("/v1/token/metadata", params)
        }
        TokenCommand::Transfers {
            contract,
            address,
            from_block,
            to_block,
            from_timestamp,
            end_timestamp,
        } => {
            let mut params = QueryParams::new();
            params.push("chain_id", &ctx.chain_id);
            params.push_opt("contract_address", contract);
            params.push_opt("address", address);
            params.push_opt("from_block", from_block);
            params.push_opt("to_block", to_block);
            params.push_opt("from_timestamp", from_timestamp);
            params.push_opt("end_timestamp", end_timestamp);
            ctx.paging(&mut params);
            ApiCall::get("/v1/token/transfers", params)
        }
        TokenCommand::Holders { contract } => {
            let mut params = QueryParams::new();
            params.push("chain_id", &ctx.chain_id);
            params.push("contract_address", contract);
            ctx.paging(&mut params);
            ApiCall::get("/v1/token/holders", params)
        }
        TokenCommand::TopHolders { contract } => {
            let mut params = QueryParams::new();
            params.push("chain_id", &ctx.chain_id);
            params.push("contract_address", contract);
            ctx.paging(&mut params);
            ApiCall::get("/v1/token/top-holders", params)
        }
        TokenCommand::Price { contract } => {
            let mut params = QueryParams::new();
            params.push("chain_id", &ctx.chain_id);
            params.push("contract_address", contract);
            ApiCall::get("/v1/token/price", params)
        }
        TokenCommand::PriceHistory { contract, from, to } => {
            let mut params = QueryParams::new();
            params.push("chain_id", &ctx.chain_id);
            params.push("contract_address", contract);
            params.push("from_timestamp", from);
            params.push("end_timestamp", to);
            ApiCall::get("/v1/token/price/history", params)
        }
    };
    ctx.execute(call).await
}
