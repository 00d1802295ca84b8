//! Block queries.

use clap::Subcommand;
use serde_json::Value;

use super::{ApiCall, CommandContext, QueryParams};
use crate::error::Result;

#[derive(Debug, Subcommand)]
pub enum BlockCommand {
    /// Get latest block number
    Latest,
    /// Get block by number
    Detail { number: String },
}

pub async fn run(cmd: BlockCommand, ctx: &CommandContext) -> Result<Value> {
    let call = match cmd {
        BlockCommand::Latest => {
            let mut params = QueryParams::new();
            params.push("chain_id", &ctx.chain_id);
            ApiCall::get("/v1/block/number/latest", params)
        }
        BlockCommand::Detail { number } => {
            let mut params = QueryParams::new();
            params.push("chain_id", &ctx.chain_id);
            params.push("number", number);
            ApiCall::get("/v1/block/detail", params)
        }
    };
    ctx.execute(call).await
}
