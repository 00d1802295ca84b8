//! Address queries.

use clap::Subcommand;
use serde_json::Value;

use super::{ApiCall, CommandContext, QueryParams};
use crate::error::Result;

#[derive(Debug, Subcommand)]
pub enum AddressCommand {
    /// Get address labels
    Labels { address: String },
}

pub async fn run(cmd: AddressCommand, ctx: &CommandContext) -> Result<Value> {
    let call = match cmd {
        AddressCommand::Labels { address } => {
            let mut params = QueryParams::new();
            params.push("chain_id", &ctx.chain_id);
            params.push("address", address);
            ApiCall::get("/v1/address/labels", params)
        }
    };
    ctx.execute(call).await
}
