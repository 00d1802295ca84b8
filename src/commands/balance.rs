//! Balance and account queries.

use clap::Subcommand;
use serde_json::Value;

use super::{ApiCall, CommandContext, QueryParams};
use crate::error::Result;

#[derive(Debug, Subcommand)]
pub enum BalanceCommand {
    /// Get native token balance
    Native {
        address: String,
        /// Block number to query at
        #[arg(long)]
        to_block: Option<String>,
    },
    /// Get token balances for an address
    Tokens {
        address: String,
        /// Filter by contract address
        #[arg(long)]
        contract: Option<String>,
    },
    /// Get portfolio balances across chains
    Portfolios {
        address: String,
        /// Comma-separated chain IDs
        #[arg(long)]
        chains: Option<String>,
    },
    /// Get NFT balances for an address
    Nfts {
        address: String,
        /// Filter by contract address
        #[arg(long)]
        contract: Option<String>,
    },
}

pub async fn run(cmd: BalanceCommand, ctx: &CommandContext) -> Result<Value> {
    ctx.execute(build(cmd, ctx)).await
}

fn build(cmd: BalanceCommand, ctx: &CommandContext) -> ApiCall {
    match cmd {
        BalanceCommand::Native { address, to_block } => {
            let mut params = QueryParams::new();
            params.push("chain_id", &ctx.chain_id);
            params.push("address", address);
            params.push_opt("to_block", to_block);
            ApiCall::get("/v1/account/balance", params)
        }
        BalanceCommand::Tokens { address, contract } => {
            let mut params = QueryParams::new();
            params.push("chain_id", &ctx.chain_id);
            params.push("address", address);
            params.push_opt("contract_address", contract);
            ctx.paging(&mut params);
            ApiCall::get("/v1/account/tokens", params)
        }
        BalanceCommand::Portfolios { address, chains } => {
            // Cross-chain endpoint: no default chain_id, one entry per listed chain
            let mut params = QueryParams::new();
            params.push("address", address);
            if let Some(chains) = chains {
                for chain in chains.split(',').filter(|c| !c.is_empty()) {
                    params.push("chain_id", chain.trim());
                }
            }
            ApiCall::get("/v1/account/portfolios", params)
        }
        BalanceCommand::Nfts { address, contract } => {
            let mut params = QueryParams::new();
            params.push("chain_id", &ctx.chain_id);
            params.push("address", address);
            params.push_opt("contract_address", contract);
            ctx.paging(&mut params);
            ApiCall::get("/v1/account/nfts", params)
        }
    }
}
