//! Domain name queries (ENS and Space ID).

use clap::Subcommand;
use serde_json::Value;

use super::{ApiCall, CommandContext, QueryParams};
use crate::error::Result;

#[derive(Debug, Subcommand)]
pub enum DomainCommand {
    /// Get ENS domains for an address
    Ens {
        address: String,
        /// Block number to query at
        #[arg(long)]
        to_block: Option<String>,
    },
    /// Resolve an ENS domain to records
    EnsResolve {
        domain: String,
        /// Block number to query at
        #[arg(long)]
        to_block: Option<String>,
    },
    /// Reverse resolve an address to ENS domain
    EnsReverse {
        address: String,
        /// Block number to query at
        #[arg(long)]
        to_block: Option<String>,
    },
    /// Resolve a Space ID domain to records
    SpaceidResolve {
        domain: String,
        /// Block number to query at
        #[arg(long)]
        to_block: Option<String>,
    },
    /// Reverse resolve an address to Space ID domain
    SpaceidReverse {
        address: String,
        /// Block number to query at
        #[arg(long)]
        to_block: Option<String>,
    },
}

pub async fn run(cmd: DomainCommand, ctx: &CommandContext) -> Result<Value> {
    let (path, field, value, to_block) = match cmd {
        DomainCommand::Ens { address, to_block } => {
            ("/v1/account/ens", "address", address, to_block)
        }
        DomainCommand::EnsResolve { domain, to_block } => {
            ("/v1/ens/records", "domain", domain, to_block)
        }
        DomainCommand::EnsReverse { address, to_block } => {
            ("/v1/ens/reverse", "address", address, to_block)
        }
        DomainCommand::SpaceidResolve { domain, to_block } => {
            ("/v1/space-id/records", "domain", domain, to_block)
        }
        DomainCommand::SpaceidReverse { address, to_block } => {
            ("/v1/space-id/reverse", "address", address, to_block)
        }
    };
    let mut params = QueryParams::new();
    params.push("chain_id", &ctx.chain_id);
    params.push(field, value);
    params.push_opt("to_block", to_block);
    ctx.execute(ApiCall::get(path, params)).await
}
