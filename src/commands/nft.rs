//! NFT queries.

use clap::Subcommand;
use serde_json::Value;

use super::{ApiCall, CommandContext, QueryParams};
use crate::error::Result;

#[derive(Debug, Subcommand)]
pub enum NftCommand {
    /// Get NFT metadata
    Metadata {
        contract: String,
        token_id: String,
    },
    /// Get NFT collection
    Collection { contract: String },
    /// Get NFT collection items
    CollectionItems { contract: String },
    /// Search NFTs by name
    Search {
        name: String,
        /// Contract address
        #[arg(long)]
        contract: Option<String>,
    },
    /// Get NFT transfers
    Transfers {
        /// Contract address
        #[arg(long)]
        contract: Option<String>,
        /// Token ID
        #[arg(long)]
        token_id: Option<String>,
        /// Address
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
    /// Get NFT owner
    Owner {
        contract: String,
        token_id: String,
        /// Block number to query at
        #[arg(long)]
        to_block: Option<String>,
    },
    /// Get NFT owners
    Owners { contract: String },
    /// Get NFT owner history
    OwnerHistory {
        contract: String,
        token_id: String,
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
    /// Get NFT floor price
    FloorPrice { contract: String },
    /// Get NFT price history
    PriceHistory {
        contract: String,
        /// Start timestamp
        #[arg(long)]
        from: String,
        /// End timestamp
        #[arg(long)]
        to: String,
    },
    /// Get trending NFT collections
    Trending {
        /// Time range
        #[arg(long, default_value = "7d")]
        range: String,
        /// Exchange name
        #[arg(long)]
        exchange: Option<String>,
        /// Sort order
        #[arg(long)]
        sort: Option<String>,
    },
    /// Get NFT rarity
    Rarity {
        contract: String,
        /// Token ID
        #[arg(long)]
        token_id: Option<String>,
        /// Minimum rank
        #[arg(long)]
        rank_min: Option<String>,
        /// Maximum rank
        #[arg(long)]
        rank_max: Option<String>,
    },
}

pub async fn run(cmd: NftCommand, ctx: &CommandContext) -> Result<Value> {
    let call = match cmd {
        NftCommand::Metadata { contract, token_id } => {
            let mut params = QueryParams::new();
            params.push("chain_id", &ctx.chain_id);
            params.push("contract_address", contract);
            params.push("token_id", token_id);
            ApiCall::get("/v1/nft/metadata", params)
        }
        NftCommand::Collection { contract } => {
            let mut params = QueryParams::new();
            params.push("chain_id", &ctx.chain_id);
            params.push("contract_address", contract);
            ApiCall::get("/v1/nft/collection", params)
        }
        NftCommand::CollectionItems { contract } => {
            let mut params = QueryParams::new();
            params.push("chain_id", &ctx.chain_id);
            params.push("contract_address", contract);
            ctx.paging(&mut params);
            ApiCall::get("/v1/nft/collection/items", params)
        }
        NftCommand::Search { name, contract } => {
            let mut params = QueryParams::new();
            params.push("chain_id", &ctx.chain_id);
            params.push("name", name);
            params.push_opt("contract_address", contract);
            ctx.paging(&mut params);
            ApiCall::get("/v1/nft/search", params)
        }
        NftCommand::Transfers {
            contract,
            token_id,
            address,
            from_block,
            to_block,
            from_timestamp,
            end_timestamp,
        } => {
            let mut params = QueryParams::new();
            params.push("chain_id", &ctx.chain_id);
            params.push_opt("contract_address", contract);
            params.push_opt("token_id", token_id);
            params.push_opt("address", address);
            params.push_opt("from_block", from_block);
            params.push_opt("to_block", to_block);
            params.push_opt("from_timestamp", from_timestamp);
            params.push_opt("end_timestamp", end_timestamp);
            ctx.paging(&mut params);
            ApiCall::get("/v1/nft/transfers", params)
        }
        NftCommand::Owner {
            contract,
            token_id,
            to_block,
        } => {
            let mut params = QueryParams::new();
            params.push("chain_id", &ctx.chain_id);
            params.push("contract_address", contract);
            params.push("token_id", token_id);
            params.push_opt("to_block", to_block);
            ApiCall::get("/v1/nft/owner", params)
        }
        NftCommand::Owners { contract } => {
            let mut params = QueryParams::new();
            params.push("chain_id", &ctx.chain_id);
            params.push("contract_address", contract);
            ctx.paging(&mut params);
            ApiCall::get("/v1/nft/owners", params)
        }
        NftCommand::OwnerHistory {
            contract,
            token_id,
            from_block,
            to_block,
            from_timestamp,
            end_timestamp,
        } => {
            let mut params = QueryParams::new();
            params.push("chain_id", &ctx.chain_id);
            params.push("contract_address", contract);
            params.push("token_id", token_id);
            params.push_opt("from_block", from_block);
            params.push_opt("to_block", to_block);
            params.push_opt("from_timestamp", from_timestamp);
            params.push_opt("end_timestamp", end_timestamp);
            ctx.paging(&mut params);
            ApiCall::get("/v1/nft/owner/history", params)
        }
        NftCommand::FloorPrice { contract } => {
            let mut params = QueryParams::new();
            params.push("chain_id", &ctx.chain_id);
            params.push("contract_address", contract);
            ApiCall::get("/v1/nft/floor_price", params)
        }
        NftCommand::PriceHistory { contract, from, to } => {
            let mut params = QueryParams::new();
            params.push("chain_id", &ctx.chain_id);
            params.push("contract_address", contract);
            params.push("from_timestamp", from);
            params.push("end_timestamp", to);
            ApiCall::get("/v1/nft/price/history", params)
        }
        NftCommand::Trending {
            range,
            exchange,
            sort,
        } => {
            let mut params = QueryParams::new();
            params.push("chain_id", &ctx.chain_id);
            params.push("range", range);
            params.push_opt("exchange_name", exchange);
            params.push_opt("sort", sort);
            ctx.paging(&mut params);
            ApiCall::get("/v1/nft/collection/trending", params)
        }
        NftCommand::Rarity {
            contract,
            token_id,
            rank_min,
            rank_max,
        } => {
            let mut params = QueryParams::new();
            params.push("chain_id", &ctx.chain_id);
            params.push("contract_address", contract);
            params.push_opt("token_id", token_id);
            params.push_opt("rank_min", rank_min);
            params.push_opt("rank_max", rank_max);
            ctx.paging(&mut params);
            ApiCall::get("/v1/nft/rarity", params)
        }
    };
    ctx.execute(call).await
}
