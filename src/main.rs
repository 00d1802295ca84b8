//! `chainbase`: CLI for the Chainbase Web3 API.
//!
//! One HTTP request per invocation: parse flags, resolve settings, issue the
//! call, print JSON. Exit code 1 on any error, 0 otherwise.

use std::env;

use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chainbase_cli::client::ApiClient;
use chainbase_cli::commands::{self, CommandContext};
use chainbase_cli::config::{resolve_settings, ConfigStore, API_KEY_ENV};
use chainbase_cli::error::Result;
use chainbase_cli::output;

#[derive(Parser)]
#[command(name = "chainbase")]
#[command(version, about = "CLI for the Chainbase Web3 API", long_about = None)]
struct Cli {
    /// Chain ID (falls back to the configured default, then "1")
    #[arg(long, global = true)]
    chain: Option<String>,

    /// Indented, human-friendly output
    #[arg(long, global = true)]
    pretty: bool,

    /// Page number for paginated endpoints
    #[arg(long, global = true)]
    page: Option<u32>,

    /// Results per page for paginated endpoints
    #[arg(long, global = true)]
    limit: Option<u32>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Balance and account queries
    #[command(subcommand)]
    Balance(commands::balance::BalanceCommand),
    /// Block queries
    #[command(subcommand)]
    Block(commands::block::BlockCommand),
    /// Transaction queries
    #[command(subcommand)]
    Tx(commands::tx::TxCommand),
    /// Token queries
    #[command(subcommand)]
    Token(commands::token::TokenCommand),
    /// NFT queries
    #[command(subcommand)]
    Nft(commands::nft::NftCommand),
    /// Address queries
    #[command(subcommand)]
    Address(commands::address::AddressCommand),
    /// Domain name queries
    #[command(subcommand)]
    Domain(commands::domain::DomainCommand),
    /// Smart contract interactions
    #[command(subcommand)]
    Contract(commands::contract::ContractCommand),
    /// SQL queries and executions
    #[command(subcommand)]
    Sql(commands::sql::SqlCommand),
    /// Manage CLI configuration
    #[command(subcommand)]
    Config(commands::config::ConfigCommand),
}

#[tokio::main]
async fn main() {
    // Logs go to stderr; stdout carries only the JSON result
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chainbase_cli=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let pretty = cli.pretty;

    match run(cli).await {
        Ok(value) => {
            if let Err(e) = output::format_output(&value, pretty) {
                output::format_error(&e.to_string(), pretty);
                std::process::exit(1);
            }
        }
        Err(e) => {
            output::format_error(&e.to_string(), pretty);
            std::process::exit(1);
        }
    }
}

async fn run(cli: Cli) -> Result<Value> {
    let store = ConfigStore::from_env()?;
    let Cli {
        chain,
        page,
        limit,
        command,
        ..
    } = cli;
    let context = || api_context(&store, chain.as_deref(), page, limit);

    match command {
        Commands::Config(cmd) => commands::config::run(cmd, &store),
        Commands::Balance(cmd) => commands::balance::run(cmd, &context()?).await,
        Commands::Block(cmd) => commands::block::run(cmd, &context()?).await,
        Commands::Tx(cmd) => commands::tx::run(cmd, &context()?).await,
        Commands::Token(cmd) => commands::token::run(cmd, &context()?).await,
        Commands::Nft(cmd) => commands::nft::run(cmd, &context()?).await,
        Commands::Address(cmd) => commands::address::run(cmd, &context()?).await,
        Commands::Domain(cmd) => commands::domain::run(cmd, &context()?).await,
        Commands::Contract(cmd) => commands::contract::run(cmd, &context()?).await,
        Commands::Sql(cmd) => commands::sql::run(cmd, &context()?).await,
    }
}

/// Resolve credentials and chain, and build the shared per-invocation state.
/// Config subcommands never reach this, so they work without an API key.
fn api_context(
    store: &ConfigStore,
    chain_flag: Option<&str>,
    page: Option<u32>,
    limit: Option<u32>,
) -> Result<CommandContext> {
    let env_key = env::var(API_KEY_ENV).ok();
    let settings = resolve_settings(env_key.as_deref(), chain_flag, store)?;
    Ok(CommandContext {
        client: ApiClient::new(&settings.api_key)?,
        chain_id: settings.chain_id,
        page,
        limit,
    })
}
