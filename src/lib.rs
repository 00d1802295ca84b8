//! Chainbase CLI library.
//!
//! Maps CLI subcommands onto REST calls against the Chainbase blockchain-data
//! APIs: each command builds a parameter object, issues one HTTP call, and
//! serializes the JSON response to stdout.

pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use client::ApiClient;
pub use config::ConfigStore;
pub use error::{CliError, Result};
