//! Local configuration subsystem.
//!
//! # Data Flow
//! ```text
//! $CHAINBASE_CONFIG_DIR (or ~/.chainbase)
//!     → store.rs (config.json, flat string map, read-modify-write)
//!     → resolve.rs (env override + defaults)
//!     → Settings (resolved, immutable for the invocation)
//! ```
//!
//! # Design Decisions
//! - Two recognized keys (`api-key`, `default-chain`); no schema enforcement
//!   beyond presence
//! - The credential env var wins only when non-empty
//! - A corrupt file is a hard error, never a silent reset
//! - Resolution takes the environment value as a parameter so tests never
//!   stub process globals

pub mod resolve;
pub mod store;

pub use resolve::{resolve_api_key, resolve_default_chain, resolve_settings, Settings};
pub use store::ConfigStore;

/// Config key holding the API credential.
pub const API_KEY: &str = "api-key";
/// Config key holding the default chain ID.
pub const DEFAULT_CHAIN: &str = "default-chain";
/// Environment variable overriding the credential.
pub const API_KEY_ENV: &str = "CHAINBASE_API_KEY";
/// Environment variable overriding the config directory.
pub const CONFIG_DIR_ENV: &str = "CHAINBASE_CONFIG_DIR";
/// Chain ID used when nothing is configured.
pub const FALLBACK_CHAIN: &str = "1";
