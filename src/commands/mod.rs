//! Command groups mapping CLI flags onto API calls.
//!
//! # Responsibilities
//! - Translate each subcommand's flags into API field names (snake_case)
//! - Resolve the effective chain ID (flag, configured default, `"1"`)
//! - Hand one [`ApiCall`] description per invocation to the shared executor
//!
//! # Design Decisions
//! - Subcommands are declarative: each arm names a remote path, a method, and
//!   the flags copied into fields, then a single executor issues the request
//! - Paging flags are forwarded only by endpoints that accept them
//! - No state machine, no branching beyond optional-field presence

pub mod address;
pub mod balance;
pub mod block;
pub mod config;
pub mod contract;
pub mod domain;
pub mod nft;
pub mod sql;
pub mod token;
pub mod tx;

use serde_json::Value;

use crate::client::ApiClient;
use crate::error::Result;

/// Description of one remote call: method, path, and the fields to send.
#[derive(Debug)]
pub enum ApiCall {
    Get {
        path: String,
        params: QueryParams,
    },
    Post {
        path: String,
        body: Value,
    },
}

impl ApiCall {
    pub fn get(path: impl Into<String>, params: QueryParams) -> Self {
        Self::Get {
            path: path.into(),
            params,
        }
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self::Post {
            path: path.into(),
            body,
        }
    }
}

/// Ordered query parameters, built by copying present flags.
#[derive(Debug, Default)]
pub struct QueryParams(Vec<(&'static str, String)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &'static str, value: impl ToString) {
        self.0.push((field, value.to_string()));
    }

    /// Copy a flag only when it was given.
    pub fn push_opt(&mut self, field: &'static str, value: Option<impl ToString>) {
        if let Some(value) = value {
            self.push(field, value);
        }
    }

    pub fn as_pairs(&self) -> &[(&'static str, String)] {
        &self.0
    }
}

/// Per-invocation state shared by every API command group.
pub struct CommandContext {
    pub client: ApiClient,
    pub chain_id: String,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl CommandContext {
    /// Append the global paging flags; called by paginated endpoints only.
    pub fn paging(&self, params: &mut QueryParams) {
        params.push_opt("page", self.page);
        params.push_opt("limit", self.limit);
    }

    /// The generic executor: issue the described call and return the body.
    pub async fn execute(&self, call: ApiCall) -> Result<Value> {
        match call {
            ApiCall::Get { path, params } => self.client.get(&path, params.as_pairs()).await,
            ApiCall::Post { path, body } => self.client.post(&path, &body).await,
        }
    }
}
