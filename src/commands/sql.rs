//! SQL queries and executions against the data warehouse.
//!
//! These are the only commands routed to the SQL-execution base URL; the
//! client's prefix table picks it from the `/query/` and `/execution/` paths.

use clap::Subcommand;
use serde_json::{json, Value};

use super::{ApiCall, CommandContext, QueryParams};
use crate::error::Result;

#[derive(Debug, Subcommand)]
pub enum SqlCommand {
    /// Execute a SQL statement asynchronously
    Execute { sql: String },
    /// Check execution status
    Status { execution_id: String },
    /// Get execution results
    Results { execution_id: String },
}

pub async fn run(cmd: SqlCommand, ctx: &CommandContext) -> Result<Value> {
    ctx.execute(build(cmd)).await
}

fn build(cmd: SqlCommand) -> ApiCall {
    match cmd {
        SqlCommand::Execute { sql } => ApiCall::post("/query/execute", json!({ "sql": sql })),
        SqlCommand::Status { execution_id } => ApiCall::get(
            format!("/execution/{execution_id}/status"),
            QueryParams::new(),
        ),
        SqlCommand::Results { execution_id } => ApiCall::get(
            format!("/execution/{execution_id}/results"),
            QueryParams::new(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execute_posts_sql_body() {
        let ApiCall::Post { path, body } = build(SqlCommand::Execute {
            sql: "SELECT 1".to_string(),
        }) else {
            panic!("expected POST");
        };
        assert_eq!(path, "/query/execute");
        assert_eq!(body, json!({ "sql": "SELECT 1" }));
    }

    #[test]
    fn test_status_and_results_embed_execution_id() {
        let ApiCall::Get { path, params } = build(SqlCommand::Status {
            execution_id: "abc123".to_string(),
        }) else {
            panic!("expected GET");
        };
        assert_eq!(path, "/execution/abc123/status");
        assert!(params.as_pairs().is_empty());

        let ApiCall::Get { path, .. } = build(SqlCommand::Results {
            execution_id: "abc123".to_string(),
        }) else {
            panic!("expected GET");
        };
        assert_eq!(path, "/execution/abc123/results");
    }
}
