//! Authenticated HTTP client for the Chainbase APIs.
//!
//! # Responsibilities
//! - Route each request to a base URL by path prefix
//! - Attach the API key and JSON content-type headers
//! - Issue GET (query parameters) and POST (JSON body) requests
//! - Normalize application-level errors from the response envelope
//!
//! # Design Decisions
//! - Base URL dispatch is a static ordered prefix table, first match wins;
//!   unmatched paths fall through to the Web3 data API
//! - Success bodies are returned as opaque `serde_json::Value`, full envelope
//!   included; no local typing of domain payloads
//! - A body `{code != 0}` fails with the body's message; transport failures
//!   propagate unchanged. No retry, no backoff, transport-default timeouts.

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Method;
use serde_json::Value;
use url::Url;

use crate::error::{CliError, Result};

/// Web3 data API base.
pub const WEB3_BASE_URL: &str = "https://api.chainbase.online";
/// SQL execution service base.
pub const SQL_BASE_URL: &str = "https://api.chainbase.com/api/v1";

/// Header carrying the API key on every request.
const API_KEY_HEADER: &str = "x-api-key";

/// Which service a path routes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Upstream {
    Web3,
    Sql,
}

/// Ordered prefix routing table. Evaluated first-match; paths that match
/// nothing go to the Web3 data API.
const PREFIX_ROUTES: &[(&str, Upstream)] = &[
    ("/query/", Upstream::Sql),
    ("/execution/", Upstream::Sql),
];

fn upstream_for(path: &str) -> Upstream {
    PREFIX_ROUTES
        .iter()
        .find(|(prefix, _)| path.starts_with(prefix))
        .map(|(_, upstream)| *upstream)
        .unwrap_or(Upstream::Web3)
}

/// Client for one authenticated request per command invocation.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    web3_base: String,
    sql_base: String,
}

impl ApiClient {
    /// Create a client against the production base URLs.
    pub fn new(api_key: &str) -> Result<Self> {
        Self::with_base_urls(api_key, WEB3_BASE_URL, SQL_BASE_URL)
    }

    /// Create a client with explicit base URLs. Used by tests to point both
    /// services at a local mock backend.
    pub fn with_base_urls(api_key: &str, web3_base: &str, sql_base: &str) -> Result<Self> {
        let web3_base = parse_base(web3_base)?;
        let sql_base = parse_base(sql_base)?;

        let mut headers = HeaderMap::new();
        let key = HeaderValue::from_str(api_key).map_err(|_| {
            CliError::Config("API key contains characters not allowed in a header".to_string())
        })?;
        headers.insert(API_KEY_HEADER, key);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            web3_base,
            sql_base,
        })
    }

    /// Issue a GET with query parameters; returns the parsed body on success.
    pub async fn get(&self, path: &str, params: &[(&'static str, String)]) -> Result<Value> {
        self.request(Method::GET, path, Some(params), None).await
    }

    /// Issue a POST with a JSON payload; returns the parsed body on success.
    pub async fn post(&self, path: &str, body: &Value) -> Result<Value> {
        self.request(Method::POST, path, None, Some(body)).await
    }

    fn base_for(&self, path: &str) -> &str {
        match upstream_for(path) {
            Upstream::Web3 => &self.web3_base,
            Upstream::Sql => &self.sql_base,
        }
    }

    async fn request(
        &self,
        method: Method,
        path: &str,
        params: Option<&[(&'static str, String)]>,
        body: Option<&Value>,
    ) -> Result<Value> {
        let url = format!("{}{}", self.base_for(path), path);
        tracing::debug!(%method, %url, "dispatching API request");

        let mut request = self.http.request(method, &url);
        if let Some(params) = params {
            request = request.query(params);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?.error_for_status()?;
        let body: Value = response.json().await?;
        check_envelope(&body)?;
        Ok(body)
    }
}

fn parse_base(base: &str) -> Result<String> {
    Url::parse(base)
        .map_err(|e| CliError::Config(format!("invalid base URL '{base}': {e}")))?;
    Ok(base.trim_end_matches('/').to_string())
}

/// Fail when the body is an object carrying a non-zero `code` field.
/// The error text is the body's `message`, or a fallback embedding the code.
fn check_envelope(body: &Value) -> Result<()> {
    let Some(code) = body.as_object().and_then(|obj| obj.get("code")) else {
        return Ok(());
    };
    if code.as_i64() == Some(0) {
        return Ok(());
    }
    let message = body
        .get("message")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
        .map(str::to_owned)
        .unwrap_or_else(|| format!("API error code: {code}"));
    tracing::warn!(%code, "API returned application error");
    Err(CliError::Api(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_prefix_routing() {
        assert_eq!(upstream_for("/v1/block/number/latest"), Upstream::Web3);
        assert_eq!(upstream_for("/v1/token/price"), Upstream::Web3);
        assert_eq!(upstream_for("/query/execute"), Upstream::Sql);
        assert_eq!(upstream_for("/execution/abc123/status"), Upstream::Sql);
        // Prefix match requires the trailing slash segment boundary
        assert_eq!(upstream_for("/queryish"), Upstream::Web3);
    }

    #[test]
    fn test_base_selection_uses_routing_table() {
        let client =
            ApiClient::with_base_urls("k", "http://web3.local", "http://sql.local").unwrap();
        assert_eq!(client.base_for("/v1/nft/metadata"), "http://web3.local");
        assert_eq!(client.base_for("/query/execute"), "http://sql.local");
        assert_eq!(client.base_for("/execution/1/results"), "http://sql.local");
    }

    #[test]
    fn test_trailing_slash_trimmed_from_base() {
        let client =
            ApiClient::with_base_urls("k", "http://web3.local/", "http://sql.local/api/v1/")
                .unwrap();
        assert_eq!(client.base_for("/v1/tx/detail"), "http://web3.local");
        assert_eq!(client.base_for("/query/execute"), "http://sql.local/api/v1");
    }

    #[test]
    fn test_envelope_success_passes_through() {
        assert!(check_envelope(&json!({"code": 0, "data": {"x": 1}})).is_ok());
        // Bodies without a code field are not envelopes
        assert!(check_envelope(&json!({"data": 1})).is_ok());
        assert!(check_envelope(&json!([1, 2, 3])).is_ok());
        assert!(check_envelope(&json!("raw")).is_ok());
    }

    #[test]
    fn test_envelope_error_uses_message() {
        let err = check_envelope(&json!({"code": 1001, "message": "bad query"})).unwrap_err();
        assert_eq!(err.to_string(), "bad query");
    }

    #[test]
    fn test_envelope_error_falls_back_to_code() {
        let err = check_envelope(&json!({"code": 1001})).unwrap_err();
        assert_eq!(err.to_string(), "API error code: 1001");

        let err = check_envelope(&json!({"code": 1001, "message": ""})).unwrap_err();
        assert_eq!(err.to_string(), "API error code: 1001");
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        assert!(ApiClient::with_base_urls("k", "not a url", SQL_BASE_URL).is_err());
    }
}
