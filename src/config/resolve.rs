//! Settings resolution: environment override, persisted values, defaults.

use crate::config::store::ConfigStore;
use crate::config::{API_KEY, DEFAULT_CHAIN, FALLBACK_CHAIN};
use crate::error::{CliError, Result};

/// Settings resolved for one command invocation.
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_key: String,
    pub chain_id: String,
}

/// Resolve the credential: a non-empty environment value wins, then the
/// persisted `api-key`, else a "not configured" error naming the setup command.
pub fn resolve_api_key(env_value: Option<&str>, store: &ConfigStore) -> Result<String> {
    if let Some(key) = env_value {
        if !key.is_empty() {
            return Ok(key.to_string());
        }
    }
    if let Some(key) = store.get(API_KEY)? {
        return Ok(key);
    }
    Err(CliError::Config(
        "no API key configured; run: chainbase config set api-key <your-key>".to_string(),
    ))
}

/// Resolve the default chain: the persisted `default-chain`, else `"1"`.
pub fn resolve_default_chain(store: &ConfigStore) -> Result<String> {
    Ok(store
        .get(DEFAULT_CHAIN)?
        .unwrap_or_else(|| FALLBACK_CHAIN.to_string()))
}

/// Resolve everything a command needs. The chain flag takes priority over the
/// configured default, which takes priority over the hardcoded fallback.
pub fn resolve_settings(
    env_api_key: Option<&str>,
    chain_flag: Option<&str>,
    store: &ConfigStore,
) -> Result<Settings> {
    let api_key = resolve_api_key(env_api_key, store)?;
    let chain_id = match chain_flag {
        Some(chain) => chain.to_string(),
        None => resolve_default_chain(store)?,
    };
    Ok(Settings { api_key, chain_id })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, ConfigStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::new(dir.path());
        (dir, store)
    }

    #[test]
    fn test_env_value_wins_over_file() {
        let (_dir, store) = temp_store();
        store.set(API_KEY, "from-file").unwrap();
        let key = resolve_api_key(Some("from-env"), &store).unwrap();
        assert_eq!(key, "from-env");
    }

    #[test]
    fn test_empty_env_value_falls_back_to_file() {
        let (_dir, store) = temp_store();
        store.set(API_KEY, "from-file").unwrap();
        let key = resolve_api_key(Some(""), &store).unwrap();
        assert_eq!(key, "from-file");
    }

    #[test]
    fn test_missing_credential_names_setup_command() {
        let (_dir, store) = temp_store();
        let err = resolve_api_key(None, &store).unwrap_err();
        assert!(err.to_string().contains("config set api-key"));
    }

    #[test]
    fn test_default_chain_falls_back_to_mainnet() {
        let (_dir, store) = temp_store();
        assert_eq!(resolve_default_chain(&store).unwrap(), "1");
        store.set(DEFAULT_CHAIN, "137").unwrap();
        assert_eq!(resolve_default_chain(&store).unwrap(), "137");
    }

    #[test]
    fn test_chain_flag_wins_over_configured_default() {
        let (_dir, store) = temp_store();
        store.set(API_KEY, "k").unwrap();
        store.set(DEFAULT_CHAIN, "137").unwrap();
        let settings = resolve_settings(None, Some("42161"), &store).unwrap();
        assert_eq!(settings.chain_id, "42161");
        let settings = resolve_settings(None, None, &store).unwrap();
        assert_eq!(settings.chain_id, "137");
    }
}
