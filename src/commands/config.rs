//! Manage local CLI configuration.
//!
//! The only command group that never touches the network. The credential is
//! masked in all output: fully on set, all but the last four characters on
//! get and list.

use clap::Subcommand;
use serde_json::{json, Value};

use crate::config::{ConfigStore, API_KEY};
use crate::error::Result;

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Set a config value (api-key, default-chain)
    Set { key: String, value: String },
    /// Get a config value
    Get { key: String },
    /// List all config values
    List,
}

pub fn run(cmd: ConfigCommand, store: &ConfigStore) -> Result<Value> {
    match cmd {
        ConfigCommand::Set { key, value } => {
            store.set(&key, &value)?;
            let echoed = if key == API_KEY {
                "***".to_string()
            } else {
                value
            };
            Ok(json!({ "status": "ok", "key": key, "value": echoed }))
        }
        ConfigCommand::Get { key } => {
            let value = match store.get(&key)? {
                Some(value) if key == API_KEY => Value::String(mask_tail(&value)),
                Some(value) => Value::String(value),
                None => Value::Null,
            };
            Ok(json!({ "key": key, "value": value }))
        }
        ConfigCommand::List => {
            let mut map = store.list()?;
            if let Some(key) = map.get_mut(API_KEY) {
                *key = mask_tail(key);
            }
            Ok(serde_json::to_value(map)?)
        }
    }
}

/// Keep only the last four characters visible.
fn mask_tail(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    let tail: String = chars[chars.len().saturating_sub(4)..].iter().collect();
    format!("***{tail}")
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
    fn test_set_masks_api_key_fully() {
        let (_dir, store) = temp_store();
        let out = run(
            ConfigCommand::Set {
                key: "api-key".to_string(),
                value: "secret-key-1234".to_string(),
            },
            &store,
        )
        .unwrap();
        assert_eq!(out["value"], "***");
        // but the real value is persisted
        assert_eq!(store.get("api-key").unwrap().as_deref(), Some("secret-key-1234"));
    }

    #[test]
    fn test_get_shows_last_four_of_api_key() {
        let (_dir, store) = temp_store();
        store.set("api-key", "secret-key-1234").unwrap();
        let out = run(
            ConfigCommand::Get {
                key: "api-key".to_string(),
            },
            &store,
        )
        .unwrap();
        assert_eq!(out["value"], "***1234");
    }

    #[test]
    fn test_get_missing_key_is_null() {
        let (_dir, store) = temp_store();
        let out = run(
            ConfigCommand::Get {
                key: "nope".to_string(),
            },
            &store,
        )
        .unwrap();
        assert_eq!(out["value"], Value::Null);
    }

    #[test]
    fn test_list_masks_credential_only() {
        let (_dir, store) = temp_store();
        store.set("api-key", "secret-key-1234").unwrap();
        store.set("default-chain", "137").unwrap();
        let out = run(ConfigCommand::List, &store).unwrap();
        assert_eq!(out["api-key"], "***1234");
        assert_eq!(out["default-chain"], "137");
    }

    #[test]
    fn test_mask_tail_short_values() {
        assert_eq!(mask_tail("ab"), "***ab");
        assert_eq!(mask_tail(""), "***");
    }
}
