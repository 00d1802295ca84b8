//! Durable key-value store backed by a single JSON file.
//!
//! Writes are whole-file read-modify-write and not safe under concurrent
//! writers; acceptable for a single-user interactive tool.

use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::CONFIG_DIR_ENV;
use crate::error::{CliError, Result};

const CONFIG_FILE: &str = "config.json";
const DEFAULT_DIR: &str = ".chainbase";

type ConfigMap = BTreeMap<String, String>;

/// File-backed configuration store rooted at one directory.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    dir: PathBuf,
}

impl ConfigStore {
    /// Store rooted at an explicit directory. Used directly by tests.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store rooted at `$CHAINBASE_CONFIG_DIR`, else `~/.chainbase`.
    pub fn from_env() -> Result<Self> {
        if let Ok(dir) = env::var(CONFIG_DIR_ENV) {
            if !dir.is_empty() {
                return Ok(Self::new(dir));
            }
        }
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("could not determine home directory".to_string()))?;
        Ok(Self::new(home.join(DEFAULT_DIR)))
    }

    /// Directory holding the config file.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn file_path(&self) -> PathBuf {
        self.dir.join(CONFIG_FILE)
    }

    /// Merge one entry into the persisted mapping.
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut map = self.read()?;
        map.insert(key.to_string(), value.to_string());
        self.write(&map)
    }

    /// Stored value for a key, or `None` when absent.
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read()?.get(key).cloned())
    }

    /// The full persisted mapping.
    pub fn list(&self) -> Result<BTreeMap<String, String>> {
        self.read()
    }

    fn read(&self) -> Result<ConfigMap> {
        let path = self.file_path();
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(ConfigMap::new()),
            Err(e) => return Err(CliError::ConfigIo { path, source: e }),
        };
        serde_json::from_str(&raw).map_err(|e| CliError::CorruptConfig { path, source: e })
    }

    fn write(&self, map: &ConfigMap) -> Result<()> {
        let path = self.file_path();
        fs::create_dir_all(&self.dir).map_err(|e| CliError::ConfigIo {
            path: self.dir.clone(),
            source: e,
        })?;
        let raw = serde_json::to_string_pretty(map)?;
        fs::write(&path, raw).map_err(|e| CliError::ConfigIo {
            path: path.clone(),
            source: e,
        })?;
        restrict_permissions(&path)?;
        Ok(())
    }
}

/// The file holds a credential; keep it readable by the owner only.
#[cfg(unix)]
fn restrict_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o600)).map_err(|e| {
        CliError::ConfigIo {
            path: path.to_path_buf(),
            source: e,
        }
    })
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> Result<()> {
    Ok(())
}
