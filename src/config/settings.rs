//! Collaborator-side settings: the recent-vaults list.
//!
//! This is front-end bookkeeping only — the vault engine never reads
//! it.  Stored as TOML under the config directory (`~/.passkeep` by
//! default, overridable with `PASSKEEP_CONFIG_DIR`).

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{PasskeepError, Result};

/// One remembered vault.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentVault {
    /// Absolute path of the vault file.
    pub path: String,

    /// Vault label at the time it was last opened.
    pub name: String,

    /// When the vault was last opened or created.
    pub last_opened: DateTime<Utc>,
}

/// Front-end settings, loaded from `recents.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Most-recently-used vaults, newest first.
    #[serde(default)]
    pub recent_vaults: Vec<RecentVault>,
}

impl Settings {
    /// Name of the settings file inside the config directory.
    const FILE_NAME: &'static str = "recents.toml";

    /// How many recent vaults to remember.
    const MAX_RECENT: usize = 10;

    /// Resolve the config directory.
    ///
    /// `PASSKEEP_CONFIG_DIR` wins if set (useful in tests and CI),
    /// otherwise `~/.passkeep`, falling back to the working directory
    /// when no home is available.
    pub fn config_dir() -> PathBuf {
        if let Some(dir) = std::env::var_os("PASSKEEP_CONFIG_DIR") {
            return PathBuf::from(dir);
        }
        match std::env::var_os("HOME") {
            Some(home) => PathBuf::from(home).join(".passkeep"),
            None => PathBuf::from(".passkeep"),
        }
    }

    /// Load settings from `<dir>/recents.toml`.
    ///
    /// A missing file yields defaults; a file that exists but cannot
    /// be parsed is an error.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(Self::FILE_NAME);
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)?;
        toml::from_str(&contents).map_err(|e| {
            PasskeepError::ConfigError(format!("failed to parse {}: {e}", path.display()))
        })
    }

    /// Persist settings to `<dir>/recents.toml`, creating the
    /// directory if needed.
    pub fn save(&self, dir: &Path) -> Result<()> {
        std::fs::create_dir_all(dir)?;
        let contents = toml::to_string_pretty(self)
            .map_err(|e| PasskeepError::ConfigError(format!("serialize settings: {e}")))?;
        std::fs::write(dir.join(Self::FILE_NAME), contents)?;
        Ok(())
    }

    /// Record a vault as most recently used, deduplicating by path.
    pub fn add_recent(&mut self, path: &Path, name: &str) {
        let path_str = path.to_string_lossy().into_owned();
        self.recent_vaults.retain(|v| v.path != path_str);
        self.recent_vaults.insert(
            0,
            RecentVault {
                path: path_str,
                name: name.to_string(),
                last_opened: Utc::now(),
            },
        );
        self.recent_vaults.truncate(Self::MAX_RECENT);
    }

    /// Forget a single remembered vault.
    pub fn remove_recent(&mut self, path: &str) {
        self.recent_vaults.retain(|v| v.path != path);
    }

    /// Forget all remembered vaults.
    pub fn clear_recent(&mut self) {
        self.recent_vaults.clear();
    }

    /// The most recently used vault, if any.
    pub fn most_recent(&self) -> Option<&RecentVault> {
        self.recent_vaults.first()
    }
}
