use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::app_dirs::AppDirs;
use crate::chart::StatKey;
use crate::profile::PlayerProfile;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub player: Option<PlayerProfile>,
    pub chart_stat: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            player: None,
            chart_stat: StatKey::Points.path().to_string(),
        }
    }
}

impl Config {
    /// Saved chart key, falling back to points when the file holds something stale
    pub fn chart_key(&self) -> StatKey {
        self.chart_stat.parse().unwrap_or(StatKey::Points)
    }
}

pub trait ConfigStore {
    fn load(&self) -> Config;
    fn save(&self, cfg: &Config) -> std::io::Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            path: AppDirs::config_path(),
        }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Config {
        match fs::read(&self.path) {
            Ok(bytes) => match serde_json::from_slice::<Config>(&bytes) {
                Ok(cfg) => cfg,
                Err(e) => {
                    warn!(path = %self.path.display(), error = %e, "ignoring unreadable config");
                    Config::default()
                }
            },
            Err(_) => Config::default(),
        }
    }

    fn save(&self, cfg: &Config) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(cfg)?;
        fs::write(&self.path, data)
    }
}

/// Store used with `--no-config`: always defaults, never writes
#[derive(Debug, Clone, Default)]
pub struct EphemeralConfigStore;

impl ConfigStore for EphemeralConfigStore {
    fn load(&self) -> Config {
        Config::default()
    }

    fn save(&self, _cfg: &Config) -> std::io::Result<()> {
        Ok(())
    }
}
