use directories::ProjectDirs;
use std::path::PathBuf;

const APP_NAME: &str = "courtside";

/// Centralized application directory resolution
pub struct AppDirs;

impl AppDirs {
    pub fn config_path() -> PathBuf {
        ProjectDirs::from("", "", APP_NAME)
            .map(|pd| pd.config_dir().join("config.json"))
            .unwrap_or_else(|| PathBuf::from("courtside_config.json"))
    }

    /// Default tracing output, under $HOME/.local/state/courtside when HOME is set
    pub fn log_path() -> PathBuf {
        Self::state_dir()
            .map(|dir| dir.join("courtside.log"))
            .unwrap_or_else(|| PathBuf::from("courtside.log"))
    }

    /// Where exports triggered from the UI land
    pub fn export_dir() -> PathBuf {
        ProjectDirs::from("", "", APP_NAME)
            .map(|pd| pd.data_local_dir().join("exports"))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    fn state_dir() -> Option<PathBuf> {
        if let Ok(home) = std::env::var("HOME") {
            Some(PathBuf::from(home).join(".local").join("state").join(APP_NAME))
        } else {
            ProjectDirs::from("", "", APP_NAME).map(|pd| pd.data_local_dir().to_path_buf())
        }
    }
}
