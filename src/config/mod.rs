//! Configuration loading and management

mod data;
mod io;
mod settings;

pub use data::{load_challenges, load_user_state, DataError, DataFormat};
pub use settings::{ColorMode, DataSettings, DisplaySettings};

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Where user state and the challenge catalog are read from
    #[serde(default)]
    pub data: DataSettings,

    /// Output settings
    #[serde(default)]
    pub display: DisplaySettings,
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load from an explicit path, or the global config when none is given
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Self::load(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::TimeDisplay;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.display.color, ColorMode::Auto);
        assert_eq!(config.display.time, TimeDisplay::Local);
    }

    #[test]
    fn test_parse_full_config() {
        let content = r#"
            [data]
            user_state = "/tmp/user.json"
            challenges = "/tmp/challenges.yaml"

            [display]
            color = "never"
            time = "utc"
        "#;
        let config: Config = toml::from_str(content).unwrap();
        assert_eq!(
            config.data.user_state.as_deref(),
            Some(Path::new("/tmp/user.json"))
        );
        assert_eq!(config.display.color, ColorMode::Never);
        assert_eq!(config.display.time, TimeDisplay::Utc);
    }

    #[test]
    fn test_from_file_reports_path_on_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[display]\ncolor = 3\n").unwrap();

        let err = Config::from_file(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
