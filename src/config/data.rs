//! Loading user state and challenge catalogs from disk

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::domain::{ChallengeDefinition, UserState};

/// Error type for data file loading
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid YAML in {}: {source}", .path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Unsupported data file extension: {}", .path.display())]
    UnsupportedFormat { path: PathBuf },
}

/// Serialization format of a data file, chosen by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Json,
    Yaml,
}

impl DataFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

fn load_file<T: DeserializeOwned>(path: &Path) -> Result<T, DataError> {
    let format = DataFormat::from_path(path).ok_or_else(|| DataError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;

    let content = std::fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    match format {
        DataFormat::Json => serde_json::from_str(&content).map_err(|source| DataError::Json {
            path: path.to_path_buf(),
            source,
        }),
        DataFormat::Yaml => serde_yaml::from_str(&content).map_err(|source| DataError::Yaml {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Load a user state file
pub fn load_user_state(path: &Path) -> Result<UserState, DataError> {
    let user: UserState = load_file(path)?;
    tracing::debug!(
        "Loaded {} completion records for {} from {}",
        user.challenges.len(),
        user.address,
        path.display()
    );
    Ok(user)
}

/// Load a challenge catalog (a list of definitions)
pub fn load_challenges(path: &Path) -> Result<Vec<ChallengeDefinition>, DataError> {
    let challenges: Vec<ChallengeDefinition> = load_file(path)?;
    tracing::debug!(
        "Loaded {} challenge definitions from {}",
        challenges.len(),
        path.display()
    );
    Ok(challenges)
}
