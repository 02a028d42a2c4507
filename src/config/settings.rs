//! Settings configuration types

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::progress::TimeDisplay;

/// Input file locations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataSettings {
    /// User state file (JSON or YAML)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_state: Option<PathBuf>,

    /// Challenge catalog file (JSON or YAML)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub challenges: Option<PathBuf>,
}

/// When to emit ANSI styling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Only when stdout is a terminal and NO_COLOR is unset
    #[default]
    Auto,
    Always,
    Never,
}

/// Output settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplaySettings {
    #[serde(default)]
    pub color: ColorMode,

    /// Timezone for completion dates
    #[serde(default)]
    pub time: TimeDisplay,
}
