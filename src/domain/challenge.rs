//! Challenge catalog entries

use serde::{Deserialize, Serialize};

/// Static definition of a challenge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeDefinition {
    /// Unique key, referenced by completion records
    pub name: String,
    /// Display name
    pub label: String,
    #[serde(default)]
    pub description: String,
    /// Difficulty level (1-6 in shipped catalogs)
    pub level: u32,
    /// Entries without the flag are treated as disabled
    #[serde(default)]
    pub enabled: bool,
}

/// Lookups over a slice of challenge definitions
pub trait ChallengeCatalog {
    /// First definition whose name matches exactly
    fn find(&self, name: &str) -> Option<&ChallengeDefinition>;

    /// Number of challenges a user can currently play
    fn enabled_count(&self) -> usize;
}

impl ChallengeCatalog for [ChallengeDefinition] {
    fn find(&self, name: &str) -> Option<&ChallengeDefinition> {
        self.iter().find(|c| c.name == name)
    }

    fn enabled_count(&self) -> usize {
        self.iter().filter(|c| c.enabled).count()
    }
}
