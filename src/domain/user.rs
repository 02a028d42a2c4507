use serde::{Deserialize, Serialize};

use super::CompletionRecord;

/// A user's identity and the completion records logged for them
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserState {
    /// Wallet address the challenges were played with
    pub address: String,

    /// Human-readable alias (ENS name), if one resolved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ens: Option<String>,

    /// Completion records, in the order they were logged
    #[serde(default)]
    pub challenges: Vec<CompletionRecord>,
}

impl UserState {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            ens: None,
            challenges: Vec::new(),
        }
    }

    /// Alias when present and non-empty, otherwise the raw address
    pub fn display_name(&self) -> &str {
        match self.ens.as_deref() {
            Some(ens) if !ens.is_empty() => ens,
            _ => &self.address,
        }
    }

    /// Records with a success status, in logged order
    pub fn successful_records(&self) -> impl Iterator<Item = &CompletionRecord> {
        self.challenges.iter().filter(|c| c.is_success())
    }
}
