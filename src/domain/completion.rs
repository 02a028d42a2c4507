//! Completion records as logged by the challenge runner

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of a challenge attempt
///
/// Only `Success` is counted towards progress. Statuses this crate does not
/// know about are kept verbatim in `Other` so a newer runner cannot break
/// loading an older user file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CompletionStatus {
    Success,
    Error,
    Other(String),
}

impl CompletionStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for CompletionStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "success" => Self::Success,
            "error" => Self::Error,
            _ => Self::Other(s),
        }
    }
}

impl From<CompletionStatus> for String {
    fn from(status: CompletionStatus) -> Self {
        match status {
            CompletionStatus::Other(s) => s,
            other => other.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for CompletionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Point in time a completion was recorded
///
/// Accepts RFC 3339 strings or epoch milliseconds on input; always written
/// back as RFC 3339.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTimestamp", into = "String")]
pub struct Timestamp(DateTime<Utc>);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    Millis(i64),
    Text(String),
}

impl TryFrom<RawTimestamp> for Timestamp {
    type Error = String;

    fn try_from(raw: RawTimestamp) -> Result<Self, Self::Error> {
        match raw {
            RawTimestamp::Millis(ms) => Self::from_millis(ms)
                .ok_or_else(|| format!("timestamp out of range: {}", ms)),
            RawTimestamp::Text(s) => DateTime::parse_from_rfc3339(&s)
                .map(|dt| Self(dt.with_timezone(&Utc)))
                .map_err(|e| format!("invalid timestamp '{}': {}", s, e)),
        }
    }
}

impl From<Timestamp> for String {
    fn from(ts: Timestamp) -> Self {
        ts.0.to_rfc3339()
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}

impl Timestamp {
    pub fn from_millis(ms: i64) -> Option<Self> {
        DateTime::from_timestamp_millis(ms).map(Self)
    }

    pub fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Gas consumed by one contract function during a challenge run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GasEntry {
    pub function_name: String,
    pub gas_used: u64,
}

impl GasEntry {
    pub fn new(function_name: impl Into<String>, gas_used: u64) -> Self {
        Self {
            function_name: function_name.into(),
            gas_used,
        }
    }
}

/// A user's logged result for one challenge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionRecord {
    /// Name of the challenge definition this record refers to
    pub challenge_name: String,
    pub status: CompletionStatus,
    pub timestamp: Timestamp,

    // On-chain challenges only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_report: Option<Vec<GasEntry>>,
}

impl CompletionRecord {
    pub fn is_success(&self) -> bool {
        self.status == CompletionStatus::Success
    }

    /// Gas entries, empty when the run produced no report
    pub fn gas_entries(&self) -> &[GasEntry] {
        self.gas_report.as_deref().unwrap_or_default()
    }
}
