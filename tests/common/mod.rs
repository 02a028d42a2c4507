//! Shared fixtures for progress tree tests

#![allow(dead_code)]

use questview::{ChallengeDefinition, CompletionRecord, CompletionStatus, GasEntry, Timestamp, UserState};

pub const ADDRESS: &str = "0x9f8c163cBA728e99993ABe7495F06c0A3c8Ac8b9";

/// Six enabled challenges (levels 1-6) plus one disabled level-2 challenge
pub fn catalog() -> Vec<ChallengeDefinition> {
    let mut challenges: Vec<_> = (1..=6)
        .map(|level| challenge(&format!("level-{}", level), level, true))
        .collect();
    challenges.push(challenge("retired", 2, false));
    challenges
}

pub fn challenge(name: &str, level: u32, enabled: bool) -> ChallengeDefinition {
    ChallengeDefinition {
        name: name.to_string(),
        label: format!("Challenge {}", name),
        description: format!("Complete {}", name),
        level,
        enabled,
    }
}

pub fn success(name: &str) -> CompletionRecord {
    record(name, CompletionStatus::Success)
}

pub fn record(name: &str, status: CompletionStatus) -> CompletionRecord {
    CompletionRecord {
        challenge_name: name.to_string(),
        status,
        timestamp: Timestamp::from_millis(1_704_164_645_000).expect("valid timestamp"),
        contract_address: None,
        network: None,
        gas_report: None,
    }
}

pub fn with_gas(mut record: CompletionRecord, entries: &[(&str, u64)]) -> CompletionRecord {
    record.gas_report = Some(
        entries
            .iter()
            .map(|(name, gas)| GasEntry::new(*name, *gas))
            .collect(),
    );
    record
}

pub fn user(records: Vec<CompletionRecord>) -> UserState {
    UserState {
        address: ADDRESS.to_string(),
        ens: None,
        challenges: records,
    }
}
