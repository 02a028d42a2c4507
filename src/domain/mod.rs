//! Core domain types for questview

mod challenge;
mod completion;
mod tree;
mod user;

pub use challenge::{ChallengeCatalog, ChallengeDefinition};
pub use completion::{CompletionRecord, CompletionStatus, GasEntry, Timestamp};
pub use tree::{NodeKind, TreeNode, Walk};
pub use user::UserState;
