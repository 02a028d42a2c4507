//! Progress menu assembly

use crate::domain::{ChallengeCatalog, ChallengeDefinition, CompletionRecord, TreeNode, UserState};

use super::format::{format_percent, format_timestamp, group_thousands, percentage, TimeDisplay};
use super::gas_report::build_gas_report_node;
use super::points::total_points;
use super::style::{PlainStyle, TextStyle};

/// Shown when an on-chain completion did not record its network
const UNKNOWN_NETWORK: &str = "unknown";

/// A successful completion joined with its catalog entry
#[derive(Debug, Clone, Copy)]
struct CompletedChallenge<'a> {
    challenge: &'a ChallengeDefinition,
    completion: &'a CompletionRecord,
}

/// Derived numbers shown in the stats node
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressSummary {
    pub points: u64,
    /// Successful records that matched a catalog entry
    pub completed: usize,
    /// All successful records, matched or not
    pub success_records: usize,
    pub enabled_total: usize,
    /// `completed / enabled_total * 100`; NaN or infinite when no challenge is enabled
    pub completion_rate: f64,
}

impl ProgressSummary {
    /// Completion rate with one decimal place
    pub fn completion_rate_text(&self) -> String {
        format_percent(self.completion_rate)
    }
}

/// Builds the progress menu for one user against a challenge catalog
pub struct ProgressView<'a> {
    user: &'a UserState,
    challenges: &'a [ChallengeDefinition],
    style: Box<dyn TextStyle + 'a>,
    time_display: TimeDisplay,
}

impl<'a> ProgressView<'a> {
    pub fn new(user: &'a UserState, challenges: &'a [ChallengeDefinition]) -> Self {
        Self {
            user,
            challenges,
            style: Box::new(PlainStyle),
            time_display: TimeDisplay::default(),
        }
    }

    pub fn with_style(mut self, style: impl TextStyle + 'a) -> Self {
        self.style = Box::new(style);
        self
    }

    pub fn with_time_display(mut self, time_display: TimeDisplay) -> Self {
        self.time_display = time_display;
        self
    }

    /// Successful records joined to the catalog, in the user's logged order
    fn completed_challenges(&self) -> Vec<CompletedChallenge<'a>> {
        let user: &'a UserState = self.user;
        let challenges: &'a [ChallengeDefinition] = self.challenges;

        user.successful_records()
            .filter_map(|completion| match challenges.find(&completion.challenge_name) {
                Some(challenge) => Some(CompletedChallenge {
                    challenge,
                    completion,
                }),
                None => {
                    tracing::debug!(
                        challenge = %completion.challenge_name,
                        "Dropping completion for unknown challenge"
                    );
                    None
                }
            })
            .collect()
    }

    fn summarize(&self, completed: &[CompletedChallenge<'_>]) -> ProgressSummary {
        let enabled_total = self.challenges.enabled_count();
        ProgressSummary {
            points: total_points(completed.iter().map(|c| c.challenge.level)),
            completed: completed.len(),
            success_records: self.user.successful_records().count(),
            enabled_total,
            completion_rate: percentage(completed.len() as f64, enabled_total as f64),
        }
    }

    /// Stats without building the tree
    pub fn summary(&self) -> ProgressSummary {
        self.summarize(&self.completed_challenges())
    }

    /// Build the "Progress Menu" root: stats node, then completed challenges
    pub fn build_progress_tree(&self) -> TreeNode {
        let completed = self.completed_challenges();
        let summary = self.summarize(&completed);

        tracing::debug!(
            user = %self.user.address,
            completed = summary.completed,
            enabled = summary.enabled_total,
            points = summary.points,
            "Building progress tree"
        );

        let stats_node = TreeNode::header("stats", "Progress Stats")
            .with_message(self.stats_message(&summary));

        let challenge_nodes = completed
            .iter()
            .map(|entry| self.challenge_node(entry))
            .collect();

        let completed_node = TreeNode::header("completed", "Completed Challenges")
            .with_children(challenge_nodes)
            .with_message(format!("You have completed {} challenges", completed.len()));

        TreeNode::header("progress-menu", "Progress Menu")
            .with_children(vec![stats_node, completed_node])
            .with_message("View your progress")
    }

    fn stats_message(&self, summary: &ProgressSummary) -> String {
        let style = self.style.as_ref();
        format!(
            "{}\n\nAddress: {}\n{}\n\nChallenge Progress\nTotal Challenges: {}\nCompleted: {}\n",
            style.bold("Your Stats"),
            style.accent(self.user.display_name()),
            style.highlight(&format!(
                "Points Earned: {}",
                group_thousands(u128::from(summary.points))
            )),
            style.accent(&summary.enabled_total.to_string()),
            style.accent(&format!(
                "{} ({}%)",
                summary.success_records,
                summary.completion_rate_text()
            )),
        )
    }

    fn challenge_node(&self, entry: &CompletedChallenge<'_>) -> TreeNode {
        let gas = entry.completion.gas_entries();
        let children = if gas.is_empty() {
            Vec::new()
        } else {
            vec![build_gas_report_node(gas, self.style.as_ref())]
        };

        TreeNode::header(entry.challenge.name.as_str(), entry.challenge.label.as_str())
            .with_children(children)
            .with_message(self.challenge_message(entry))
    }

    fn challenge_message(&self, entry: &CompletedChallenge<'_>) -> String {
        let style = self.style.as_ref();
        let CompletedChallenge {
            challenge,
            completion,
        } = entry;

        let mut message = format!(
            "{}\n\nDescription: {}\n\nCompletion Date: {}\n",
            style.bold(&challenge.label),
            challenge.description,
            style.accent(&format_timestamp(&completion.timestamp, self.time_display)),
        );

        if let Some(address) = completion.contract_address.as_deref().filter(|a| !a.is_empty()) {
            let network = completion.network.as_deref().unwrap_or(UNKNOWN_NETWORK);
            message.push_str(&format!("Contract Address: {}\n", style.accent(address)));
            message.push_str(&format!("Network: {}\n", style.accent(network)));
        }

        message
    }
}
