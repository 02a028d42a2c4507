//! "View Gas Report" sub-tree for a single completion

use crate::domain::{GasEntry, TreeNode};

use super::format::{format_percent, group_thousands, percentage};
use super::style::TextStyle;

/// Build the gas report node: one disabled leaf per entry, heaviest first.
///
/// Entries with equal gas keep their recorded order. The total is summed as
/// `u128` so no report can overflow it. A report whose total is zero yields
/// `NaN` percentages.
pub fn build_gas_report_node(entries: &[GasEntry], style: &dyn TextStyle) -> TreeNode {
    let mut sorted: Vec<&GasEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| b.gas_used.cmp(&a.gas_used));

    let total_gas: u128 = sorted.iter().map(|g| u128::from(g.gas_used)).sum();

    let leaves = sorted
        .into_iter()
        .map(|entry| gas_entry_node(entry, total_gas, style))
        .collect();

    TreeNode::header("gas-report", "View Gas Report")
        .with_children(leaves)
        .with_message(format!(
            "Total Gas Used: {}\nDetailed breakdown:",
            style.bold(&group_thousands(total_gas))
        ))
}

fn gas_entry_node(entry: &GasEntry, total_gas: u128, style: &dyn TextStyle) -> TreeNode {
    let gas = group_thousands(u128::from(entry.gas_used));
    let share = percentage(entry.gas_used as f64, total_gas as f64);

    TreeNode::header(
        format!("gas-entry-{}", entry.function_name),
        format!(
            "{}: {}",
            entry.function_name,
            style.highlight(&format!("{} gas", gas))
        ),
    )
    .with_message(format!(
        "Function: {}\nGas Used: {} ({}% of total)",
        entry.function_name,
        gas,
        format_percent(share)
    ))
    .disabled()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::PlainStyle;

    #[test]
    fn test_sorted_descending_with_shares() {
        let entries = vec![GasEntry::new("a", 100), GasEntry::new("b", 300)];
        let node = build_gas_report_node(&entries, &PlainStyle);

        assert_eq!(node.name, "gas-report");
        assert_eq!(node.label, "View Gas Report");
        assert_eq!(
            node.message.as_deref(),
            Some("Total Gas Used: 400\nDetailed breakdown:")
        );

        let names: Vec<_> = node.children.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["gas-entry-b", "gas-entry-a"]);

        let a = &node.children[1];
        assert_eq!(a.label, "a: 100 gas");
        assert_eq!(
            a.message.as_deref(),
            Some("Function: a\nGas Used: 100 (25.0% of total)")
        );
        assert!(node.children.iter().all(|c| !c.is_selectable() && c.is_leaf()));
    }

    #[test]
    fn test_ties_keep_recorded_order() {
        let entries = vec![
            GasEntry::new("first", 50),
            GasEntry::new("big", 5_000),
            GasEntry::new("second", 50),
        ];
        let node = build_gas_report_node(&entries, &PlainStyle);
        let names: Vec<_> = node.children.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["gas-entry-big", "gas-entry-first", "gas-entry-second"]);
        assert_eq!(node.children[0].label, "big: 5,000 gas");
    }

    #[test]
    fn test_zero_total_gas_reports_nan() {
        let entries = vec![GasEntry::new("noop", 0)];
        let node = build_gas_report_node(&entries, &PlainStyle);
        assert_eq!(
            node.children[0].message.as_deref(),
            Some("Function: noop\nGas Used: 0 (NaN% of total)")
        );
    }

    #[test]
    fn test_total_beyond_u64_does_not_overflow() {
        let entries = vec![GasEntry::new("a", u64::MAX), GasEntry::new("b", 1)];
        let node = build_gas_report_node(&entries, &PlainStyle);

        assert_eq!(
            node.message.as_deref(),
            Some("Total Gas Used: 18,446,744,073,709,551,616\nDetailed breakdown:")
        );
        assert_eq!(node.children[0].name, "gas-entry-a");
        assert_eq!(
            node.children[0].message.as_deref(),
            Some("Function: a\nGas Used: 18,446,744,073,709,551,615 (100.0% of total)")
        );
        assert_eq!(
            node.children[1].message.as_deref(),
            Some("Function: b\nGas Used: 1 (0.0% of total)")
        );
    }

    #[test]
    fn test_duplicate_function_names_are_kept() {
        let entries = vec![GasEntry::new("swap", 10), GasEntry::new("swap", 20)];
        let node = build_gas_report_node(&entries, &PlainStyle);
        assert_eq!(node.children.len(), 2);
        assert!(node.children.iter().all(|c| c.name == "gas-entry-swap"));
    }
}
