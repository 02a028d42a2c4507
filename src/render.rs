//! Plain-text rendering of a menu tree
//!
//! Non-interactive stand-in for the menu engine: prints the outline and,
//! optionally, each node's detail message.

use crate::domain::TreeNode;

/// Outline of the tree with box-drawing guides, one node per line
pub fn render_tree(root: &TreeNode) -> String {
    let mut out = String::new();
    out.push_str(&root.label);
    out.push('\n');
    render_children(root, "", &mut out);
    out
}

fn render_children(node: &TreeNode, prefix: &str, out: &mut String) {
    let count = node.children.len();
    for (i, child) in node.children.iter().enumerate() {
        let last = i + 1 == count;
        out.push_str(prefix);
        out.push_str(if last { "└─ " } else { "├─ " });
        out.push_str(&child.label);
        out.push('\n');

        let child_prefix = format!("{}{}", prefix, if last { "   " } else { "│  " });
        render_children(child, &child_prefix, out);
    }
}

/// Label, then the message indented beneath it
pub fn render_node_detail(node: &TreeNode) -> String {
    let mut out = format!("== {} ==\n", node.label);
    if let Some(message) = &node.message {
        for line in message.lines() {
            out.push_str("  ");
            out.push_str(line);
            out.push('\n');
        }
    }
    out
}

/// Details of every selectable node in pre-order
pub fn render_details(root: &TreeNode) -> String {
    root.walk()
        .map(|(_, node)| node)
        .filter(|node| node.is_selectable() && node.message.is_some())
        .map(render_node_detail)
        .collect::<Vec<_>>()
        .join("\n")
}
