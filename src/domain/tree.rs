//! Display tree handed to the menu layer

use serde::{Deserialize, Serialize};

/// Kind tag understood by the menu renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    #[default]
    Header,
}

/// A labeled, nameable menu entry with optional children and detail message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub label: String,
    /// Stable key; not guaranteed unique among siblings
    pub name: String,
    #[serde(default)]
    pub children: Vec<TreeNode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
}

impl TreeNode {
    pub fn header(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Header,
            label: label.into(),
            name: name.into(),
            children: Vec::new(),
            message: None,
            disabled: None,
        }
    }

    pub fn with_children(mut self, children: Vec<TreeNode>) -> Self {
        self.children = children;
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Mark as non-selectable
    pub fn disabled(mut self) -> Self {
        self.disabled = Some(true);
        self
    }

    pub fn is_selectable(&self) -> bool {
        !self.disabled.unwrap_or(false)
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// First direct child with the given name
    pub fn find_child(&self, name: &str) -> Option<&TreeNode> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Depth-first, pre-order walk yielding `(depth, node)`, root at depth 0
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            stack: vec![(0, self)],
        }
    }
}

/// Iterator returned by [`TreeNode::walk`]
pub struct Walk<'a> {
    stack: Vec<(usize, &'a TreeNode)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        self.stack
            .extend(node.children.iter().rev().map(|c| (depth + 1, c)));
        Some((depth, node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TreeNode {
        TreeNode::header("root", "Root").with_children(vec![
            TreeNode::header("a", "A").with_children(vec![TreeNode::header("a1", "A1").disabled()]),
            TreeNode::header("b", "B"),
        ])
    }

    #[test]
    fn test_walk_is_preorder() {
        let tree = sample();
        let visited: Vec<_> = tree.walk().map(|(d, n)| (d, n.name.as_str())).collect();
        assert_eq!(visited, vec![(0, "root"), (1, "a"), (2, "a1"), (1, "b")]);
    }

    #[test]
    fn test_selectable() {
        let tree = sample();
        assert!(tree.is_selectable());
        let leaf = &tree.children[0].children[0];
        assert!(!leaf.is_selectable());
        assert!(leaf.is_leaf());
    }

    #[test]
    fn test_find_child_looks_one_level_down() {
        let tree = sample();
        assert_eq!(tree.find_child("b").map(|n| n.label.as_str()), Some("B"));
        assert!(tree.find_child("a1").is_none());
        assert!(tree.find_child("a").and_then(|a| a.find_child("a1")).is_some());
    }

    #[test]
    fn test_serializes_like_menu_nodes() {
        let node = TreeNode::header("stats", "Progress Stats").with_message("hi");
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["type"], "header");
        assert_eq!(json["name"], "stats");
        assert_eq!(json["message"], "hi");
        assert!(json.get("disabled").is_none());
        assert_eq!(json["children"].as_array().map(|c| c.len()), Some(0));
    }
}
