pub mod kind;
pub mod location;
pub mod walk;

pub use kind::*;
pub use location::*;
pub use walk::*;

use serde::{Deserialize, Serialize};

use crate::error::{SyntaxError, SyntaxResult};

/// Tag of the `Other` node at the top of every stylesheet tree
pub const ROOT_TAG: &str = "stylesheet";

/// A node of the static stylesheet tree. Children are owned exclusively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    #[serde(flatten)]
    pub kind: NodeKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
    /// Set by the inherit pass on nodes spliced out of an `@inherit` block
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub inherited: bool,
    pub location: SourceLocation,
}

impl Node {
    pub fn new(kind: NodeKind, location: SourceLocation) -> Self {
        Self { kind, children: Vec::new(), inherited: false, location }
    }

    pub fn root(filename: impl Into<String>) -> Self {
        Self::new(NodeKind::Other(Opaque::new(ROOT_TAG, None)), SourceLocation::new(filename, 1))
    }

    pub fn rule(selector: impl Into<String>) -> Self {
        Self::new(NodeKind::Rule(Rule::new(selector)), SourceLocation::default())
    }

    pub fn unresolved_rule() -> Self {
        Self::new(NodeKind::Rule(Rule::unresolved()), SourceLocation::default())
    }

    pub fn inherit(target: impl Into<String>) -> Self {
        Self::new(NodeKind::Inherit(InheritMarker::new(target)), SourceLocation::default())
    }

    pub fn other(tag: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(NodeKind::Other(Opaque::new(tag, Some(text.into()))), SourceLocation::default())
    }

    /// Shorthand for a `prop` declaration node
    pub fn prop(text: impl Into<String>) -> Self {
        Self::other("prop", text)
    }

    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    pub fn at(mut self, location: SourceLocation) -> Self {
        self.location = location;
        self
    }

    pub fn is_rule(&self) -> bool {
        matches!(self.kind, NodeKind::Rule(_))
    }

    pub fn is_marker(&self) -> bool {
        matches!(self.kind, NodeKind::Inherit(_))
    }

    /// The resolved selector of a rule, compared byte for byte when merging.
    ///
    /// Fails for non-rule nodes and for rules whose selector was never resolved.
    pub fn selector_key(&self) -> SyntaxResult<&str> {
        match &self.kind {
            NodeKind::Rule(Rule { resolved_selector: Some(selector) }) => Ok(selector),
            NodeKind::Rule(Rule { resolved_selector: None }) => {
                Err(SyntaxError::new("rule selector has not been resolved"))
            }
            other => Err(SyntaxError::new(format!("{} node has no selector", other.name()))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_selector_key() {
        let node = Node::rule(".a > .b");
        assert!(node.is_rule());
        assert!(!node.is_marker());
        assert_eq!(node.selector_key().unwrap(), ".a > .b");
    }

    #[test]
    fn test_unresolved_rule_has_no_key() {
        let err = Node::unresolved_rule().selector_key().unwrap_err();
        assert!(err.message().contains("not been resolved"));
    }

    #[test]
    fn test_other_has_no_key() {
        let err = Node::prop("color: red").selector_key().unwrap_err();
        assert_eq!(err.message(), "prop node has no selector");
    }

    #[test]
    fn test_root_is_tagged_stylesheet() {
        let root = Node::root("main.scss");
        assert_eq!(root.kind.name(), ROOT_TAG);
        assert_eq!(root.location, SourceLocation::new("main.scss", 1));
        assert!(!root.inherited);
    }

    #[test]
    fn test_builders_set_children_and_location() {
        let node = Node::inherit("base.scss")
            .at(SourceLocation::new("main.scss", 7))
            .with_children(vec![Node::rule(".a")]);
        assert!(node.is_marker());
        assert_eq!(node.children.len(), 1);
        assert_eq!(node.location.line, 7);
    }
}
