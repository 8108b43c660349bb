//! The `@inherit` pass.
//!
//! Walks a static stylesheet tree once. Every node collects its children into
//! a fresh scope; an `@inherit` marker instead hands its (already resolved)
//! children to the scope it sits in, flagged as inherited, and disappears.
//! When a scope is complete it goes through [`merge`] and becomes the owning
//! node's new child list.
//!
//! Scopes are plain vectors owned by the call that opened them, so an error
//! unwinding out of a nested visit cannot leave a scope half-attached.

pub mod merge;

pub use merge::{merge, merge_with_count};

use tracing::{debug, trace};

use crate::error::{SyntaxError, SyntaxResult};
use crate::tree::{Node, NodeKind};

/// Run the pass over the tree rooted at `root` and return the rewritten tree.
pub fn run(root: Node) -> SyntaxResult<Node> {
    Inherit::new().resolve(root)
}

/// Counters collected while resolving a tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InheritStats {
    /// Scopes completed, one per visited node that is not a marker
    pub scopes: usize,
    /// `@inherit` markers consumed
    pub markers_spliced: usize,
    /// Nodes moved out of markers into the enclosing scope
    pub nodes_spliced: usize,
    /// Native rules absorbed by an inherited rule
    pub rules_merged: usize,
}

#[derive(Debug, Default)]
pub struct Inherit {
    stats: InheritStats,
}

impl Inherit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> InheritStats {
        self.stats
    }

    /// Resolve every marker under `root`, accumulating into [`Inherit::stats`].
    pub fn resolve(&mut self, root: Node) -> SyntaxResult<Node> {
        if let NodeKind::Inherit(marker) = &root.kind {
            return Err(SyntaxError::new(format!(
                "@inherit of '{}' has no enclosing scope to splice into",
                marker.target
            ))
            .modify_backtrace(root.location));
        }

        let location = root.location.clone();
        let root = self.visit_children(root).map_err(|e| e.modify_backtrace(location))?;

        debug!(
            scopes = self.stats.scopes,
            markers = self.stats.markers_spliced,
            merged = self.stats.rules_merged,
            "inherit pass complete"
        );
        Ok(root)
    }

    /// Visit one node whose enclosing scope is `scope`.
    fn visit(&mut self, node: Node, scope: &mut Vec<Node>) -> SyntaxResult<()> {
        let location = node.location.clone();
        self.dispatch(node, scope).map_err(|e| e.modify_backtrace(location))
    }

    fn dispatch(&mut self, node: Node, scope: &mut Vec<Node>) -> SyntaxResult<()> {
        match node.kind {
            NodeKind::Inherit(_) => self.visit_inherit(node, scope),
            NodeKind::Rule(_) | NodeKind::Other(_) => {
                let node = self.visit_children(node)?;
                scope.push(node);
                Ok(())
            }
        }
    }

    /// Resolve the marker's own block, then splice it into the enclosing scope.
    fn visit_inherit(&mut self, marker: Node, scope: &mut Vec<Node>) -> SyntaxResult<()> {
        let children = self.resolve_children(marker.children)?;

        self.stats.markers_spliced += 1;
        self.stats.nodes_spliced += children.len();
        debug!(
            at = %marker.location,
            nodes = children.len(),
            "splicing inherited block"
        );

        scope.extend(children.into_iter().map(|mut child| {
            child.inherited = true;
            child
        }));
        Ok(())
    }

    fn visit_children(&mut self, mut parent: Node) -> SyntaxResult<Node> {
        let children = std::mem::take(&mut parent.children);
        parent.children = self.resolve_children(children)?;
        self.stats.scopes += 1;
        Ok(parent)
    }

    /// Collect `children` into a new scope and merge it.
    fn resolve_children(&mut self, children: Vec<Node>) -> SyntaxResult<Vec<Node>> {
        let mut scope = Vec::with_capacity(children.len());
        for child in children {
            self.visit(child, &mut scope)?;
        }

        let (merged, consumed) = merge_with_count(scope)?;
        self.stats.rules_merged += consumed;
        trace!(len = merged.len(), consumed, "scope resolved");
        Ok(merged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{count_markers, SourceLocation};

    fn rule(selector: &str, props: &[&str]) -> Node {
        Node::rule(selector).with_children(props.iter().map(|p| Node::prop(*p)).collect())
    }

    #[test]
    fn test_tree_without_markers_is_untouched() {
        let tree = Node::root("main.scss").with_children(vec![
            rule(".a", &["d1"]),
            rule(".a", &["d2"]).with_children(vec![rule(".a .b", &["d3"])]),
            Node::other("comment", "/* x */"),
        ]);

        assert_eq!(run(tree.clone()).unwrap(), tree);
    }

    #[test]
    fn test_marker_is_spliced_and_flagged() {
        let tree = Node::root("main.scss").with_children(vec![
            rule(".a", &["d1"]),
            Node::inherit("base.scss").with_children(vec![rule(".b", &["d2"])]),
        ]);

        let result = run(tree).unwrap();
        assert_eq!(result.children.len(), 2);
        assert!(!result.children[0].inherited);
        assert!(result.children[1].inherited);
        assert_eq!(result.children[1].selector_key().unwrap(), ".b");
        assert_eq!(count_markers(&result), 0);
    }

    #[test]
    fn test_stats_are_collected() {
        let tree = Node::root("main.scss").with_children(vec![
            rule(".a", &["d1"]),
            Node::inherit("base.scss").with_children(vec![rule(".a", &["d2"]), Node::prop("x")]),
        ]);

        let mut pass = Inherit::new();
        pass.resolve(tree).unwrap();
        let stats = pass.stats();
        assert_eq!(stats.markers_spliced, 1);
        assert_eq!(stats.nodes_spliced, 2);
        assert_eq!(stats.rules_merged, 1);
        // root, .a, .a (inherited), prop x, d1, d2
        assert_eq!(stats.scopes, 6);
    }

    #[test]
    fn test_marker_at_root_is_rejected() {
        let marker = Node::inherit("base.scss").at(SourceLocation::new("main.scss", 3));
        let err = run(marker).unwrap_err();
        assert!(err.message().contains("base.scss"));
        assert_eq!(err.backtrace(), &[SourceLocation::new("main.scss", 3)]);
    }

    #[test]
    fn test_empty_marker_vanishes() {
        let tree = Node::root("main.scss").with_children(vec![Node::inherit("empty.scss")]);
        let result = run(tree).unwrap();
        assert!(result.children.is_empty());
    }
}
