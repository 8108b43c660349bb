//! Read-only tree walking.
//!
//! Passes that only inspect a tree (tooling, assertions in tests) share this
//! pre-order walk instead of each writing its own recursion.

use super::Node;

/// Visit `node` and then each of its descendants, depth-first, in child order.
pub fn walk<V>(node: &Node, visitor: &mut V)
where
    V: FnMut(&Node),
{
    visitor(node);

    for child in &node.children {
        walk(child, visitor);
    }
}

/// Number of `@inherit` markers anywhere in the tree, the root included
pub fn count_markers(root: &Node) -> usize {
    count_matching(root, Node::is_marker)
}

/// Number of nodes in the tree, the root included
pub fn count_nodes(root: &Node) -> usize {
    count_matching(root, |_| true)
}

pub fn count_matching<P>(root: &Node, predicate: P) -> usize
where
    P: Fn(&Node) -> bool,
{
    let mut count = 0;
    walk(root, &mut |node| {
        if predicate(node) {
            count += 1;
        }
    });
    count
}
