//! Folding inherited rules together with the native rules they shadow.

use std::mem;

use tracing::debug;

use crate::error::SyntaxResult;
use crate::tree::Node;

/// Resolve one completed scope.
///
/// Inherited rules are visited last-declared first. Each one absorbs the
/// children of every native rule with a byte-identical selector, and those
/// native rules are consumed. The result keeps the original sibling order
/// minus the consumed rules.
pub fn merge(siblings: Vec<Node>) -> SyntaxResult<Vec<Node>> {
    merge_with_count(siblings).map(|(merged, _)| merged)
}

/// Like [`merge`], also reporting how many native rules were consumed.
pub fn merge_with_count(siblings: Vec<Node>) -> SyntaxResult<(Vec<Node>, usize)> {
    let inherited: Vec<usize> = (0..siblings.len())
        .filter(|&i| siblings[i].inherited && siblings[i].is_rule())
        .collect();

    // Nothing inherited means no selector is ever looked at.
    if inherited.is_empty() {
        return Ok((siblings, 0));
    }

    let native: Vec<usize> = (0..siblings.len()).filter(|&i| !siblings[i].inherited).collect();
    let mut slots: Vec<Option<Node>> = siblings.into_iter().map(Some).collect();
    let mut consumed = 0;

    for &target in inherited.iter().rev() {
        let key = match &slots[target] {
            Some(node) => node.selector_key()?.to_string(),
            None => continue,
        };

        for &candidate in &native {
            if !matches_key(slots[candidate].as_ref(), &key)? {
                continue;
            }

            if let Some(absorbed) = slots[candidate].take() {
                debug!(
                    selector = %key,
                    native = %absorbed.location,
                    "merging native rule into inherited rule"
                );
                absorb(&mut slots[target], absorbed);
                consumed += 1;
            }
        }
    }

    Ok((slots.into_iter().flatten().collect(), consumed))
}

/// Whether a still-unconsumed native entry is a rule selected by `key`
fn matches_key(slot: Option<&Node>, key: &str) -> SyntaxResult<bool> {
    match slot {
        Some(node) if node.is_rule() => Ok(node.selector_key()? == key),
        _ => Ok(false),
    }
}

/// Move the native rule's children onto the end of the inherited rule's.
fn absorb(target: &mut Option<Node>, mut native: Node) {
    if let Some(target) = target {
        let children = mem::take(&mut native.children);
        target.children.extend(children);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(selector: &str, props: &[&str]) -> Node {
        Node::rule(selector).with_children(props.iter().map(|p| Node::prop(*p)).collect())
    }

    fn inherited(mut node: Node) -> Node {
        node.inherited = true;
        node
    }

    fn props(node: &Node) -> Vec<String> {
        node.children
            .iter()
            .map(|child| match &child.kind {
                crate::tree::NodeKind::Other(opaque) => opaque.text.clone().unwrap_or_default(),
                other => other.name().to_string(),
            })
            .collect()
    }

    #[test]
    fn test_merge_without_inherited_is_identity() {
        let siblings = vec![rule(".a", &["d1"]), Node::prop("x"), rule(".a", &["d2"])];
        let (result, consumed) = merge_with_count(siblings.clone()).unwrap();
        assert_eq!(result, siblings);
        assert_eq!(consumed, 0);
    }

    #[test]
    fn test_merge_without_inherited_ignores_unresolved() {
        let siblings = vec![Node::unresolved_rule()];
        assert_eq!(merge(siblings.clone()).unwrap(), siblings);
    }

    #[test]
    fn test_matching_native_is_consumed() {
        let siblings = vec![rule(".a", &["d1"]), inherited(rule(".a", &["d2"]))];
        let (result, consumed) = merge_with_count(siblings).unwrap();

        assert_eq!(consumed, 1);
        assert_eq!(result.len(), 1);
        assert!(result[0].inherited);
        assert_eq!(props(&result[0]), vec!["d2", "d1"]);
    }

    #[test]
    fn test_all_natives_with_key_are_absorbed_in_order() {
        let siblings = vec![
            rule(".a", &["d1"]),
            rule(".b", &["b1"]),
            rule(".a", &["d2"]),
            inherited(rule(".a", &["i1"])),
        ];
        let result = merge(siblings).unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].selector_key().unwrap(), ".b");
        assert_eq!(props(&result[1]), vec!["i1", "d1", "d2"]);
    }

    #[test]
    fn test_last_inherited_wins() {
        let siblings = vec![
            rule(".a", &["d1"]),
            inherited(rule(".a", &["d2"])),
            inherited(rule(".a", &["d3"])),
        ];
        let result = merge(siblings).unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(props(&result[0]), vec!["d2"]);
        assert_eq!(props(&result[1]), vec!["d3", "d1"]);
    }

    #[test]
    fn test_inherited_keeps_its_own_position() {
        let siblings = vec![
            inherited(rule(".a", &["i1"])),
            rule(".b", &["b1"]),
            rule(".a", &["d1"]),
        ];
        let result = merge(siblings).unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].selector_key().unwrap(), ".a");
        assert!(result[0].inherited);
        assert_eq!(result[1].selector_key().unwrap(), ".b");
    }

    #[test]
    fn test_inherited_rules_never_absorb_each_other() {
        let siblings = vec![inherited(rule(".a", &["i1"])), inherited(rule(".a", &["i2"]))];
        let result = merge(siblings).unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(props(&result[0]), vec!["i1"]);
        assert_eq!(props(&result[1]), vec!["i2"]);
    }

    #[test]
    fn test_selector_match_is_exact() {
        let siblings = vec![rule(".a ", &["d1"]), rule(".A", &["d2"]), inherited(rule(".a", &["i1"]))];
        let result = merge(siblings).unwrap();
        assert_eq!(result.len(), 3);
        assert_eq!(props(&result[2]), vec!["i1"]);
    }

    #[test]
    fn test_inherited_non_rules_pass_through() {
        let siblings = vec![rule(".a", &["d1"]), inherited(Node::prop("color: red"))];
        let result = merge(siblings.clone()).unwrap();
        assert_eq!(result, siblings);
    }

    #[test]
    fn test_unresolved_inherited_rule_fails() {
        let siblings = vec![rule(".a", &["d1"]), inherited(Node::unresolved_rule())];
        let err = merge(siblings).unwrap_err();
        assert!(err.message().contains("not been resolved"));
    }

    #[test]
    fn test_unresolved_native_rule_fails_when_compared() {
        let siblings = vec![Node::unresolved_rule(), inherited(rule(".a", &["i1"]))];
        assert!(merge(siblings).is_err());
    }
}
