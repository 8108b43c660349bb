use serde::{Deserialize, Serialize};

/// What a node is. Passes match on this exhaustively, so adding a kind
/// forces every traversal to decide how to treat it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NodeKind {
    Rule(Rule),
    Inherit(InheritMarker),
    Other(Opaque),
}

impl NodeKind {
    /// Short name used in diagnostics and tree dumps
    pub fn name(&self) -> &str {
        match self {
            NodeKind::Rule(_) => "rule",
            NodeKind::Inherit(_) => "inherit",
            NodeKind::Other(opaque) => &opaque.tag,
        }
    }
}

/// A style rule. The selector is resolved by an earlier stage; `None`
/// means that stage never got to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub resolved_selector: Option<String>,
}

impl Rule {
    pub fn new(selector: impl Into<String>) -> Self {
        Self { resolved_selector: Some(selector.into()) }
    }

    pub fn unresolved() -> Self {
        Self { resolved_selector: None }
    }
}

/// Placeholder for an `@inherit` directive. Its children are the referenced
/// block; `target` names that block for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InheritMarker {
    pub target: String,
}

impl InheritMarker {
    pub fn new(target: impl Into<String>) -> Self {
        Self { target: target.into() }
    }
}

/// Content this pass carries through untouched: declarations, comments,
/// at-rules, the stylesheet root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Opaque {
    pub tag: String,
    pub text: Option<String>,
}

impl Opaque {
    pub fn new(tag: impl Into<String>, text: Option<String>) -> Self {
        Self { tag: tag.into(), text }
    }
}
