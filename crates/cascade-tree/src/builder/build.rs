use super::helpers::*;
use crate::error::{ParseError, Result};
use crate::sexp::{Parser, SExp};
use crate::tree::*;

/// Builds stylesheet trees from tree notation.
///
/// Locations default to the line the node's list starts on and to the file
/// of the enclosing node; children of an `inherit` default to its target.
pub struct TreeBuilder {
    filename: String,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self { filename: SourceLocation::ANONYMOUS.to_string() }
    }

    /// Use `filename` for nodes that do not name their own file
    pub fn with_filename(filename: impl Into<String>) -> Self {
        Self { filename: filename.into() }
    }

    pub fn build(&self, sexp: &SExp) -> Result<Node> {
        self.build_node(sexp, &self.filename)
    }

    fn build_node(&self, sexp: &SExp, file: &str) -> Result<Node> {
        let list = expect_list(sexp)?;
        let form = split_form(list)?;

        let filename = match form.field("file") {
            Some(value) => expect_string(value)?,
            None => file.to_string(),
        };
        let line = match form.field("line") {
            Some(value) => expect_number(value)?,
            None => list.pos.line,
        };
        let inherited = match form.field("inherited") {
            Some(value) => expect_bool(value)?,
            None => false,
        };

        for (keyword, _) in &form.fields {
            if !matches!(keyword.name.as_str(), "file" | "line" | "inherited") {
                return Err(ParseError::UnknownField {
                    field: keyword.name.clone(),
                    node: form.head.value.clone(),
                    pos: keyword.pos,
                });
            }
        }

        let kind = self.build_kind(&form, list.pos)?;
        let child_file = match &kind {
            NodeKind::Inherit(marker) => marker.target.clone(),
            _ => filename.clone(),
        };

        let children = form
            .children
            .iter()
            .map(|child| self.build_node(child, &child_file))
            .collect::<Result<Vec<_>>>()?;

        Ok(Node {
            kind,
            children,
            inherited,
            location: SourceLocation::new(filename, line),
        })
    }

    fn build_kind(&self, form: &NodeForm<'_>, pos: crate::Position) -> Result<NodeKind> {
        let require = |what: &str| {
            form.argument.ok_or_else(|| ParseError::Expected {
                expected: what.to_string(),
                found: "nothing".to_string(),
                pos,
            })
        };

        match form.head.value.as_str() {
            ROOT_TAG => match form.argument {
                Some(argument) => Err(ParseError::Expected {
                    expected: "field or child node".to_string(),
                    found: argument.describe(),
                    pos,
                }),
                None => Ok(NodeKind::Other(Opaque::new(ROOT_TAG, None))),
            },
            "rule" => {
                let selector = expect_optional_string(require("selector string or nil")?)?;
                Ok(NodeKind::Rule(Rule { resolved_selector: selector }))
            }
            "inherit" => {
                let target = expect_string(require("inherited file name")?)?;
                Ok(NodeKind::Inherit(InheritMarker::new(target)))
            }
            tag => {
                let text = form.argument.map(expect_optional_string).transpose()?.flatten();
                Ok(NodeKind::Other(Opaque::new(tag, text)))
            }
        }
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a tree written in tree notation
pub fn parse_tree(input: &str) -> Result<Node> {
    TreeBuilder::new().build(&Parser::parse_str(input)?)
}

/// Parse a tree, attributing nodes without a `:file` to `filename`
pub fn parse_tree_named(input: &str, filename: &str) -> Result<Node> {
    TreeBuilder::with_filename(filename).build(&Parser::parse_str(input)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_defaults_to_list_position() {
        let tree = parse_tree("(stylesheet\n  (rule \".a\"))").unwrap();
        assert_eq!(tree.location, SourceLocation::anonymous(1));
        assert_eq!(tree.children[0].location, SourceLocation::anonymous(2));
    }

    #[test]
    fn test_inherit_children_default_to_target_file() {
        let tree = parse_tree_named(
            r#"(stylesheet (inherit "base.scss" :line 4 (rule ".a" :line 1)))"#,
            "main.scss",
        )
        .unwrap();
        let marker = &tree.children[0];
        assert_eq!(marker.location, SourceLocation::new("main.scss", 4));
        assert_eq!(marker.children[0].location, SourceLocation::new("base.scss", 1));
    }

    #[test]
    fn test_unknown_field() {
        let err = parse_tree(r#"(rule ".a" :colour "red")"#).unwrap_err();
        match err {
            ParseError::UnknownField { field, node, .. } => {
                assert_eq!(field, "colour");
                assert_eq!(node, "rule");
            }
            other => panic!("Expected UnknownField, got {:?}", other),
        }
    }

    #[test]
    fn test_rule_requires_selector() {
        let err = parse_tree("(rule :line 2)").unwrap_err();
        assert!(err.to_string().contains("selector string or nil"));
    }

    #[test]
    fn test_stylesheet_takes_no_argument() {
        assert!(parse_tree(r#"(stylesheet "x")"#).is_err());
    }
}
