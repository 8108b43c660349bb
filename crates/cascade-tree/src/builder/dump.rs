use crate::sexp::{Printer, SExp};
use crate::tree::*;

/// Renders a stylesheet tree back into tree notation.
///
/// Output read back with [`TreeBuilder`](super::TreeBuilder) yields an equal
/// tree as long as locations are shown.
pub struct TreePrinter {
    printer: Printer,
    show_locations: bool,
}

impl TreePrinter {
    pub fn new() -> Self {
        Self { printer: Printer::new(), show_locations: true }
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.printer = Printer::with_indent(indent);
        self
    }

    /// Leave out `:file` and `:line`, for compact output
    pub fn without_locations(mut self) -> Self {
        self.show_locations = false;
        self
    }

    pub fn print(&self, root: &Node) -> String {
        self.printer.print(&self.to_sexp(root, None))
    }

    pub fn to_sexp(&self, node: &Node, parent_file: Option<&str>) -> SExp {
        let mut elements = vec![SExp::symbol(node.kind.name())];

        match &node.kind {
            NodeKind::Rule(rule) => elements.push(match &rule.resolved_selector {
                Some(selector) => SExp::string(selector),
                None => SExp::nil(),
            }),
            NodeKind::Inherit(marker) => elements.push(SExp::string(&marker.target)),
            NodeKind::Other(opaque) => {
                if let Some(text) = &opaque.text {
                    elements.push(SExp::string(text));
                }
            }
        }

        if self.show_locations {
            if parent_file != Some(node.location.filename.as_str()) {
                elements.push(SExp::keyword("file"));
                elements.push(SExp::string(&node.location.filename));
            }
            elements.push(SExp::keyword("line"));
            elements.push(SExp::number(node.location.line));
        }

        if node.inherited {
            elements.push(SExp::keyword("inherited"));
            elements.push(SExp::symbol("true"));
        }

        let child_file = match &node.kind {
            NodeKind::Inherit(marker) => marker.target.as_str(),
            _ => node.location.filename.as_str(),
        };
        elements.extend(node.children.iter().map(|child| self.to_sexp(child, Some(child_file))));

        SExp::list(elements)
    }
}

impl Default for TreePrinter {
    fn default() -> Self {
        Self::new()
    }
}

/// Print a tree with default settings
pub fn print_tree(root: &Node) -> String {
    TreePrinter::new().print(root)
}
