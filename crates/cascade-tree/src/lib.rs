//! Static stylesheet trees and the `@inherit` resolution pass.
//!
//! An upstream stage parses a stylesheet and resolves every rule's selector.
//! [`inherit::run`] then splices each `@inherit` block into the scope that
//! declared it, folding native rules into inherited rules with the same
//! selector. Trees can be written and inspected in a small S-expression
//! notation (see [`builder`]).

pub mod builder;
pub mod error;
pub mod inherit;
pub mod sexp;
pub mod tree;

// Re-export commonly used items
pub use builder::{parse_tree, parse_tree_named, print_tree, TreeBuilder, TreePrinter};
pub use error::{LexError, ParseError, Position, Result, SyntaxError, SyntaxResult};
pub use inherit::{merge, Inherit, InheritStats};
pub use sexp::{print_sexp, Parser, Printer, SExp};
pub use tree::{Node, NodeKind, SourceLocation};
