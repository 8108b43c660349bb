//! Tree notation: reading stylesheet trees from S-expressions and writing
//! them back out.

pub mod build;
pub mod dump;
pub mod helpers;

pub use build::{parse_tree, parse_tree_named, TreeBuilder};
pub use dump::{print_tree, TreePrinter};
