//! Command implementations

pub mod check;
pub mod resolve;
pub mod show;

pub use check::check_files;
pub use resolve::resolve_tree;
pub use show::show_tree;

use anyhow::Result;
use cascade_tree::{Node, TreePrinter};

use crate::config::{Config, OutputFormat};

/// Render a tree in the requested format
pub fn render(tree: &Node, format: OutputFormat, config: &Config) -> Result<String> {
    match format {
        OutputFormat::Sexp => {
            let mut printer = TreePrinter::new().with_indent(config.indent);
            if !config.show_locations {
                printer = printer.without_locations();
            }
            Ok(printer.print(tree))
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(tree)?),
    }
}
