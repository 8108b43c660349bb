//! Show command implementation

use anyhow::Result;
use std::path::Path;

use super::render;
use crate::config::{Config, OutputFormat};
use crate::input::load_tree;

/// Print a tree as read, without running any pass
pub fn show_tree(path: &Path, format: OutputFormat, config: &Config) -> Result<()> {
    let tree = load_tree(path)?;
    println!("{}", render(&tree, format, config)?);
    Ok(())
}
