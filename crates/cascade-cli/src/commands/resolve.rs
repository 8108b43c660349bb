//! Resolve command implementation

use anyhow::{Context, Result};
use cascade_tree::Inherit;
use colored::*;
use std::path::Path;
use tracing::info;

use super::render;
use crate::config::{Config, OutputFormat};
use crate::input::load_tree;

/// Run the inherit pass over a tree and print the result
pub fn resolve_tree(path: &Path, format: OutputFormat, stats: bool, config: &Config) -> Result<()> {
    let tree = load_tree(path)?;

    let mut pass = Inherit::new();
    let resolved = pass
        .resolve(tree)
        .with_context(|| format!("Failed to resolve @inherit in {}", path.display()))?;

    let counts = pass.stats();
    info!(
        path = %path.display(),
        markers = counts.markers_spliced,
        merged = counts.rules_merged,
        "resolved tree"
    );

    println!("{}", render(&resolved, format, config)?);

    if stats {
        eprintln!();
        eprintln!("{}", "Inherit statistics".bold().underline());
        eprintln!("  {}: {}", "Scopes".bold(), counts.scopes);
        eprintln!("  {}: {}", "Markers spliced".bold(), counts.markers_spliced);
        eprintln!("  {}: {}", "Nodes spliced".bold(), counts.nodes_spliced);
        eprintln!("  {}: {}", "Rules merged".bold(), counts.rules_merged);
    }

    Ok(())
}
