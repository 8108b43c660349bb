//! Check command implementation

use anyhow::{bail, Context, Result};
use cascade_tree::inherit;
use cascade_tree::tree::count_markers;
use colored::*;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::errors::{print_error, print_warning};
use crate::input::load_tree;

/// Run the pass over every file matching `patterns` and report per file.
///
/// Fails if any file could not be read, parsed or resolved.
pub fn check_files(patterns: &[String]) -> Result<()> {
    let paths = expand_patterns(patterns)?;

    if paths.is_empty() {
        print_warning("No files matched the given patterns");
        return Ok(());
    }

    let mut failed = 0;
    for path in &paths {
        match check_file(path) {
            Ok(markers) => {
                println!("{} {} ({} @inherit)", "ok".green().bold(), path.display(), markers);
            }
            Err(e) => {
                failed += 1;
                println!("{} {}", "FAILED".red().bold(), path.display());
                print_error(&format!("{}", path.display()), &e);
            }
        }
    }

    println!();
    println!("{} checked, {} failed", paths.len(), failed);

    if failed > 0 {
        bail!("{} of {} files failed", failed, paths.len());
    }
    Ok(())
}

/// Resolve one file; returns how many markers it contained
fn check_file(path: &Path) -> Result<usize> {
    let tree = load_tree(path)?;
    let markers = count_markers(&tree);
    let resolved = inherit::run(tree)?;

    debug_assert_eq!(count_markers(&resolved), 0);
    debug!(path = %path.display(), markers, "check passed");
    Ok(markers)
}

/// Expand glob patterns; a pattern matching nothing is used as a literal path
fn expand_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for pattern in patterns {
        let mut matched = false;
        for entry in glob::glob(pattern).with_context(|| format!("Invalid pattern '{}'", pattern))? {
            paths.push(entry?);
            matched = true;
        }
        if !matched {
            paths.push(PathBuf::from(pattern));
        }
    }

    paths.sort();
    paths.dedup();
    Ok(paths)
}
