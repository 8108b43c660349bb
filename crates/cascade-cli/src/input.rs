//! Reading trees from disk or stdin

use std::io::Read;
use std::path::{Path, PathBuf};

use cascade_tree::{parse_tree_named, Node, ParseError, SourceLocation};
use tracing::debug;

use crate::constants::STDIN_PATH;

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid tree notation in {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
}

/// Load the tree in `path`, or from stdin when `path` is `-`.
///
/// Nodes that do not name their own file are attributed to `path`.
pub fn load_tree(path: &Path) -> Result<Node, InputError> {
    let (source, filename) = if path == Path::new(STDIN_PATH) {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|source| InputError::Read { path: path.to_path_buf(), source })?;
        (buffer, SourceLocation::ANONYMOUS.to_string())
    } else {
        let buffer = std::fs::read_to_string(path)
            .map_err(|source| InputError::Read { path: path.to_path_buf(), source })?;
        (buffer, path.display().to_string())
    };

    debug!(path = %path.display(), bytes = source.len(), "loaded tree source");

    parse_tree_named(&source, &filename)
        .map_err(|source| InputError::Parse { path: path.to_path_buf(), source })
}
