// Test fixtures for cascade CLI tests

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A tree that needs one merge to resolve
pub const MERGING_TREE: &str = r#"(stylesheet
  (rule ".a" (prop "color: red"))
  (inherit "base.scss"
    (rule ".a" (prop "margin: 0"))
    (rule ".b" (prop "padding: 0"))))
"#;

/// A tree whose inherited rule never had its selector resolved
pub const UNRESOLVED_TREE: &str = r#"(stylesheet
  (rule ".a" (prop "color: red"))
  (inherit "base.scss"
    (rule nil (prop "margin: 0"))))
"#;

/// Scratch directory holding tree files, used as the working directory
pub struct Workspace {
    temp: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self { temp: TempDir::new().unwrap() }
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    /// Write `contents` to `name` inside the workspace
    pub fn file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        path
    }
}
