use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a node was declared: the stylesheet file and 1-based line
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceLocation {
    pub filename: String,
    pub line: usize,
}

impl SourceLocation {
    /// Filename used for trees read from standard input or built in memory
    pub const ANONYMOUS: &'static str = "-";

    pub fn new(filename: impl Into<String>, line: usize) -> Self {
        Self { filename: filename.into(), line }
    }

    pub fn anonymous(line: usize) -> Self {
        Self::new(Self::ANONYMOUS, line)
    }

    /// Same file, different line
    pub fn with_line(&self, line: usize) -> Self {
        Self { filename: self.filename.clone(), line }
    }
}

impl Default for SourceLocation {
    fn default() -> Self {
        Self::anonymous(1)
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.filename, self.line)
    }
}
