use std::fmt;

use crate::tree::SourceLocation;

/// Position in tree notation source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub offset: usize, // Byte offset
    pub line: usize,   // Line number (1-based)
    pub column: usize, // Column number (1-based)
}

impl Position {
    /// Placeholder for S-expressions synthesized from a tree rather than read from text
    pub const DUMMY: Position = Position { offset: 0, line: 0, column: 0 };

    pub fn new(offset: usize, line: usize, column: usize) -> Self {
        Self { offset, line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Lexer errors
#[derive(Debug, thiserror::Error)]
pub enum LexError {
    #[error("Unexpected character '{ch}' at {pos}")]
    UnexpectedChar { ch: char, pos: Position },

    #[error("Unterminated string at {pos}")]
    UnterminatedString { pos: Position },

    #[error("Invalid escape sequence '\\{ch}' at {pos}")]
    InvalidEscape { ch: char, pos: Position },

    #[error("Unexpected end of input")]
    UnexpectedEof,
}

/// Tree notation errors
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Unexpected token {token:?} at {pos}")]
    UnexpectedToken { token: String, pos: Position },

    #[error("Expected {expected}, found {found} at {pos}")]
    Expected { expected: String, found: String, pos: Position },

    #[error("Unknown field ':{field}' on {node} at {pos}")]
    UnknownField { field: String, node: String, pos: Position },

    #[error("Unterminated list at {pos}")]
    UnterminatedList { pos: Position },

    #[error("Unexpected closing parenthesis at {pos}")]
    UnexpectedCloseParen { pos: Position },

    #[error("Empty input")]
    EmptyInput,

    #[error("Lexer error: {0}")]
    LexError(#[from] LexError),
}

pub type Result<T> = std::result::Result<T, ParseError>;

/// An error raised while transforming a stylesheet tree.
///
/// Every traversal level the error unwinds through records the location of
/// the node it was visiting, so `backtrace` reads innermost frame first.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct SyntaxError {
    message: String,
    backtrace: Vec<SourceLocation>,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into(), backtrace: Vec::new() }
    }

    /// Record one more frame and hand the error back for propagation.
    pub fn modify_backtrace(mut self, location: SourceLocation) -> Self {
        self.backtrace.push(location);
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn backtrace(&self) -> &[SourceLocation] {
        &self.backtrace
    }

    /// Location of the node closest to where the error was raised
    pub fn location(&self) -> Option<&SourceLocation> {
        self.backtrace.first()
    }

    /// Render the backtrace as `from file:line` lines, innermost first.
    pub fn backtrace_str(&self) -> String {
        self.backtrace
            .iter()
            .map(|frame| format!("  from {}", frame))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

pub type SyntaxResult<T> = std::result::Result<T, SyntaxError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_error_has_no_frames() {
        let error = SyntaxError::new("boom");
        assert_eq!(error.message(), "boom");
        assert!(error.backtrace().is_empty());
        assert!(error.location().is_none());
        assert_eq!(error.backtrace_str(), "");
    }

    #[test]
    fn test_modify_backtrace_appends_in_unwind_order() {
        let error = SyntaxError::new("boom")
            .modify_backtrace(SourceLocation::new("base.scss", 4))
            .modify_backtrace(SourceLocation::new("main.scss", 1));

        assert_eq!(error.backtrace().len(), 2);
        assert_eq!(error.location(), Some(&SourceLocation::new("base.scss", 4)));
        assert_eq!(error.backtrace_str(), "  from base.scss:4\n  from main.scss:1");
    }

    #[test]
    fn test_display_is_message_only() {
        let error = SyntaxError::new("selector missing").modify_backtrace(SourceLocation::new("a", 1));
        assert_eq!(error.to_string(), "selector missing");
    }
}
