use cascade_tree::error::{LexError, ParseError, Position, SyntaxError};
use cascade_tree::SourceLocation;

#[test]
fn test_position_display() {
    let pos = Position::new(0, 5, 10);
    assert_eq!(format!("{}", pos), "line 5, column 10");
}

#[test]
fn test_source_location_display() {
    assert_eq!(SourceLocation::new("base.scss", 12).to_string(), "base.scss:12");
    assert_eq!(SourceLocation::anonymous(3).to_string(), "-:3");
}

#[test]
fn test_lex_error_mentions_position() {
    let error = LexError::UnexpectedChar { ch: '{', pos: Position::new(6, 1, 7) };
    let output = format!("{}", error);
    assert!(output.contains('{'));
    assert!(output.contains("line 1, column 7"));
}

#[test]
fn test_unknown_field_message() {
    let error = ParseError::UnknownField {
        field: "colour".to_string(),
        node: "rule".to_string(),
        pos: Position::new(0, 2, 4),
    };
    assert_eq!(error.to_string(), "Unknown field ':colour' on rule at line 2, column 4");
}

#[test]
fn test_parse_error_from_lex_error() {
    let lex_error = LexError::UnterminatedString { pos: Position::new(0, 1, 1) };
    let parse_error: ParseError = lex_error.into();
    let output = format!("{}", parse_error);
    assert!(output.starts_with("Lexer error"));
    assert!(output.contains("Unterminated string"));
}

#[test]
fn test_syntax_error_is_a_std_error() {
    let error: Box<dyn std::error::Error + Send + Sync> =
        Box::new(SyntaxError::new("rule selector has not been resolved"));
    assert_eq!(error.to_string(), "rule selector has not been resolved");
}

#[test]
fn test_syntax_error_keeps_every_frame() {
    let error = SyntaxError::new("boom")
        .modify_backtrace(SourceLocation::new("a.scss", 1))
        .modify_backtrace(SourceLocation::new("a.scss", 1))
        .modify_backtrace(SourceLocation::new("main.scss", 9));

    assert_eq!(error.backtrace().len(), 3);
    assert_eq!(error.backtrace_str().lines().count(), 3);
}
