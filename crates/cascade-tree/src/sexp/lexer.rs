use crate::error::{LexError, Position};

#[derive(Debug, Clone, PartialEq)]
pub enum TokenType {
    LParen,
    RParen,
    Symbol,
    Keyword,
    String,
    Number,
    Nil,
    Eof,
}

#[derive(Debug, Clone)]
pub struct Token {
    pub typ: TokenType,
    pub lexeme: String,
    pub pos: Position,
}

impl Token {
    fn new(typ: TokenType, lexeme: impl Into<String>, pos: Position) -> Self {
        Self { typ, lexeme: lexeme.into(), pos }
    }
}

/// Tokenizer for tree notation.
///
/// Symbols may start with `@` so at-rule tags (`@media`, `@font-face`) read
/// naturally; everything quoted is a string and keeps its exact bytes.
pub struct Lexer {
    input: Vec<char>,
    current: usize,
    offset: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Self { input: input.chars().collect(), current: 0, offset: 0, line: 1, column: 1 }
    }

    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        loop {
            self.skip_trivia();

            match self.current_char() {
                None => {
                    tokens.push(Token::new(TokenType::Eof, "", self.position()));
                    return Ok(tokens);
                }
                Some(ch) => tokens.push(self.next_token(ch)?),
            }
        }
    }

    fn next_token(&mut self, ch: char) -> Result<Token, LexError> {
        let pos = self.position();

        match ch {
            '(' | ')' => {
                self.advance();
                let typ = if ch == '(' { TokenType::LParen } else { TokenType::RParen };
                Ok(Token::new(typ, ch.to_string(), pos))
            }
            ':' => {
                self.advance();
                let name = self.take_while(is_symbol_char);
                Ok(Token::new(TokenType::Keyword, name, pos))
            }
            '"' => self.read_string(pos),
            _ if starts_number(ch, self.peek()) => {
                let sign = if ch == '-' {
                    self.advance();
                    "-"
                } else {
                    ""
                };
                let digits = self.take_while(|c| c.is_ascii_digit());
                Ok(Token::new(TokenType::Number, format!("{sign}{digits}"), pos))
            }
            _ if is_symbol_start(ch) => {
                let lexeme = self.take_while(is_symbol_char);
                let typ = if lexeme == "nil" { TokenType::Nil } else { TokenType::Symbol };
                Ok(Token::new(typ, lexeme, pos))
            }
            _ => Err(LexError::UnexpectedChar { ch, pos }),
        }
    }

    fn read_string(&mut self, pos: Position) -> Result<Token, LexError> {
        self.advance(); // Skip opening '"'
        let mut value = String::new();

        loop {
            let ch = self.current_char().ok_or(LexError::UnterminatedString { pos })?;
            self.advance();

            match ch {
                '"' => return Ok(Token::new(TokenType::String, value, pos)),
                '\\' => {
                    let escape_pos = self.position();
                    let escaped = self.current_char().ok_or(LexError::UnterminatedString { pos })?;
                    value.push(match escaped {
                        'n' => '\n',
                        't' => '\t',
                        'r' => '\r',
                        '\\' | '"' => escaped,
                        other => return Err(LexError::InvalidEscape { ch: other, pos: escape_pos }),
                    });
                    self.advance();
                }
                _ => value.push(ch),
            }
        }
    }

    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> String {
        let start = self.current;
        while self.current_char().is_some_and(&pred) {
            self.advance();
        }
        self.input[start..self.current].iter().collect()
    }

    /// Whitespace and `;` line comments
    fn skip_trivia(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch == ';' {
                while self.current_char().is_some_and(|c| c != '\n') {
                    self.advance();
                }
            } else if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.current).copied()
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.current + 1).copied()
    }

    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            self.current += 1;
            self.offset += ch.len_utf8();

            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    fn position(&self) -> Position {
        Position::new(self.offset, self.line, self.column)
    }
}

fn starts_number(ch: char, next: Option<char>) -> bool {
    ch.is_ascii_digit() || (ch == '-' && next.is_some_and(|c| c.is_ascii_digit()))
}

fn is_symbol_start(ch: char) -> bool {
    ch.is_alphabetic() || matches!(ch, '_' | '-' | '@' | '*' | '&' | '!' | '?' | '<' | '>' | '=')
}

fn is_symbol_char(ch: char) -> bool {
    is_symbol_start(ch) || ch.is_ascii_digit() || matches!(ch, '.' | '/' | '+' | '\'')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn types(input: &str) -> Vec<TokenType> {
        Lexer::new(input).tokenize().unwrap().into_iter().map(|t| t.typ).collect()
    }

    #[test]
    fn test_at_rule_symbol() {
        let tokens = Lexer::new("@media").tokenize().unwrap();
        assert_eq!(tokens[0].typ, TokenType::Symbol);
        assert_eq!(tokens[0].lexeme, "@media");
    }

    #[test]
    fn test_comment_to_end_of_line() {
        assert_eq!(
            types("(rule ; trailing\n nil)"),
            vec![
                TokenType::LParen,
                TokenType::Symbol,
                TokenType::Nil,
                TokenType::RParen,
                TokenType::Eof
            ]
        );
    }

    #[test]
    fn test_escape_position_points_at_escaped_char() {
        let err = Lexer::new(r#""a\q""#).tokenize().unwrap_err();
        match err {
            LexError::InvalidEscape { ch, pos } => {
                assert_eq!(ch, 'q');
                assert_eq!(pos.column, 4);
            }
            other => panic!("Expected InvalidEscape, got {:?}", other),
        }
    }
}
