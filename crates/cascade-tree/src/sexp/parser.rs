use crate::error::{ParseError, Result};
use crate::sexp::lexer::{Lexer, Token, TokenType};
use crate::sexp::types::*;

pub struct Parser {
    tokens: Vec<Token>,
    current: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, current: 0 }
    }

    /// Parse exactly one S-expression from `input`.
    pub fn parse_str(input: &str) -> Result<SExp> {
        let tokens = Lexer::new(input).tokenize()?;
        let mut parser = Parser::new(tokens);
        let sexp = parser.parse()?;
        parser.expect_end()?;
        Ok(sexp)
    }

    pub fn parse(&mut self) -> Result<SExp> {
        if self.is_at_end() {
            return Err(ParseError::EmptyInput);
        }

        self.parse_sexp()
    }

    /// Fail if anything but end of input follows the last parsed expression.
    pub fn expect_end(&self) -> Result<()> {
        match self.current_token() {
            Ok(token) if token.typ != TokenType::Eof => Err(ParseError::UnexpectedToken {
                token: token.lexeme.clone(),
                pos: token.pos,
            }),
            _ => Ok(()),
        }
    }

    fn parse_sexp(&mut self) -> Result<SExp> {
        let token = self.current_token()?.clone();

        let atom = match token.typ {
            TokenType::LParen => return self.parse_list(),
            TokenType::RParen => return Err(ParseError::UnexpectedCloseParen { pos: token.pos }),
            TokenType::Eof => return Err(ParseError::EmptyInput),
            TokenType::Symbol => SExp::Symbol(Symbol::new(token.lexeme, token.pos)),
            TokenType::Keyword => SExp::Keyword(Keyword::new(token.lexeme, token.pos)),
            TokenType::String => SExp::String(StringLit::new(token.lexeme, token.pos)),
            TokenType::Number => SExp::Number(Number::new(token.lexeme, token.pos)),
            TokenType::Nil => SExp::Nil(Nil::new(token.pos)),
        };

        self.advance();
        Ok(atom)
    }

    fn parse_list(&mut self) -> Result<SExp> {
        let pos = self.current_token()?.pos;
        self.advance(); // Skip '('

        let mut elements = Vec::new();

        loop {
            if self.is_at_end() {
                return Err(ParseError::UnterminatedList { pos });
            }

            if self.check(&TokenType::RParen) {
                self.advance(); // Skip ')'
                break;
            }

            elements.push(self.parse_sexp()?);
        }

        Ok(SExp::List(List::new(elements, pos)))
    }

    fn current_token(&self) -> Result<&Token> {
        self.tokens.get(self.current).ok_or(ParseError::EmptyInput)
    }

    fn check(&self, typ: &TokenType) -> bool {
        matches!(self.current_token(), Ok(token) if &token.typ == typ)
    }

    fn advance(&mut self) {
        if !self.is_at_end() {
            self.current += 1;
        }
    }

    fn is_at_end(&self) -> bool {
        matches!(self.current_token(), Ok(token) if token.typ == TokenType::Eof)
            || self.current >= self.tokens.len()
    }
}
