pub mod error;
pub mod expressions;
pub mod statements;

use std::rc::Rc;

use crate::ast::Program;
use crate::lexer::{Token, Tokenizer};
pub use error::ParseError;
use statements::parse_statement;

pub struct Parser<'a> {
    pub iter: std::iter::Peekable<Tokenizer<'a>>,
}

impl<'a> Parser<'a> {
    pub fn new(tokenizer: Tokenizer<'a>) -> Self {
        let iter = tokenizer.peekable();
        Self { iter }
    }

    pub(crate) fn parse_ident(&mut self) -> Result<Rc<str>, ParseError> {
        match self.iter.next() {
            Some(Token::Ident(name)) => Ok(name.into()),
            other => Err(ParseError::expected_identifier(other)),
        }
    }

    pub(crate) fn expect_token(&mut self, expected: Token) -> Result<(), ParseError> {
        match self.iter.next() {
            Some(token) if token == expected => Ok(()),
            other => Err(ParseError::unexpected_token(expected, other)),
        }
    }

    /// Parses the whole token stream into a program. Statements follow each
    /// other directly; a semicolon after a statement is consumed when
    /// present but never required. All errors of the pass are collected and
    /// returned together.
    pub fn parse_program(&mut self) -> Result<Program, Vec<ParseError>> {
        let mut statements = Vec::new();
        let mut errors = Vec::new();

        while self.iter.peek().is_some() {
            match parse_statement(self) {
                Ok(statement) => {
                    statements.push(statement);
                    self.iter.next_if(|token| *token == Token::SemiColon);
                }
                Err(err) => {
                    errors.push(err);
                    // Resynchronize at the next statement boundary so a
                    // single pass surfaces every error.
                    for token in self.iter.by_ref() {
                        if token == Token::SemiColon {
                            break;
                        }
                    }
                }
            }
        }
        if errors.is_empty() {
            Ok(Program { statements })
        } else {
            Err(errors)
        }
    }
}
