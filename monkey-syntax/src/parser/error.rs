use std::fmt::Display;
use std::rc::Rc;

use thiserror::Error;

use crate::lexer::Token;

#[derive(Debug, PartialEq, Error)]
pub enum ParseError {
    #[error("expected next token to be {expected}, got {} instead", name_or_eof(.got))]
    UnexpectedToken {
        expected: Expected,
        got: Option<Token>,
    },

    #[error("no prefix parse function for {} found", name_or_eof(.0))]
    NoPrefixFunction(Option<Token>),

    #[error("could not parse \"{0}\" as integer")]
    InvalidInteger(Rc<str>),
}

#[derive(Debug, PartialEq)]
pub enum Expected {
    Token(Token),
    Identifier,
}

impl Display for Expected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expected::Token(token) => write!(f, "{}", token),
            Expected::Identifier => f.write_str("IDENT"),
        }
    }
}

fn name_or_eof(token: &Option<Token>) -> String {
    token.as_ref().map_or_else(|| "EOF".to_owned(), Token::to_string)
}

impl ParseError {
    pub fn unexpected_token(expected: Token, got: Option<Token>) -> ParseError {
        ParseError::UnexpectedToken {
            expected: Expected::Token(expected),
            got,
        }
    }

    pub fn expected_identifier(got: Option<Token>) -> ParseError {
        ParseError::UnexpectedToken {
            expected: Expected::Identifier,
            got,
        }
    }
}
