use std::fmt::Display;

use thiserror::Error;

use crate::lexer::tokens::{Token, TokenKind};

/// A syntax diagnostic together with the token the parser was looking at.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
    token: Token,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, token: Token) -> Self {
        Error {
            internal_error: error_impl,
            token,
        }
    }

    pub fn get_token(&self) -> &Token {
        &self.token
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::NoPrefixParseFn { .. } => "NoPrefixParseFn",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::AlreadyParsed => "AlreadyParsed",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { expected, .. } => match expected {
                TokenKind::CloseParen | TokenKind::CloseCurly => ErrorTip::Suggestion(format!(
                    "Unexpected token: `{}`, is a `{}` missing?",
                    self.token.literal, expected
                )),
                _ => ErrorTip::Suggestion(format!(
                    "Unexpected token: `{}`, expected {}",
                    self.token.literal, expected
                )),
            },
            ErrorImpl::NoPrefixParseFn { kind: TokenKind::Illegal } => ErrorTip::Suggestion(
                format!("Unrecognised character `{}`", self.token.literal),
            ),
            ErrorImpl::NoPrefixParseFn { .. } => ErrorTip::None,
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::AlreadyParsed => ErrorTip::Suggestion(String::from(
                "Create a new parser for every source text",
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("expected next token to be {expected}, got {received} instead")]
    UnexpectedToken { expected: TokenKind, received: TokenKind },
    #[error("no prefix parse function for {kind} found")]
    NoPrefixParseFn { kind: TokenKind },
    #[error("could not parse {token:?} as integer")]
    NumberParseError { token: String },
    #[error("program has already been parsed by this parser")]
    AlreadyParsed,
}
