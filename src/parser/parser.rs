//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the program entry points.
//! The parser pulls tokens from a [`Lexer`] and keeps a two-token window
//! (`current` and `peek`). Expressions are parsed with a Pratt parser using
//! the NUD/LED handlers and binding powers from [`super::lookups`].
//!
//! Syntax errors never abort the parse: they are recorded and the parser
//! carries on with the next statement.

use log::{debug, trace};

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
};

use super::{
    lookups::{binding_power_lookup, BindingPower},
    stmt::parse_stmt,
};

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// The scanner tokens are pulled from
    lexer: Lexer,
    /// The token being parsed
    current: Token,
    /// One token of lookahead
    peek: Token,
    /// Diagnostics recorded so far
    errors: Vec<Error>,
    /// Set once `parse_program` has run
    parsed: bool,
}

impl Parser {
    /// Creates a new Parser, filling `current` and `peek` from the lexer.
    pub fn new(mut lexer: Lexer) -> Self {
        let current = lexer.next_token();
        let peek = lexer.next_token();

        Parser {
            lexer,
            current,
            peek,
            errors: vec![],
            parsed: false,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Returns the kind of the lookahead token.
    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek.kind
    }

    /// Shifts `peek` into `current` and pulls a fresh `peek` from the lexer.
    pub fn advance(&mut self) {
        let next = self.lexer.next_token();
        self.current = std::mem::replace(&mut self.peek, next);
    }

    /// Advances when the lookahead is `expected_kind`.
    ///
    /// Otherwise records an unexpected token error and leaves the window untouched.
    pub fn expect_peek(&mut self, expected_kind: TokenKind) -> bool {
        if self.peek.is(expected_kind) {
            self.advance();
            true
        } else {
            self.peek_error(expected_kind);
            false
        }
    }

    /// Consumes an optional `;` following the current token.
    pub fn skip_semicolon(&mut self) {
        if self.peek.is(TokenKind::Semicolon) {
            self.advance();
        }
    }

    pub fn current_binding_power(&self) -> BindingPower {
        binding_power_lookup(self.current.kind)
    }

    pub fn peek_binding_power(&self) -> BindingPower {
        binding_power_lookup(self.peek.kind)
    }

    fn peek_error(&mut self, expected: TokenKind) {
        let error = ErrorImpl::UnexpectedToken {
            expected,
            received: self.peek.kind,
        };
        self.record(error, self.peek.clone());
    }

    /// Records a diagnostic against the current token.
    pub fn error_at_current(&mut self, error: ErrorImpl) {
        self.record(error, self.current.clone());
    }

    fn record(&mut self, error: ErrorImpl, token: Token) {
        let error = Error::new(error, token);
        debug!("Parse error: {}", error);
        self.errors.push(error);
    }

    /// Every diagnostic recorded so far, in the order they were found.
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    /// The recorded diagnostics rendered as messages.
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(|error| error.to_string()).collect()
    }

    /// Parses every statement up to `EOF`.
    ///
    /// A parser runs once: calling this again returns an empty program and
    /// records an [`ErrorImpl::AlreadyParsed`] error.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        if self.parsed {
            self.error_at_current(ErrorImpl::AlreadyParsed);
            return program;
        }
        self.parsed = true;

        debug!("Parsing program");

        while !self.current.is(TokenKind::EOF) {
            trace!("Parsing statement at {:?}", self.current.literal);
            if let Some(stmt) = parse_stmt(self) {
                program.statements.push(stmt);
            }
            self.advance();
        }

        debug!(
            "Parsed {} statements with {} errors",
            program.len(),
            self.errors.len()
        );

        program
    }
}

/// Parses a source text into a [`Program`].
///
/// This is the main entry point for parsing. It builds the lexer and parser,
/// runs the parse and hands back the parser (which holds the diagnostics)
/// together with the program.
pub fn parse(source: String) -> (Parser, Program) {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    (parser, program)
}
