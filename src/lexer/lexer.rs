use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::MK_TOKEN;

use super::tokens::{lookup_ident, Token, TokenKind};

lazy_static! {
    static ref IDENTIFIER_PATTERN: Regex = Regex::new("^[a-zA-Z_]+").unwrap();
    static ref INTEGER_PATTERN: Regex = Regex::new("^[0-9]+").unwrap();
}

/// Pull-based scanner over a source string.
///
/// `position` is the byte offset of `ch`, `read_position` the offset of the
/// character after it. `ch` is `None` once the input is exhausted.
#[derive(Clone, Debug)]
pub struct Lexer {
    source: String,
    position: usize,
    read_position: usize,
    ch: Option<char>,
}

impl Lexer {
    pub fn new(source: String) -> Lexer {
        let mut lexer = Lexer {
            source,
            position: 0,
            read_position: 0,
            ch: None,
        };
        lexer.read_char();
        lexer
    }

    /// Returns the next token, or `EOF` forever once the input is consumed.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let token = match self.ch {
            Some('=') => self.read_double('=', TokenKind::Equals, TokenKind::Assignment),
            Some('!') => self.read_double('=', TokenKind::NotEquals, TokenKind::Not),
            Some('+') => MK_TOKEN!(TokenKind::Plus, "+"),
            Some('-') => MK_TOKEN!(TokenKind::Dash, "-"),
            Some('*') => MK_TOKEN!(TokenKind::Star, "*"),
            Some('/') => MK_TOKEN!(TokenKind::Slash, "/"),
            Some('<') => MK_TOKEN!(TokenKind::Less, "<"),
            Some('>') => MK_TOKEN!(TokenKind::Greater, ">"),
            Some(';') => MK_TOKEN!(TokenKind::Semicolon, ";"),
            Some(',') => MK_TOKEN!(TokenKind::Comma, ","),
            Some('(') => MK_TOKEN!(TokenKind::OpenParen, "("),
            Some(')') => MK_TOKEN!(TokenKind::CloseParen, ")"),
            Some('{') => MK_TOKEN!(TokenKind::OpenCurly, "{"),
            Some('}') => MK_TOKEN!(TokenKind::CloseCurly, "}"),
            // Runs already leave the cursor on the first character past the token.
            Some(ch) if is_letter(ch) => {
                let literal = self.read_run(&IDENTIFIER_PATTERN);
                return MK_TOKEN!(lookup_ident(&literal), literal);
            }
            Some(ch) if ch.is_ascii_digit() => {
                let literal = self.read_run(&INTEGER_PATTERN);
                return MK_TOKEN!(TokenKind::Int, literal);
            }
            Some(ch) => MK_TOKEN!(TokenKind::Illegal, ch),
            None => MK_TOKEN!(TokenKind::EOF, ""),
        };

        self.read_char();
        token
    }

    pub fn at_eof(&self) -> bool {
        self.ch.is_none()
    }

    fn read_char(&mut self) {
        self.position = self.read_position;
        self.ch = self.remainder_from(self.read_position).chars().next();

        if let Some(ch) = self.ch {
            self.read_position += ch.len_utf8();
        }
    }

    fn peek_char(&self) -> Option<char> {
        self.remainder_from(self.read_position).chars().next()
    }

    fn remainder_from(&self, offset: usize) -> &str {
        self.source.get(offset..).unwrap_or("")
    }

    /// Moves the cursor `n` bytes forward from the current character.
    fn advance_n(&mut self, n: usize) {
        self.read_position = self.position + n;
        self.read_char();
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, Some(' ' | '\t' | '\n' | '\r')) {
            self.read_char();
        }
    }

    /// Consumes `second` after the current character when it follows, producing `double`;
    /// otherwise produces `single` for the current character alone.
    fn read_double(&mut self, second: char, double: TokenKind, single: TokenKind) -> Token {
        let first = self.ch.unwrap_or_default();

        if self.peek_char() == Some(second) {
            self.read_char();
            MK_TOKEN!(double, format!("{}{}", first, second))
        } else {
            MK_TOKEN!(single, first)
        }
    }

    fn read_run(&mut self, pattern: &Regex) -> String {
        let start = self.position;
        let length = pattern
            .find(self.remainder_from(start))
            .map(|matched| matched.end())
            .unwrap_or(0);

        self.advance_n(length);
        self.source[start..self.position].to_string()
    }
}

fn is_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

/// Scans the whole source, returning every token up to and including the first `EOF`.
pub fn tokenize(source: String) -> Vec<Token> {
    let mut lex = Lexer::new(source);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let done = token.is(TokenKind::EOF);
        tokens.push(token);

        if done {
            break;
        }
    }

    debug!("Tokenized {} tokens", tokens.len());
    tokens
}
