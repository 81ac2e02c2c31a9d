//! Lexical analysis module.
//!
//! This module contains the scanner that turns source text into tokens
//! one at a time, on demand. It handles:
//!
//! - Recognition of keywords, identifiers and integer literals
//! - One- and two-character operators and delimiters
//! - Whitespace skipping and `ILLEGAL` classification of unknown characters

pub mod lexer;
pub mod tokens;
