//! Front-end for a small expression language: a pull-based lexer and a
//! Pratt parser producing an owned AST.
//!
//! ```
//! let (parser, program) = dragon::parser::parser::parse("let x = 1 + 2;".to_string());
//! assert!(parser.errors().is_empty());
//! assert_eq!(program.to_string(), "let x = (1 + 2);");
//! ```

#![allow(clippy::module_inception)]

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;
