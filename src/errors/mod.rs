//! Error types for the front-end.
//!
//! Syntax problems never abort a parse. They are collected as [`errors::Error`]
//! values, each carrying the kind of problem and the offending token.

pub mod errors;

#[cfg(test)]
mod tests;
