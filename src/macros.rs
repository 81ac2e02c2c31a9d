//! Utility macros for the front-end.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_EXPR!` - Wraps an expression node into an `ExprWrapper`
//!
//! These macros reduce boilerplate in the lexer and parser.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$literal` - Anything convertible into the token's `String` literal
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Int, "42");
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $literal:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            literal: $literal.into(),
        }
    };
}

/// Wraps an expression node so it can be returned from a parse handler.
///
/// # Example
///
/// ```ignore
/// Some(MK_EXPR!(Identifier { token, value }))
/// ```
#[macro_export]
macro_rules! MK_EXPR {
    ($node:expr) => {
        $crate::ast::ast::ExprWrapper::new($node)
    };
}
