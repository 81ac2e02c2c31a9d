//! Unit tests for error handling.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::lexer::tokens::TokenKind;
use crate::MK_TOKEN;

#[test]
fn test_unexpected_token_message() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::Identifier,
            received: TokenKind::Assignment,
        },
        MK_TOKEN!(TokenKind::Assignment, "="),
    );

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(
        error.to_string(),
        "expected next token to be IDENT, got = instead"
    );
    assert_eq!(error.get_token().literal, "=");
}

#[test]
fn test_no_prefix_message() {
    let error = Error::new(
        ErrorImpl::NoPrefixParseFn {
            kind: TokenKind::Semicolon,
        },
        MK_TOKEN!(TokenKind::Semicolon, ";"),
    );

    assert_eq!(error.get_error_name(), "NoPrefixParseFn");
    assert_eq!(error.to_string(), "no prefix parse function for ; found");
    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_number_parse_error() {
    let literal = "99999999999999999999";
    let error = Error::new(
        ErrorImpl::NumberParseError {
            token: literal.to_string(),
        },
        MK_TOKEN!(TokenKind::Int, literal),
    );

    assert_eq!(error.get_error_name(), "NumberParseError");
    assert!(matches!(error.get_kind(), ErrorImpl::NumberParseError { .. }));
    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains(literal)),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_illegal_character_tip() {
    let error = Error::new(
        ErrorImpl::NoPrefixParseFn {
            kind: TokenKind::Illegal,
        },
        MK_TOKEN!(TokenKind::Illegal, "@"),
    );

    assert_eq!(error.get_tip().to_string(), "Unrecognised character `@`");
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
