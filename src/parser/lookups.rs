use crate::{
    ast::ast::{ExprWrapper, StmtWrapper},
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser, stmt::*};

#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Lowest,
    Equals,      // == !=
    LessGreater, // < >
    Sum,         // + -
    Product,     // * /
    Prefix,      // -x !x
    Call,        // f(x)
}

pub type StmtHandler = fn(&mut Parser) -> Option<StmtWrapper>;
pub type NUDHandler = fn(&mut Parser) -> Option<ExprWrapper>;
pub type LEDHandler = fn(&mut Parser, ExprWrapper, BindingPower) -> Option<ExprWrapper>;

pub fn stmt_lookup(kind: TokenKind) -> StmtHandler {
    match kind {
        TokenKind::Let => parse_let_stmt,
        TokenKind::Return => parse_return_stmt,
        _ => parse_expression_stmt,
    }
}

pub fn nud_lookup(kind: TokenKind) -> Option<NUDHandler> {
    let handler: NUDHandler = match kind {
        // Literals and symbols
        TokenKind::Identifier => parse_identifier_expr,
        TokenKind::Int => parse_integer_expr,
        TokenKind::True | TokenKind::False => parse_boolean_expr,

        TokenKind::Not | TokenKind::Dash => parse_prefix_expr,
        TokenKind::OpenParen => parse_grouping_expr,
        TokenKind::If => parse_if_expr,
        TokenKind::Fn => parse_function_expr,
        _ => return None,
    };

    Some(handler)
}

pub fn led_lookup(kind: TokenKind) -> Option<LEDHandler> {
    let handler: LEDHandler = match kind {
        TokenKind::Equals
        | TokenKind::NotEquals
        | TokenKind::Less
        | TokenKind::Greater
        | TokenKind::Plus
        | TokenKind::Dash
        | TokenKind::Star
        | TokenKind::Slash => parse_infix_expr,

        TokenKind::OpenParen => parse_call_expr,
        _ => return None,
    };

    Some(handler)
}

pub fn binding_power_lookup(kind: TokenKind) -> BindingPower {
    match kind {
        TokenKind::Equals | TokenKind::NotEquals => BindingPower::Equals,
        TokenKind::Less | TokenKind::Greater => BindingPower::LessGreater,
        TokenKind::Plus | TokenKind::Dash => BindingPower::Sum,
        TokenKind::Star | TokenKind::Slash => BindingPower::Product,
        TokenKind::OpenParen => BindingPower::Call,
        _ => BindingPower::Lowest,
    }
}
