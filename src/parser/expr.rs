use crate::{
    ast::{
        ast::ExprWrapper,
        expressions::{
            Boolean, CallExpr, FunctionLiteral, Identifier, IfExpr, InfixExpr, IntegerLiteral,
            PrefixExpr,
        },
    },
    errors::errors::ErrorImpl,
    lexer::tokens::TokenKind,
    MK_EXPR,
};

use super::{
    lookups::{led_lookup, nud_lookup, BindingPower},
    parser::Parser,
    stmt::parse_block_stmt,
};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Option<ExprWrapper> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(nud) = nud_lookup(token_kind) else {
        parser.error_at_current(ErrorImpl::NoPrefixParseFn { kind: token_kind });
        return None;
    };

    let mut left = nud(parser)?;

    // While the lookahead binds tighter than bp, keep folding it into lhs
    while parser.peek_token_kind() != TokenKind::Semicolon && parser.peek_binding_power() > bp {
        let Some(led) = led_lookup(parser.peek_token_kind()) else {
            return Some(left);
        };

        parser.advance();
        let operator_bp = parser.current_binding_power();
        left = led(parser, left, operator_bp)?;
    }

    Some(left)
}

pub fn parse_identifier_expr(parser: &mut Parser) -> Option<ExprWrapper> {
    Some(MK_EXPR!(parse_identifier(parser)))
}

pub fn parse_identifier(parser: &Parser) -> Identifier {
    let token = parser.current_token().clone();

    Identifier {
        value: token.literal.clone(),
        token,
    }
}

pub fn parse_integer_expr(parser: &mut Parser) -> Option<ExprWrapper> {
    let token = parser.current_token().clone();

    match token.literal.parse::<i64>() {
        Ok(value) => Some(MK_EXPR!(IntegerLiteral { token, value })),
        Err(_) => {
            parser.error_at_current(ErrorImpl::NumberParseError {
                token: token.literal,
            });
            None
        }
    }
}

pub fn parse_boolean_expr(parser: &mut Parser) -> Option<ExprWrapper> {
    let token = parser.current_token().clone();

    Some(MK_EXPR!(Boolean {
        value: token.is(TokenKind::True),
        token,
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Option<ExprWrapper> {
    let token = parser.current_token().clone();
    parser.advance();

    let right = parse_expr(parser, BindingPower::Prefix)?;

    Some(MK_EXPR!(PrefixExpr {
        operator: token.literal.clone(),
        token,
        right,
    }))
}

pub fn parse_infix_expr(
    parser: &mut Parser,
    left: ExprWrapper,
    bp: BindingPower,
) -> Option<ExprWrapper> {
    let token = parser.current_token().clone();
    parser.advance();

    let right = parse_expr(parser, bp)?;

    Some(MK_EXPR!(InfixExpr {
        operator: token.literal.clone(),
        token,
        left,
        right,
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Option<ExprWrapper> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Lowest);

    // The closing paren is required even when the inner expression failed
    if !parser.expect_peek(TokenKind::CloseParen) {
        return None;
    }

    expr
}

pub fn parse_if_expr(parser: &mut Parser) -> Option<ExprWrapper> {
    let token = parser.current_token().clone();

    if !parser.expect_peek(TokenKind::OpenParen) {
        return None;
    }
    parser.advance();
    let condition = parse_expr(parser, BindingPower::Lowest);

    if !parser.expect_peek(TokenKind::CloseParen) || !parser.expect_peek(TokenKind::OpenCurly) {
        return None;
    }
    let consequence = parse_block_stmt(parser);

    let mut alternative = None;
    if parser.peek_token_kind() == TokenKind::Else {
        parser.advance();
        if !parser.expect_peek(TokenKind::OpenCurly) {
            return None;
        }
        alternative = Some(parse_block_stmt(parser));
    }

    let condition = condition?;

    Some(MK_EXPR!(IfExpr {
        token,
        condition,
        consequence,
        alternative,
    }))
}

pub fn parse_function_expr(parser: &mut Parser) -> Option<ExprWrapper> {
    let token = parser.current_token().clone();

    if !parser.expect_peek(TokenKind::OpenParen) {
        return None;
    }
    let parameters = parse_function_parameters(parser);

    if !parser.expect_peek(TokenKind::OpenCurly) {
        return None;
    }
    let body = parse_block_stmt(parser);

    Some(MK_EXPR!(FunctionLiteral {
        token,
        parameters,
        body,
    }))
}

/// Parses `a, b, c)` with the current token on the opening `(`.
///
/// A missing identifier or closing `)` is recorded and the partial list returned.
fn parse_function_parameters(parser: &mut Parser) -> Vec<Identifier> {
    let mut parameters = vec![];

    if parser.peek_token_kind() == TokenKind::CloseParen {
        parser.advance();
        return parameters;
    }

    if !parser.expect_peek(TokenKind::Identifier) {
        return parameters;
    }
    parameters.push(parse_identifier(parser));

    while parser.peek_token_kind() == TokenKind::Comma {
        parser.advance();
        if !parser.expect_peek(TokenKind::Identifier) {
            return parameters;
        }
        parameters.push(parse_identifier(parser));
    }

    parser.expect_peek(TokenKind::CloseParen);
    parameters
}

pub fn parse_call_expr(
    parser: &mut Parser,
    left: ExprWrapper,
    _bp: BindingPower,
) -> Option<ExprWrapper> {
    let token = parser.current_token().clone();
    let arguments = parse_call_arguments(parser);

    Some(MK_EXPR!(CallExpr {
        token,
        function: left,
        arguments,
    }))
}

/// Parses `x, y + 1)` with the current token on the opening `(`.
///
/// Arguments that fail to parse are left out; a missing `)` is recorded
/// and the partial list returned.
fn parse_call_arguments(parser: &mut Parser) -> Vec<ExprWrapper> {
    let mut args = vec![];

    if parser.peek_token_kind() == TokenKind::CloseParen {
        parser.advance();
        return args;
    }

    parser.advance();
    args.extend(parse_expr(parser, BindingPower::Lowest));

    while parser.peek_token_kind() == TokenKind::Comma {
        parser.advance();
        parser.advance();
        args.extend(parse_expr(parser, BindingPower::Lowest));
    }

    parser.expect_peek(TokenKind::CloseParen);
    args
}
