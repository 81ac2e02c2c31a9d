use crate::{
    ast::{
        ast::StmtWrapper,
        statements::{BlockStmt, ExpressionStmt, LetStmt, ReturnStmt},
    },
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::{expr::parse_identifier, lookups::stmt_lookup, parser::Parser};

/// Parses the statement starting at the current token.
///
/// Returns `None` when the production failed before a node could be built;
/// the error is already recorded on the parser.
pub fn parse_stmt(parser: &mut Parser) -> Option<StmtWrapper> {
    stmt_lookup(parser.current_token_kind())(parser)
}

pub fn parse_let_stmt(parser: &mut Parser) -> Option<StmtWrapper> {
    let token = parser.current_token().clone();

    if !parser.expect_peek(TokenKind::Identifier) {
        return None;
    }
    let name = parse_identifier(parser);

    if !parser.expect_peek(TokenKind::Assignment) {
        return Some(StmtWrapper::new(LetStmt {
            token,
            name,
            value: None,
        }));
    }
    parser.advance();

    let value = parse_expr(parser, BindingPower::Lowest);
    parser.skip_semicolon();

    Some(StmtWrapper::new(LetStmt { token, name, value }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Option<StmtWrapper> {
    let token = parser.current_token().clone();

    parser.advance();

    let value = parse_expr(parser, BindingPower::Lowest);
    parser.skip_semicolon();

    Some(StmtWrapper::new(ReturnStmt { token, value }))
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Option<StmtWrapper> {
    let token = parser.current_token().clone();

    let expression = parse_expr(parser, BindingPower::Lowest);
    parser.skip_semicolon();

    Some(StmtWrapper::new(ExpressionStmt { token, expression }))
}

/// Parses `{ ... }` with the current token on the opening `{`.
///
/// Stops at the closing `}` (left as the current token) or at `EOF`.
pub fn parse_block_stmt(parser: &mut Parser) -> BlockStmt {
    let token = parser.current_token().clone();
    parser.advance();

    let mut body = Vec::new();
    while parser.current_token_kind() != TokenKind::CloseCurly
        && parser.current_token_kind() != TokenKind::EOF
    {
        if let Some(stmt) = parse_stmt(parser) {
            body.push(stmt);
        }
        parser.advance();
    }

    BlockStmt { token, body }
}
