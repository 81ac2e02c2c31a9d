//! Integration tests for the public front-end API.
//!
//! These tests drive the lexer and parser the way an evaluator or a
//! diagnostic tool would: from source text to a rendered program and
//! its diagnostics.

use dragon::{
    ast::{
        ast::{Expr, ExprType, Stmt, StmtType},
        expressions::{CallExpr, FunctionLiteral, IfExpr},
        statements::{ExpressionStmt, LetStmt, ReturnStmt},
    },
    errors::errors::ErrorTip,
    lexer::{
        lexer::{tokenize, Lexer},
        tokens::TokenKind,
    },
    parser::parser::{parse, Parser},
};

const PROGRAM: &str = "
    let five = 5;
    let ten = 10;

    let add = fn(x, y) {
        x + y;
    };

    let max = fn(a, b) {
        if (a > b) { return a; } else { return b; }
    };

    let result = add(five, max(ten, -five * 2));
    !(result == 15) != false;
";

#[test]
fn test_parse_complete_program() {
    let (parser, program) = parse(PROGRAM.to_string());

    assert!(parser.errors().is_empty(), "{:?}", parser.error_messages());
    assert_eq!(program.len(), 6);

    let kinds: Vec<StmtType> = program.iter().map(|stmt| stmt.get_stmt_type()).collect();
    assert_eq!(
        kinds,
        [
            StmtType::LetStmt,
            StmtType::LetStmt,
            StmtType::LetStmt,
            StmtType::LetStmt,
            StmtType::LetStmt,
            StmtType::ExpressionStmt,
        ]
    );

    assert_eq!(
        program.to_string(),
        "let five = 5;\
         let ten = 10;\
         let add = fn(x, y) (x + y);\
         let max = fn(a, b) if (a > b) return a; else return b;;\
         let result = add(five, max(ten, ((-five) * 2)));\
         ((!(result == 15)) != false)"
    );
}

#[test]
fn test_nested_nodes_are_reachable() {
    let (_, program) = parse(PROGRAM.to_string());

    let max = program.statements[3].downcast_ref::<LetStmt>().unwrap();
    assert_eq!(max.name.value, "max");

    let function = max
        .value
        .as_ref()
        .and_then(|value| value.downcast_ref::<FunctionLiteral>())
        .unwrap();
    assert_eq!(function.parameters.len(), 2);

    let body = function.body.body[0].downcast_ref::<ExpressionStmt>().unwrap();
    let if_expr = body
        .expression
        .as_ref()
        .and_then(|expr| expr.downcast_ref::<IfExpr>())
        .unwrap();
    assert_eq!(if_expr.condition.to_string(), "(a > b)");

    let returned = if_expr.consequence.body[0].downcast_ref::<ReturnStmt>().unwrap();
    assert_eq!(returned.value.as_ref().unwrap().to_string(), "a");
    assert!(if_expr.alternative.is_some());

    let result = program.statements[4].downcast_ref::<LetStmt>().unwrap();
    let call = result
        .value
        .as_ref()
        .and_then(|value| value.downcast_ref::<CallExpr>())
        .unwrap();
    assert_eq!(call.function.token_literal(), "add");
    assert_eq!(call.arguments[1].get_expr_type(), ExprType::Call);
}

#[test]
fn test_program_survives_errors() {
    let source = "let = 5; let y = (1 + ; let z = 3;";
    let (parser, program) = parse(source.to_string());

    assert!(parser.errors().len() >= 2);
    let last = program.statements.last().unwrap().downcast_ref::<LetStmt>().unwrap();
    assert_eq!(last.to_string(), "let z = 3;");

    for error in parser.errors() {
        assert!(!error.get_error_name().is_empty());
        if let ErrorTip::Suggestion(tip) = error.get_tip() {
            assert!(!tip.is_empty());
        }
    }
}

#[test]
fn test_parser_from_lexer() {
    let mut parser = Parser::new(Lexer::new("fn(x) { x * x }(4)".to_string()));
    let program = parser.parse_program();

    assert!(parser.errors().is_empty());
    assert_eq!(program.token_literal(), "fn");
    assert_eq!(program.to_string(), "fn(x) (x * x)(4)");
}

#[test]
fn test_tokenize_for_tooling() {
    let tokens = tokenize("if (a != b) { return; }".to_string());

    let kinds: Vec<TokenKind> = tokens.iter().map(|token| token.kind).collect();
    assert_eq!(
        kinds,
        [
            TokenKind::If,
            TokenKind::OpenParen,
            TokenKind::Identifier,
            TokenKind::NotEquals,
            TokenKind::Identifier,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::Return,
            TokenKind::Semicolon,
            TokenKind::CloseCurly,
            TokenKind::EOF,
        ]
    );
    assert_eq!(tokens[3].literal, "!=");
}
