//! Unit tests for AST rendering.

use crate::lexer::tokens::TokenKind;
use crate::MK_TOKEN;

use super::{
    ast::{ExprWrapper, Program, Stmt, StmtType, StmtWrapper},
    expressions::{Boolean, CallExpr, FunctionLiteral, Identifier, IfExpr, InfixExpr, IntegerLiteral, PrefixExpr},
    statements::{BlockStmt, ExpressionStmt, LetStmt, ReturnStmt},
};

fn ident(name: &str) -> Identifier {
    Identifier {
        token: MK_TOKEN!(TokenKind::Identifier, name),
        value: name.to_string(),
    }
}

fn int(value: i64) -> ExprWrapper {
    ExprWrapper::new(IntegerLiteral {
        token: MK_TOKEN!(TokenKind::Int, value.to_string()),
        value,
    })
}

fn expression_stmt(expression: ExprWrapper) -> StmtWrapper {
    StmtWrapper::new(ExpressionStmt {
        token: MK_TOKEN!(TokenKind::Identifier, expression.to_string()),
        expression: Some(expression),
    })
}

fn block(body: Vec<StmtWrapper>) -> BlockStmt {
    BlockStmt {
        token: MK_TOKEN!(TokenKind::OpenCurly, "{"),
        body,
    }
}

#[test]
fn test_let_statement_string() {
    let program = Program {
        statements: vec![StmtWrapper::new(LetStmt {
            token: MK_TOKEN!(TokenKind::Let, "let"),
            name: ident("myVar"),
            value: Some(ExprWrapper::new(ident("anotherVar"))),
        })],
    };

    assert_eq!(program.to_string(), "let myVar = anotherVar;");
    assert_eq!(program.token_literal(), "let");
}

#[test]
fn test_incomplete_statements_string() {
    let let_stmt = LetStmt {
        token: MK_TOKEN!(TokenKind::Let, "let"),
        name: ident("x"),
        value: None,
    };
    let return_stmt = ReturnStmt {
        token: MK_TOKEN!(TokenKind::Return, "return"),
        value: None,
    };
    let empty_stmt = ExpressionStmt {
        token: MK_TOKEN!(TokenKind::Semicolon, ";"),
        expression: None,
    };

    assert_eq!(let_stmt.to_string(), "let x;");
    assert_eq!(return_stmt.to_string(), "return;");
    assert_eq!(empty_stmt.to_string(), "");
}

#[test]
fn test_nested_expression_string() {
    // -a * (b == true)
    let prefix = ExprWrapper::new(PrefixExpr {
        token: MK_TOKEN!(TokenKind::Dash, "-"),
        operator: "-".to_string(),
        right: ExprWrapper::new(ident("a")),
    });
    let comparison = ExprWrapper::new(InfixExpr {
        token: MK_TOKEN!(TokenKind::Equals, "=="),
        left: ExprWrapper::new(ident("b")),
        operator: "==".to_string(),
        right: ExprWrapper::new(Boolean {
            token: MK_TOKEN!(TokenKind::True, "true"),
            value: true,
        }),
    });
    let product = InfixExpr {
        token: MK_TOKEN!(TokenKind::Star, "*"),
        left: prefix,
        operator: "*".to_string(),
        right: comparison,
    };

    assert_eq!(product.to_string(), "((-a) * (b == true))");
}

#[test]
fn test_if_function_and_call_string() {
    let if_expr = IfExpr {
        token: MK_TOKEN!(TokenKind::If, "if"),
        condition: ExprWrapper::new(ident("x")),
        consequence: block(vec![expression_stmt(int(1))]),
        alternative: Some(block(vec![expression_stmt(int(2))])),
    };
    assert_eq!(if_expr.to_string(), "if x 1 else 2");

    let function = FunctionLiteral {
        token: MK_TOKEN!(TokenKind::Fn, "fn"),
        parameters: vec![ident("x"), ident("y")],
        body: block(vec![expression_stmt(ExprWrapper::new(ident("x")))]),
    };
    assert_eq!(function.to_string(), "fn(x, y) x");

    let call = CallExpr {
        token: MK_TOKEN!(TokenKind::OpenParen, "("),
        function: ExprWrapper::new(ident("add")),
        arguments: vec![int(1), int(2)],
    };
    assert_eq!(call.to_string(), "add(1, 2)");
}

#[test]
fn test_wrappers_clone_and_downcast() {
    let stmt = StmtWrapper::new(ReturnStmt {
        token: MK_TOKEN!(TokenKind::Return, "return"),
        value: Some(int(5)),
    });
    let cloned = stmt.clone();

    assert_eq!(cloned.get_stmt_type(), StmtType::ReturnStmt);
    assert_eq!(cloned.token_literal(), "return");
    assert_eq!(cloned.to_string(), "return 5;");

    let value = cloned
        .downcast_ref::<ReturnStmt>()
        .and_then(|stmt| stmt.value.as_ref())
        .and_then(|value| value.downcast_ref::<IntegerLiteral>())
        .map(|literal| literal.value);
    assert_eq!(value, Some(5));
    assert!(cloned.downcast_ref::<LetStmt>().is_none());
}
