//! Unit tests for the AST module.
//!
//! These build trees by hand and check the canonical rendering.

use std::rc::Rc;

use crate::{
    lexer::tokens::{Token, TokenKind},
    Position, Span,
};

use super::{
    ast::{Expr, ExprType, Node, Program, Stmt, StmtType},
    expressions::{BooleanExpr, IdentifierExpr, InfixExpr, IntegerExpr, PrefixExpr},
    statements::{ExpressionStmt, LetStmt, ReturnStmt},
};

fn span() -> Span {
    let file = Rc::new("test.lang".to_string());
    Span {
        start: Position(0, Rc::clone(&file)),
        end: Position(0, file),
    }
}

fn token(kind: TokenKind, value: &str) -> Token {
    Token {
        kind,
        value: value.to_string(),
        span: span(),
    }
}

fn ident(name: &str) -> IdentifierExpr {
    IdentifierExpr {
        token: token(TokenKind::Ident, name),
        value: name.to_string(),
    }
}

fn int(value: i64) -> Expr {
    Expr::Integer(IntegerExpr {
        token: token(TokenKind::Int, &value.to_string()),
        value,
    })
}

#[test]
fn test_let_statement_string() {
    let program = Program {
        statements: vec![Stmt::Let(LetStmt {
            token: token(TokenKind::Let, "let"),
            name: ident("myVar"),
            value: Some(Expr::Identifier(ident("anotherVar"))),
            span: span(),
        })],
        span: span(),
    };

    assert_eq!(program.to_string(), "let myVar = anotherVar;");
    assert_eq!(program.token_literal(), "let");
}

#[test]
fn test_statement_with_hole_string() {
    let let_stmt = Stmt::Let(LetStmt {
        token: token(TokenKind::Let, "let"),
        name: ident("x"),
        value: None,
        span: span(),
    });
    let return_stmt = Stmt::Return(ReturnStmt {
        token: token(TokenKind::Return, "return"),
        value: None,
        span: span(),
    });
    let expression_stmt = Stmt::Expression(ExpressionStmt {
        token: token(TokenKind::Plus, "+"),
        expression: None,
        span: span(),
    });

    assert_eq!(let_stmt.to_string(), "let x = ;");
    assert_eq!(return_stmt.to_string(), "return ;");
    assert_eq!(expression_stmt.to_string(), "");
}

#[test]
fn test_nested_expression_string() {
    // 5 + (-3 * true)
    let product = Expr::Infix(InfixExpr {
        left: Box::new(Expr::Prefix(PrefixExpr {
            operator: token(TokenKind::Minus, "-"),
            right: Box::new(int(3)),
            span: span(),
        })),
        operator: token(TokenKind::Asterisk, "*"),
        right: Box::new(Expr::Boolean(BooleanExpr {
            token: token(TokenKind::True, "true"),
            value: true,
        })),
        span: span(),
    });
    let sum = Expr::Infix(InfixExpr {
        left: Box::new(int(5)),
        operator: token(TokenKind::Plus, "+"),
        right: Box::new(product),
        span: span(),
    });

    assert_eq!(sum.to_string(), "(5 + ((-3) * true))");
    assert_eq!(sum.token_literal(), "+");
    assert_eq!(sum.get_expr_type(), ExprType::Infix);
}

#[test]
fn test_program_concatenates_statements() {
    let program = Program {
        statements: vec![
            Stmt::Return(ReturnStmt {
                token: token(TokenKind::Return, "return"),
                value: Some(int(10)),
                span: span(),
            }),
            Stmt::Expression(ExpressionStmt {
                token: token(TokenKind::Ident, "x"),
                expression: Some(Expr::Identifier(ident("x"))),
                span: span(),
            }),
        ],
        span: span(),
    };

    assert_eq!(program.to_string(), "return 10;x");
    assert_eq!(program.len(), 2);

    let types: Vec<StmtType> = program.iter().map(|s| s.get_stmt_type()).collect();
    assert_eq!(types, vec![StmtType::ReturnStmt, StmtType::ExpressionStmt]);
}

#[test]
fn test_empty_program() {
    let program = Program {
        statements: vec![],
        span: span(),
    };

    assert!(program.is_empty());
    assert_eq!(program.token_literal(), "");
    assert_eq!(program.to_string(), "");
}
