use log::debug;

use crate::{
    ast::{
        ast::{Expr, Stmt},
        expressions::IdentifierExpr,
        statements::{ExpressionStmt, LetStmt, ReturnStmt},
    },
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::Precedence},
    Span,
};

use super::parser::{AbsentPolicy, Parser};

pub fn parse_stmt(parser: &mut Parser) -> Option<Stmt> {
    let kind = parser.current_token_kind();
    debug!("parsing statement starting with {}", kind);

    if let Some(stmt_fn) = parser.get_stmt_lookup().get(&kind).copied() {
        return stmt_fn(parser);
    }

    parse_expression_stmt(parser)
}

/// Settles the value slot of a `let`/`return` statement.
///
/// A parsed value must be followed by `;`. A missing value is dropped or
/// kept as a hole depending on the parser's absent policy; `None` means the
/// statement is dropped.
fn complete_value(parser: &mut Parser, value: Option<Expr>) -> Option<Option<Expr>> {
    match value {
        Some(value) => parser
            .expect_peek(TokenKind::Semicolon)
            .then_some(Some(value)),
        None => {
            // the terminator right after the bad token belongs to this statement
            if parser.peek_is(TokenKind::Semicolon) {
                parser.advance();
            }

            match parser.config().absent_policy {
                AbsentPolicy::AbortStatement => None,
                AbsentPolicy::KeepHoles => Some(None),
            }
        }
    }
}

fn span_from(parser: &Parser, first: &Span) -> Span {
    Span {
        start: first.start.clone(),
        end: parser.current_token().span.end.clone(),
    }
}

pub fn parse_let_stmt(parser: &mut Parser) -> Option<Stmt> {
    let token = parser.current_token().clone();

    if !parser.expect_peek(TokenKind::Ident) {
        return None;
    }

    let name = IdentifierExpr {
        token: parser.current_token().clone(),
        value: parser.current_token().value.clone(),
    };

    if !parser.expect_peek(TokenKind::Assign) {
        return None;
    }

    parser.advance();
    let value = parse_expr(parser, Precedence::Lowest);
    let value = complete_value(parser, value)?;

    Some(Stmt::Let(LetStmt {
        span: span_from(parser, &token.span),
        token,
        name,
        value,
    }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Option<Stmt> {
    let token = parser.current_token().clone();

    parser.advance();
    let value = parse_expr(parser, Precedence::Lowest);
    let value = complete_value(parser, value)?;

    Some(Stmt::Return(ReturnStmt {
        span: span_from(parser, &token.span),
        token,
        value,
    }))
}

/// A bare expression; the trailing `;` is optional so the REPL can omit it.
pub fn parse_expression_stmt(parser: &mut Parser) -> Option<Stmt> {
    let token = parser.current_token().clone();
    let expression = parse_expr(parser, Precedence::Lowest);

    if parser.peek_is(TokenKind::Semicolon) {
        parser.advance();
    }

    if expression.is_none() && parser.config().absent_policy == AbsentPolicy::AbortStatement {
        return None;
    }

    Some(Stmt::Expression(ExpressionStmt {
        span: span_from(parser, &token.span),
        token,
        expression,
    }))
}
