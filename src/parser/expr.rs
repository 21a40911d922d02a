use log::trace;

use crate::{
    ast::{
        ast::{Expr, Node},
        expressions::{BooleanExpr, IdentifierExpr, InfixExpr, IntegerExpr, PrefixExpr},
    },
    errors::errors::ErrorImpl,
    lexer::tokens::TokenKind,
    Span,
};

use super::{lookups::Precedence, parser::Parser};

/// Precedence climbing over the NUD/LED tables.
///
/// On entry the current token starts the expression; on success the current
/// token is the last one the expression used. An operator of equal
/// precedence is not taken by the recursive call, so chains associate left.
pub fn parse_expr(parser: &mut Parser, precedence: Precedence) -> Option<Expr> {
    if !parser.enter_nesting() {
        return None;
    }

    let expr = climb(parser, precedence);
    parser.leave_nesting();
    expr
}

fn climb(parser: &mut Parser, precedence: Precedence) -> Option<Expr> {
    let token_kind = parser.current_token_kind();
    trace!("parse_expr {} at {:?}", token_kind, precedence);

    let Some(nud) = parser.get_nud_lookup().get(&token_kind).copied() else {
        parser.error(ErrorImpl::NoPrefixParseFn { kind: token_kind });
        return None;
    };

    let mut left = nud(parser)?;

    while !parser.peek_is(TokenKind::Semicolon) && precedence < parser.peek_precedence() {
        let peek_kind = parser.peek_token().kind;
        let Some(led) = parser.get_led_lookup().get(&peek_kind).copied() else {
            return Some(left);
        };

        parser.advance();
        left = led(parser, left)?;
    }

    Some(left)
}

pub fn parse_identifier_expr(parser: &mut Parser) -> Option<Expr> {
    let token = parser.current_token().clone();

    Some(Expr::Identifier(IdentifierExpr {
        value: token.value.clone(),
        token,
    }))
}

pub fn parse_integer_expr(parser: &mut Parser) -> Option<Expr> {
    let token = parser.current_token().clone();

    // a leading zero makes the literal octal
    let parsed = match token.value.strip_prefix('0') {
        Some(digits) if !digits.is_empty() => i64::from_str_radix(digits, 8),
        _ => token.value.parse::<i64>(),
    };

    match parsed {
        Ok(value) => Some(Expr::Integer(IntegerExpr { token, value })),
        Err(_) => {
            parser.error(ErrorImpl::IntegerParseError { token: token.value });
            None
        }
    }
}

pub fn parse_boolean_expr(parser: &mut Parser) -> Option<Expr> {
    Some(Expr::Boolean(BooleanExpr {
        value: parser.current_is(TokenKind::True),
        token: parser.current_token().clone(),
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Option<Expr> {
    let operator = parser.current_token().clone();
    parser.advance();

    let right = parse_expr(parser, Precedence::Prefix)?;

    Some(Expr::Prefix(PrefixExpr {
        span: Span {
            start: operator.span.start.clone(),
            end: right.get_span().end.clone(),
        },
        operator,
        right: Box::new(right),
    }))
}

pub fn parse_infix_expr(parser: &mut Parser, left: Expr) -> Option<Expr> {
    let operator = parser.current_token().clone();
    let precedence = parser.current_precedence();
    parser.advance();

    let right = parse_expr(parser, precedence)?;

    Some(Expr::Infix(InfixExpr {
        span: Span {
            start: left.get_span().start.clone(),
            end: right.get_span().end.clone(),
        },
        left: Box::new(left),
        operator,
        right: Box::new(right),
    }))
}

pub fn parse_grouped_expr(parser: &mut Parser) -> Option<Expr> {
    parser.advance();
    let expr = parse_expr(parser, Precedence::Lowest)?;

    if !parser.expect_peek(TokenKind::RParen) {
        return None;
    }

    Some(expr)
}
