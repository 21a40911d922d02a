use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{
    ast::ast::{Expr, Stmt},
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser, stmt::*};

/// How tightly an operator binds, lowest first.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash)]
pub enum Precedence {
    Lowest,
    Equals,      // == !=
    LessGreater, // < >
    Sum,         // + -
    Product,     // * /
    Prefix,      // -x !x
    Call,
}

impl Precedence {
    /// Numeric binding power; `Lowest` is 1.
    pub fn value(self) -> u8 {
        self as u8 + 1
    }
}

lazy_static! {
    static ref PRECEDENCES: HashMap<TokenKind, Precedence> = {
        let mut map = HashMap::new();
        map.insert(TokenKind::Eq, Precedence::Equals);
        map.insert(TokenKind::NotEq, Precedence::Equals);
        map.insert(TokenKind::Lt, Precedence::LessGreater);
        map.insert(TokenKind::Gt, Precedence::LessGreater);
        map.insert(TokenKind::Plus, Precedence::Sum);
        map.insert(TokenKind::Minus, Precedence::Sum);
        map.insert(TokenKind::Slash, Precedence::Product);
        map.insert(TokenKind::Asterisk, Precedence::Product);
        map
    };
}

/// Binding power of `kind` when it shows up between two operands.
pub fn precedence_of(kind: TokenKind) -> Precedence {
    PRECEDENCES
        .get(&kind)
        .copied()
        .unwrap_or(Precedence::Lowest)
}

pub type StmtHandler = fn(&mut Parser) -> Option<Stmt>;
pub type NUDHandler = fn(&mut Parser) -> Option<Expr>;
pub type LEDHandler = fn(&mut Parser, Expr) -> Option<Expr>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Equality and relational
    parser.led(TokenKind::Eq, parse_infix_expr);
    parser.led(TokenKind::NotEq, parse_infix_expr);
    parser.led(TokenKind::Lt, parse_infix_expr);
    parser.led(TokenKind::Gt, parse_infix_expr);

    // Additive and multiplicative
    parser.led(TokenKind::Plus, parse_infix_expr);
    parser.led(TokenKind::Minus, parse_infix_expr);
    parser.led(TokenKind::Asterisk, parse_infix_expr);
    parser.led(TokenKind::Slash, parse_infix_expr);

    // Literals and symbols
    parser.nud(TokenKind::Ident, parse_identifier_expr);
    parser.nud(TokenKind::Int, parse_integer_expr);
    parser.nud(TokenKind::True, parse_boolean_expr);
    parser.nud(TokenKind::False, parse_boolean_expr);
    parser.nud(TokenKind::Bang, parse_prefix_expr);
    parser.nud(TokenKind::Minus, parse_prefix_expr);
    parser.nud(TokenKind::LParen, parse_grouped_expr);

    // Statements
    parser.stmt(TokenKind::Let, parse_let_stmt);
    parser.stmt(TokenKind::Return, parse_return_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;
