//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms tokens into an Abstract
//! Syntax Tree. It uses a Pratt parser for expressions with operator
//! precedence and handles:
//!
//! - Statement parsing (`let`, `return` and expression statements)
//! - Expression parsing (prefix and infix operators, literals, grouping)
//! - Error reporting without stopping the parse
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! for expression parsing with a precedence table deciding how tightly each
//! infix operator binds.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
