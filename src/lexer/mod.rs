//! Lexical analysis module for the front end.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into tokens for parsing. It handles:
//!
//! - Tokenization of source code using regex patterns
//! - Recognition of keywords, identifiers, integers and operators
//! - Token position tracking for error reporting
//! - Handing tokens out on demand through `TokenSource`

pub mod lexer;
pub mod tokens;
