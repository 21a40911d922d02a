//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the parse entry points.
//! The parser keeps a two token window (`current` and `peek`) over its token
//! source and dispatches on token kind through lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//!
//! Errors never stop a parse. They are appended to the parser's
//! [`Diagnostics`] and the failing construct comes back as `None`.

use log::{debug, info};

use crate::{
    ast::ast::Program,
    errors::{
        diagnostics::Diagnostics,
        errors::{Error, ErrorImpl},
    },
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind, TokenSource},
    },
    Position, Span,
};

use super::{
    lookups::{
        create_token_lookups, precedence_of, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
        Precedence, StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// How many expressions may be open at once before the parser gives up on
/// the statement. Keeps hostile input from exhausting the stack.
pub const MAX_NESTING_DEPTH: usize = 256;

/// What to do with a statement whose value expression failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AbsentPolicy {
    /// Drop the whole statement.
    #[default]
    AbortStatement,
    /// Keep the statement with an empty value slot.
    KeepHoles,
}

/// Parser behavior switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParserConfig {
    pub absent_policy: AbsentPolicy,
}

/// The main parser structure that maintains parsing state.
///
/// A parser owns its token source and is meant for a single
/// [`Parser::parse_program`] call.
pub struct Parser {
    /// Where tokens are pulled from
    source: Box<dyn TokenSource>,
    /// The token being looked at
    current: Token,
    /// One token of lookahead
    peek: Token,
    /// Errors reported so far, in order
    diagnostics: Diagnostics,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    config: ParserConfig,
    /// Expressions currently being parsed
    depth: usize,
}

impl Parser {
    /// Creates a parser with the default configuration.
    pub fn new<S: TokenSource + 'static>(source: S) -> Self {
        Parser::with_config(source, ParserConfig::default())
    }

    /// Creates a parser and primes the `current`/`peek` window.
    ///
    /// # Arguments
    ///
    /// * `source` - The token source to pull from
    /// * `config` - Behavior switches for this parse
    pub fn with_config<S: TokenSource + 'static>(source: S, config: ParserConfig) -> Self {
        let mut parser = Parser {
            source: Box::new(source),
            current: Token::eof(Position::null()),
            peek: Token::eof(Position::null()),
            diagnostics: Diagnostics::new(),
            stmt_lookup: StmtLookup::new(),
            nud_lookup: NUDLookup::new(),
            led_lookup: LEDLookup::new(),
            config,
            depth: 0,
        };
        create_token_lookups(&mut parser);

        parser.advance();
        parser.advance();

        info!("parser created with {:?}", config);
        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the lookahead token.
    pub fn peek_token(&self) -> &Token {
        &self.peek
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Shifts the lookahead into the current slot and pulls a new lookahead.
    pub fn advance(&mut self) {
        let next = self.source.next_token();
        self.current = std::mem::replace(&mut self.peek, next);
    }

    pub fn current_is(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    pub fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    /// Advances if the lookahead is `kind`.
    ///
    /// Otherwise records an unexpected token error and leaves the window
    /// where it was.
    pub fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek_is(kind) {
            self.advance();
            true
        } else {
            self.peek_error(kind);
            false
        }
    }

    pub fn current_precedence(&self) -> Precedence {
        precedence_of(self.current.kind)
    }

    pub fn peek_precedence(&self) -> Precedence {
        precedence_of(self.peek.kind)
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    ///
    /// The operator's binding power comes from the precedence table.
    pub fn led(&mut self, kind: TokenKind, led_fn: LEDHandler) {
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Opens one more level of expression nesting.
    ///
    /// Past [`MAX_NESTING_DEPTH`] this reports the error once, skips to the
    /// last token before the statement's `;` (or `EOF`) and returns `false`.
    pub fn enter_nesting(&mut self) -> bool {
        if self.depth >= MAX_NESTING_DEPTH {
            self.error(ErrorImpl::NestingTooDeep {
                limit: MAX_NESTING_DEPTH,
            });
            while !self.peek_is(TokenKind::Semicolon) && !self.peek_is(TokenKind::EOF) {
                self.advance();
            }
            return false;
        }

        self.depth += 1;
        true
    }

    pub fn leave_nesting(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    pub fn nesting_depth(&self) -> usize {
        self.depth
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Errors reported so far.
    pub fn errors(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Diagnostics {
        self.diagnostics
    }

    /// Records an error at the start of the current token.
    pub fn error(&mut self, error: ErrorImpl) {
        let position = self.current.span.start.clone();
        self.diagnostics.push(Error::new(error, position));
    }

    fn peek_error(&mut self, expected: TokenKind) {
        let error = ErrorImpl::UnexpectedToken {
            expected,
            got: self.peek.kind,
        };
        let position = self.peek.span.start.clone();
        self.diagnostics.push(Error::new(error, position));
    }

    /// Parses statements until the end of input.
    ///
    /// Statements that could not be parsed are left out; the reason is in
    /// [`Parser::errors`]. The window moves forward after every statement so
    /// the loop always terminates.
    pub fn parse_program(&mut self) -> Program {
        let start = self.current.span.start.clone();
        let mut statements = vec![];

        while !self.current_is(TokenKind::EOF) {
            if let Some(stmt) = parse_stmt(self) {
                statements.push(stmt);
            }
            self.advance();
        }

        debug!(
            "parsed {} statements with {} errors",
            statements.len(),
            self.diagnostics.len()
        );

        Program {
            statements,
            span: Span {
                start,
                end: self.current.span.end.clone(),
            },
        }
    }
}

/// Parses everything a token source yields.
///
/// This is the main entry point for parsing. It creates a parser instance,
/// parses until `EOF` and hands back the tree together with every error
/// reported along the way.
pub fn parse<S: TokenSource + 'static>(source: S, config: ParserConfig) -> (Program, Diagnostics) {
    let mut parser = Parser::with_config(source, config);
    let program = parser.parse_program();

    (program, parser.into_diagnostics())
}

/// Lexes and parses a source text.
///
/// # Arguments
///
/// * `source` - The program text
/// * `file` - Name used in positions, `shell` when `None`
/// * `config` - Behavior switches for this parse
pub fn parse_source(
    source: String,
    file: Option<String>,
    config: ParserConfig,
) -> (Program, Diagnostics) {
    parse(Lexer::new(source, file), config)
}
