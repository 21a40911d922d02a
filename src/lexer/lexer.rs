use std::rc::Rc;

use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

use crate::{Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind, TokenSource, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, &Regex) -> Option<Token>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

// Patterns are anchored and tried in order, so longer operators come first.
lazy_static! {
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: pattern("[a-zA-Z_][a-zA-Z0-9_]*"), handler: symbol_handler },
        RegexPattern { regex: pattern("[0-9]+"), handler: number_handler },
        RegexPattern { regex: pattern("\\s+"), handler: skip_handler },
        RegexPattern { regex: pattern("//[^\n]*"), handler: skip_handler },
        RegexPattern { regex: pattern("=="), handler: MK_DEFAULT_HANDLER!(TokenKind::Eq, "==") },
        RegexPattern { regex: pattern("!="), handler: MK_DEFAULT_HANDLER!(TokenKind::NotEq, "!=") },
        RegexPattern { regex: pattern("="), handler: MK_DEFAULT_HANDLER!(TokenKind::Assign, "=") },
        RegexPattern { regex: pattern("!"), handler: MK_DEFAULT_HANDLER!(TokenKind::Bang, "!") },
        RegexPattern { regex: pattern("\\+"), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+") },
        RegexPattern { regex: pattern("-"), handler: MK_DEFAULT_HANDLER!(TokenKind::Minus, "-") },
        RegexPattern { regex: pattern("\\*"), handler: MK_DEFAULT_HANDLER!(TokenKind::Asterisk, "*") },
        RegexPattern { regex: pattern("/"), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash, "/") },
        RegexPattern { regex: pattern("<"), handler: MK_DEFAULT_HANDLER!(TokenKind::Lt, "<") },
        RegexPattern { regex: pattern(">"), handler: MK_DEFAULT_HANDLER!(TokenKind::Gt, ">") },
        RegexPattern { regex: pattern(","), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma, ",") },
        RegexPattern { regex: pattern(";"), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";") },
        RegexPattern { regex: pattern("\\("), handler: MK_DEFAULT_HANDLER!(TokenKind::LParen, "(") },
        RegexPattern { regex: pattern("\\)"), handler: MK_DEFAULT_HANDLER!(TokenKind::RParen, ")") },
        RegexPattern { regex: pattern("\\{"), handler: MK_DEFAULT_HANDLER!(TokenKind::LBrace, "{") },
        RegexPattern { regex: pattern("\\}"), handler: MK_DEFAULT_HANDLER!(TokenKind::RBrace, "}") },
    ];
}

fn pattern(body: &str) -> Regex {
    // The pattern bodies above are fixed and known to compile.
    Regex::new(&format!("^(?:{})", body)).expect("invalid lexer pattern")
}

/// Streaming lexer over a single source text.
///
/// Tokens are produced lazily through [`TokenSource::next_token`]; once the
/// source is exhausted every further call yields an `EOF` token.
#[derive(Clone, Debug)]
pub struct Lexer {
    source: String,
    pos: usize,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            source,
            pos: 0,
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn position(&self) -> Position {
        Position(self.pos as u32, Rc::clone(&self.file))
    }

    /// Span covering the next `len` bytes.
    pub fn span_of(&self, len: usize) -> Span {
        Span {
            start: self.position(),
            end: Position((self.pos + len) as u32, Rc::clone(&self.file)),
        }
    }

    fn matched_text(&self, regex: &Regex) -> String {
        regex
            .find(self.remainder())
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    }

    fn illegal(&mut self) -> Token {
        let ch = self.remainder().chars().next().unwrap_or('\0');
        let span = self.span_of(ch.len_utf8());
        self.advance_n(ch.len_utf8());

        MK_TOKEN!(TokenKind::Illegal, ch.to_string(), span)
    }
}

impl TokenSource for Lexer {
    fn next_token(&mut self) -> Token {
        loop {
            if self.at_eof() {
                return Token::eof(self.position());
            }

            let mut matched = false;
            let mut produced = None;

            for pattern in PATTERNS.iter() {
                if pattern.regex.is_match(self.remainder()) {
                    produced = (pattern.handler)(self, &pattern.regex);
                    matched = true;
                    break;
                }
            }

            let token = if matched {
                match produced {
                    Some(token) => token,
                    None => continue,
                }
            } else {
                self.illegal()
            };

            trace!("lexed {}", token.debug());
            return token;
        }
    }
}

fn number_handler(lexer: &mut Lexer, regex: &Regex) -> Option<Token> {
    let matched = lexer.matched_text(regex);
    let span = lexer.span_of(matched.len());
    lexer.advance_n(matched.len());

    Some(MK_TOKEN!(TokenKind::Int, matched, span))
}

fn skip_handler(lexer: &mut Lexer, regex: &Regex) -> Option<Token> {
    let matched = lexer.matched_text(regex);
    lexer.advance_n(matched.len());
    None
}

fn symbol_handler(lexer: &mut Lexer, regex: &Regex) -> Option<Token> {
    let value = lexer.matched_text(regex);
    let span = lexer.span_of(value.len());
    lexer.advance_n(value.len());

    let kind = RESERVED_LOOKUP
        .get(value.as_str())
        .copied()
        .unwrap_or(TokenKind::Ident);

    Some(MK_TOKEN!(kind, value, span))
}

/// Tokenizes a whole source text, including the trailing `EOF` token.
pub fn tokenize(source: String, file: Option<String>) -> Vec<Token> {
    let mut lex = Lexer::new(source, file);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let is_eof = token.kind == TokenKind::EOF;
        tokens.push(token);

        if is_eof {
            return tokens;
        }
    }
}
