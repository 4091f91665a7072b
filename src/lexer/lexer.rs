use std::rc::Rc;

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    options::LexMode,
    Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

/// Longest accepted number literal, in digits.
pub const MAX_NUMBER_DIGITS: usize = 5;
/// Longest accepted identifier, in characters.
pub const MAX_IDENTIFIER_LENGTH: usize = 11;

pub type RegexHandler = fn(&mut Lexer, &Regex) -> Result<(), Error>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    // Tried in order; every regex is anchored at the current position.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new(r"(?s)^/\*.*?(?:\*/|\z)").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new(r"^\s+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^[a-zA-Z0-9]+").unwrap(), handler: word_handler },
        RegexPattern { regex: Regex::new("^:=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Becomes, ":=") },
        RegexPattern { regex: Regex::new("^<>").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::NotEquals, "<>") },
        RegexPattern { regex: Regex::new("^<=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LessEquals, "<=") },
        RegexPattern { regex: Regex::new("^>=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::GreaterEquals, ">=") },
        RegexPattern { regex: Regex::new("^!=").unwrap(), handler: invalid_handler },
        RegexPattern { regex: Regex::new("^<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Less, "<") },
        RegexPattern { regex: Regex::new("^>").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Greater, ">") },
        RegexPattern { regex: Regex::new("^=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Equals, "=") },
        RegexPattern { regex: Regex::new(r"^\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+") },
        RegexPattern { regex: Regex::new("^-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Minus, "-") },
        RegexPattern { regex: Regex::new(r"^\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Star, "*") },
        RegexPattern { regex: Regex::new("^/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash, "/") },
        RegexPattern { regex: Regex::new(r"^\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(") },
        RegexPattern { regex: Regex::new(r"^\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")") },
        RegexPattern { regex: Regex::new("^,").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma, ",") },
        RegexPattern { regex: Regex::new("^;").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";") },
        RegexPattern { regex: Regex::new(r"^\.").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Period, ".") },
    ];
}

pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    pos: usize,
    file: Rc<String>,
    mode: LexMode,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>, mode: LexMode) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            tokens: vec![],
            source,
            pos: 0,
            file: file_name,
            mode,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn position(&self) -> Position {
        Position(self.pos as u32, Rc::clone(&self.file))
    }

    /// The span of the next `len` bytes.
    pub fn span_of(&self, len: usize) -> Span {
        Span {
            start: self.position(),
            end: Position((self.pos + len) as u32, Rc::clone(&self.file)),
        }
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Handles a lexeme of `len` bytes that cannot become a token.
    ///
    /// Strict mode reports it; lenient mode skips it without a token.
    fn reject(&mut self, fault: ErrorImpl, len: usize) -> Result<(), Error> {
        match self.mode {
            LexMode::Strict => Err(Error::new(fault, self.position())),
            LexMode::Lenient => {
                debug!("dropping lexeme at offset {}: {}", self.pos, fault);
                self.advance_n(len);
                Ok(())
            }
        }
    }
}

fn skip_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let matched = regex.find(lexer.remainder()).map_or(0, |m| m.end());
    lexer.advance_n(matched);
    Ok(())
}

fn invalid_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let lexeme = regex
        .find(lexer.remainder())
        .map_or_else(String::new, |m| m.as_str().to_string());
    let len = lexeme.len();

    lexer.reject(ErrorImpl::InvalidLexeme { lexeme }, len)
}

fn word_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let Some(value) = regex.find(lexer.remainder()).map(|m| m.as_str().to_string()) else {
        return Ok(());
    };
    let len = value.len();

    let kind = if let Some(kind) = RESERVED_LOOKUP.get(value.as_str()) {
        *kind
    } else if value.chars().all(|c| c.is_ascii_digit()) {
        if len > MAX_NUMBER_DIGITS {
            return lexer.reject(ErrorImpl::NumberTooLong { number: value }, len);
        }
        TokenKind::Number
    } else if value.chars().all(|c| c.is_ascii_lowercase()) {
        if len > MAX_IDENTIFIER_LENGTH {
            return lexer.reject(ErrorImpl::IdentifierTooLong { identifier: value }, len);
        }
        TokenKind::Identifier
    } else {
        return lexer.reject(ErrorImpl::InvalidLexeme { lexeme: value }, len);
    };

    let span = lexer.span_of(len);
    lexer.push(MK_TOKEN!(kind, value, span));
    lexer.advance_n(len);
    Ok(())
}

/// Splits PL/0 source into tokens, rejecting malformed lexemes.
pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    tokenize_with_mode(source, file, LexMode::Strict)
}

/// Splits PL/0 source into tokens.
///
/// Comments are stripped, whitespace separates lexemes and the token list
/// always ends with a single `EOF` token. `mode` decides what happens to
/// lexemes that are not keywords, operators, short numbers or identifiers.
pub fn tokenize_with_mode(
    source: String,
    file: Option<String>,
    mode: LexMode,
) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file, mode);

    while !lex.at_eof() {
        let mut matched = false;

        for pattern in PATTERNS.iter() {
            if pattern.regex.is_match(lex.remainder()) {
                (pattern.handler)(&mut lex, &pattern.regex)?;
                matched = true;
                break;
            }
        }

        if !matched {
            let Some(c) = lex.remainder().chars().next() else {
                break;
            };
            lex.reject(ErrorImpl::InvalidLexeme { lexeme: c.to_string() }, c.len_utf8())?;
        }
    }

    let span = lex.span_of(0);
    lex.push(MK_TOKEN!(TokenKind::EOF, String::from("EOF"), span));
    Ok(lex.tokens)
}

/// Flattens tokens into the lexeme list: each token's numeric code,
/// followed by its text for identifiers and numbers.
pub fn lexeme_list(tokens: &[Token]) -> String {
    let mut fragments = vec![];

    for token in tokens.iter().filter(|token| token.kind != TokenKind::EOF) {
        fragments.push(token.kind.code().to_string());
        if token.has_literal() {
            fragments.push(token.value.clone());
        }
    }

    fragments.join(" ")
}
