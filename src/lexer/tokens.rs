use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    /// Every lexeme with a fixed spelling: reserved words and operators.
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("skip", TokenKind::Skip);
        map.insert("odd", TokenKind::Odd);
        map.insert("begin", TokenKind::Begin);
        map.insert("end", TokenKind::End);
        map.insert("if", TokenKind::If);
        map.insert("then", TokenKind::Then);
        map.insert("while", TokenKind::While);
        map.insert("do", TokenKind::Do);
        map.insert("call", TokenKind::Call);
        map.insert("const", TokenKind::Const);
        map.insert("var", TokenKind::Var);
        map.insert("procedure", TokenKind::Procedure);
        map.insert("write", TokenKind::Write);
        map.insert("read", TokenKind::Read);
        map.insert("else", TokenKind::Else);

        map.insert("+", TokenKind::Plus);
        map.insert("-", TokenKind::Minus);
        map.insert("*", TokenKind::Star);
        map.insert("/", TokenKind::Slash);
        map.insert("=", TokenKind::Equals);
        map.insert("<>", TokenKind::NotEquals);
        map.insert("<", TokenKind::Less);
        map.insert("<=", TokenKind::LessEquals);
        map.insert(">", TokenKind::Greater);
        map.insert(">=", TokenKind::GreaterEquals);
        map.insert("(", TokenKind::OpenParen);
        map.insert(")", TokenKind::CloseParen);
        map.insert(",", TokenKind::Comma);
        map.insert(";", TokenKind::Semicolon);
        map.insert(".", TokenKind::Period);
        map.insert(":=", TokenKind::Becomes);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Skip,
    Identifier,
    Number,

    Plus,
    Minus,
    Star,
    Slash,

    Odd,
    Equals,
    NotEquals,
    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    OpenParen,
    CloseParen,
    Comma,
    Semicolon,
    Period,
    Becomes,

    // Reserved
    Begin,
    End,
    If,
    Then,
    While,
    Do,
    Call,
    Const,
    Var,
    Procedure,
    Write,
    Read,
    Else,
}

impl TokenKind {
    /// The numeric token code used in lexeme lists. `EOF` is 0.
    pub fn code(&self) -> u8 {
        match self {
            TokenKind::EOF => 0,
            TokenKind::Skip => 1,
            TokenKind::Identifier => 2,
            TokenKind::Number => 3,
            TokenKind::Plus => 4,
            TokenKind::Minus => 5,
            TokenKind::Star => 6,
            TokenKind::Slash => 7,
            TokenKind::Odd => 8,
            TokenKind::Equals => 9,
            TokenKind::NotEquals => 10,
            TokenKind::Less => 11,
            TokenKind::LessEquals => 12,
            TokenKind::Greater => 13,
            TokenKind::GreaterEquals => 14,
            TokenKind::OpenParen => 15,
            TokenKind::CloseParen => 16,
            TokenKind::Comma => 17,
            TokenKind::Semicolon => 18,
            TokenKind::Period => 19,
            TokenKind::Becomes => 20,
            TokenKind::Begin => 21,
            TokenKind::End => 22,
            TokenKind::If => 23,
            TokenKind::Then => 24,
            TokenKind::While => 25,
            TokenKind::Do => 26,
            TokenKind::Call => 27,
            TokenKind::Const => 28,
            TokenKind::Var => 29,
            TokenKind::Procedure => 30,
            TokenKind::Write => 31,
            TokenKind::Read => 32,
            TokenKind::Else => 33,
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenKind::EOF => "end of input",
            TokenKind::Identifier => "identifier",
            TokenKind::Number => "number",
            TokenKind::OpenParen => "left parenthesis",
            TokenKind::CloseParen => "right parenthesis",
            TokenKind::Comma => "comma",
            TokenKind::Semicolon => "semicolon",
            TokenKind::Period => "period",
            TokenKind::Becomes => ":=",
            TokenKind::Equals => "=",
            other => {
                return match RESERVED_LOOKUP.iter().find(|(_, kind)| *kind == other) {
                    Some((text, _)) => write!(f, "{}", text),
                    None => write!(f, "{:?}", other),
                };
            }
        };

        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nvalue: {}}}", self.kind, self.value)
    }
}

impl Token {
    /// Whether the token's text is carried into the lexeme list.
    pub fn has_literal(&self) -> bool {
        matches!(self.kind, TokenKind::Identifier | TokenKind::Number)
    }
}
