use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{codegen::instruction::OprCode, errors::errors::Error, lexer::tokens::TokenKind};

use super::{parser::Parser, stmt::*};

pub type StmtHandler = fn(&mut Parser) -> Result<(), Error>;

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;

lazy_static! {
    /// Relational operators allowed between two expressions in a condition.
    pub static ref RELATIONAL_LOOKUP: HashMap<TokenKind, OprCode> = {
        let mut map = HashMap::new();
        map.insert(TokenKind::Equals, OprCode::Eql);
        map.insert(TokenKind::NotEquals, OprCode::Neq);
        map.insert(TokenKind::Less, OprCode::Lss);
        map.insert(TokenKind::LessEquals, OprCode::Leq);
        map.insert(TokenKind::Greater, OprCode::Gtr);
        map.insert(TokenKind::GreaterEquals, OprCode::Geq);
        map
    };
}

/// Registers a handler for every token that can start a statement.
///
/// Any other token starts the empty statement.
pub fn create_token_lookups(parser: &mut Parser) {
    parser.stmt(TokenKind::Identifier, parse_assignment_stmt);
    parser.stmt(TokenKind::Begin, parse_begin_stmt);
    parser.stmt(TokenKind::If, parse_if_stmt);
    parser.stmt(TokenKind::While, parse_while_stmt);
    parser.stmt(TokenKind::Read, parse_read_stmt);
    parser.stmt(TokenKind::Write, parse_write_stmt);
}
