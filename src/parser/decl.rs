use crate::{
    errors::errors::Error, lexer::tokens::TokenKind, symbols::symbol_table::SymbolKind,
};

use super::parser::{parse_number, Parser, FRAME_HEADER_SIZE};

/// const-declarations = { "const" ident "=" number { "," ident "=" number } ";" }
///
/// Constants only reach the symbol table; no code is emitted.
pub fn parse_const_decl(parser: &mut Parser) -> Result<(), Error> {
    while parser.current_token_kind() == TokenKind::Const {
        loop {
            parser.advance();

            let name = parser.expect(TokenKind::Identifier)?;
            parser.ensure_undeclared(&name)?;

            parser.expect(TokenKind::Equals)?;
            let number = parser.expect(TokenKind::Number)?;
            let value = parse_number(&number)?;

            parser.declare(SymbolKind::Constant, &name, value, 0)?;

            if parser.current_token_kind() != TokenKind::Comma {
                break;
            }
        }

        parser.expect(TokenKind::Semicolon)?;
    }

    Ok(())
}

/// var-declarations = { "var" ident { "," ident } ";" }
///
/// Returns how many variables were declared. The n-th variable lives in
/// frame slot n + 2, right after the reserved header slots.
pub fn parse_var_decl(parser: &mut Parser) -> Result<i32, Error> {
    let mut count = 0;

    while parser.current_token_kind() == TokenKind::Var {
        loop {
            parser.advance();
            count += 1;

            let name = parser.expect(TokenKind::Identifier)?;
            parser.declare(SymbolKind::Variable, &name, 0, FRAME_HEADER_SIZE + count - 1)?;

            if parser.current_token_kind() != TokenKind::Comma {
                break;
            }
        }

        parser.expect(TokenKind::Semicolon)?;
    }

    Ok(count)
}
