use crate::{
    codegen::instruction::{OpCode, OprCode},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    symbols::symbol_table::SymbolKind,
};

use super::{
    lookups::RELATIONAL_LOOKUP,
    parser::{parse_number, Parser},
};

/// condition = "odd" expression | expression relop expression
pub fn parse_condition(parser: &mut Parser) -> Result<(), Error> {
    if parser.current_token_kind() == TokenKind::Odd {
        parser.advance();
        parse_expr(parser)?;
        parser.emit_opr(OprCode::Odd);
        return Ok(());
    }

    parse_expr(parser)?;

    let Some(operator) = RELATIONAL_LOOKUP.get(&parser.current_token_kind()).copied() else {
        return Err(Error::new(
            ErrorImpl::RelationalOperatorExpected {
                token: parser.current_token().value.clone(),
            },
            parser.get_position(),
        ));
    };

    parser.advance();
    parse_expr(parser)?;
    parser.emit_opr(operator);

    Ok(())
}

/// expression = [ "+" | "-" ] term { ( "+" | "-" ) term }
///
/// A leading minus negates the first term only.
pub fn parse_expr(parser: &mut Parser) -> Result<(), Error> {
    parser.enter()?;
    let result = parse_signed_terms(parser);
    parser.leave();

    result
}

fn parse_signed_terms(parser: &mut Parser) -> Result<(), Error> {
    let negate = parser.current_token_kind() == TokenKind::Minus;
    if negate || parser.current_token_kind() == TokenKind::Plus {
        parser.advance();
    }

    parse_term(parser)?;
    if negate {
        parser.emit_opr(OprCode::Neg);
    }

    loop {
        let operator = match parser.current_token_kind() {
            TokenKind::Plus => OprCode::Add,
            TokenKind::Minus => OprCode::Sub,
            _ => break,
        };

        parser.advance();
        parse_term(parser)?;
        parser.emit_opr(operator);
    }

    Ok(())
}

/// term = factor { ( "*" | "/" ) factor }
pub fn parse_term(parser: &mut Parser) -> Result<(), Error> {
    parse_factor(parser)?;

    loop {
        let operator = match parser.current_token_kind() {
            TokenKind::Star => OprCode::Mul,
            TokenKind::Slash => OprCode::Div,
            _ => break,
        };

        parser.advance();
        parse_factor(parser)?;
        parser.emit_opr(operator);
    }

    Ok(())
}

/// factor = ident | number | "(" expression ")"
pub fn parse_factor(parser: &mut Parser) -> Result<(), Error> {
    match parser.current_token_kind() {
        TokenKind::Identifier => {
            let token = parser.current_token().clone();
            let symbol = parser.resolve(&token)?;
            let (op, operand) = match symbol.kind {
                SymbolKind::Constant => (OpCode::Lit, symbol.value),
                SymbolKind::Variable | SymbolKind::Procedure => (OpCode::Lod, symbol.address),
            };

            parser.emit(op, operand);
            parser.advance();
        }
        TokenKind::Number => {
            let value = parse_number(parser.current_token())?;
            parser.emit(OpCode::Lit, value);
            parser.advance();
        }
        TokenKind::OpenParen => {
            parser.advance();
            parse_expr(parser)?;
            parser.expect(TokenKind::CloseParen)?;
        }
        _ => {
            return Err(Error::new(
                ErrorImpl::UnexpectedFactor {
                    token: parser.current_token().value.clone(),
                },
                parser.get_position(),
            ));
        }
    }

    Ok(())
}
