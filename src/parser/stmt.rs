use crate::{
    codegen::instruction::{OpCode, SysCode},
    errors::errors::Error,
    lexer::tokens::TokenKind,
    parser::expr::{parse_condition, parse_expr},
};

use super::parser::Parser;

pub fn parse_stmt(parser: &mut Parser) -> Result<(), Error> {
    let handler = parser
        .get_stmt_lookup()
        .get(&parser.current_token_kind())
        .copied();

    // Empty statement
    let Some(handler) = handler else {
        return Ok(());
    };

    parser.enter()?;
    let result = handler(parser);
    parser.leave();

    result
}

/// ident ":=" expression
pub fn parse_assignment_stmt(parser: &mut Parser) -> Result<(), Error> {
    let target = parser.current_token().clone();
    let address = parser.resolve_variable(&target)?;
    parser.advance();

    parser.expect(TokenKind::Becomes)?;
    parse_expr(parser)?;
    parser.emit(OpCode::Sto, address);

    Ok(())
}

/// "begin" statement { ";" statement } "end"
pub fn parse_begin_stmt(parser: &mut Parser) -> Result<(), Error> {
    loop {
        parser.advance();
        parse_stmt(parser)?;

        if parser.current_token_kind() != TokenKind::Semicolon {
            break;
        }
    }

    parser.expect(TokenKind::End)?;
    Ok(())
}

/// "if" condition "then" statement
pub fn parse_if_stmt(parser: &mut Parser) -> Result<(), Error> {
    parser.advance();
    parse_condition(parser)?;

    let jpc = parser.emit(OpCode::Jpc, 0);
    parser.expect(TokenKind::Then)?;

    parse_stmt(parser)?;
    parser.patch_to_here(jpc);

    Ok(())
}

/// "while" condition "do" statement
pub fn parse_while_stmt(parser: &mut Parser) -> Result<(), Error> {
    parser.advance();

    let loop_head = parser.next_index();
    parse_condition(parser)?;
    parser.expect(TokenKind::Do)?;

    let jpc = parser.emit(OpCode::Jpc, 0);
    parse_stmt(parser)?;
    parser.emit(OpCode::Jmp, loop_head as i32);
    parser.patch_to_here(jpc);

    Ok(())
}

/// "read" ident
pub fn parse_read_stmt(parser: &mut Parser) -> Result<(), Error> {
    parser.advance();

    let target = parser.expect(TokenKind::Identifier)?;
    let address = parser.resolve_variable(&target)?;

    parser.emit_sys(SysCode::Read);
    parser.emit(OpCode::Sto, address);

    Ok(())
}

/// "write" expression
pub fn parse_write_stmt(parser: &mut Parser) -> Result<(), Error> {
    parser.advance();
    parse_expr(parser)?;
    parser.emit_sys(SysCode::Write);

    Ok(())
}
