//! Parser state and the program entry point.
//!
//! The parser is a one-pass recursive descent over the token stream. It
//! owns the symbol table and the instruction buffer for the whole run:
//! declarations append symbols, statements and expressions append
//! instructions, and forward jumps are backpatched in place.

use std::{collections::HashMap, rc::Rc};

use log::warn;

use crate::{
    codegen::{
        assembly::Assembly,
        instruction::{OpCode, OprCode, SysCode},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::lexeme_list,
        tokens::{Token, TokenKind},
    },
    symbols::symbol_table::{Symbol, SymbolKind, SymbolTable},
    CompiledProgram, Position, Span,
};

use super::{
    decl::{parse_const_decl, parse_var_decl},
    lookups::{create_token_lookups, StmtHandler, StmtLookup},
    stmt::parse_stmt,
};

/// Slots every activation frame reserves before its variables.
pub const FRAME_HEADER_SIZE: i32 = 3;
/// Operand of the entry jump and address of the synthetic `main` procedure.
pub const ENTRY_ADDRESS: i32 = 3;
/// Deepest accepted nesting of statements and of expressions.
pub const MAX_NESTING_DEPTH: usize = 256;

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// The list of tokens to parse, always ending in `EOF`
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// The name of the source file being parsed
    file: Rc<String>,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    symbols: SymbolTable,
    assembly: Assembly,
    /// Statement and expression rules currently open
    depth: usize,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// An `EOF` token is appended when `tokens` does not already end with
    /// one, so the cursor always has a token to look at.
    pub fn new(mut tokens: Vec<Token>, file: Rc<String>) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            let end = tokens
                .last()
                .map(|token| token.span.end.clone())
                .unwrap_or_else(|| Position(0, Rc::clone(&file)));

            tokens.push(Token {
                kind: TokenKind::EOF,
                value: String::from("EOF"),
                span: Span {
                    start: end.clone(),
                    end,
                },
            });
        }

        Parser {
            tokens,
            pos: 0,
            file,
            stmt_lookup: HashMap::new(),
            symbols: SymbolTable::new(),
            assembly: Assembly::new(),
            depth: 0,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Advances to the next token and returns the previous token.
    ///
    /// The cursor stays on the final `EOF` token once it gets there.
    pub fn advance(&mut self) -> &Token {
        let previous = self.pos;
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        &self.tokens[previous]
    }

    /// Expects a token of the specified kind and consumes it.
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the current token matches, otherwise an
    /// `ExpectedToken` error pointing at the current token.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        if self.current_token_kind() != expected_kind {
            let token = self.current_token();
            return Err(Error::new(
                ErrorImpl::ExpectedToken {
                    expected: expected_kind,
                    token: token.value.clone(),
                },
                token.span.start.clone(),
            ));
        }

        Ok(self.advance().clone())
    }

    /// Returns the current position in the source file.
    pub fn get_position(&self) -> Position {
        self.current_token().span.start.clone()
    }

    pub fn get_file(&self) -> &Rc<String> {
        &self.file
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Opens one level of nesting, failing past `MAX_NESTING_DEPTH`.
    ///
    /// Every successful call must be paired with `leave`.
    pub fn enter(&mut self) -> Result<(), Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                self.get_position(),
            ));
        }

        self.depth += 1;
        Ok(())
    }

    pub fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    pub fn get_depth(&self) -> usize {
        self.depth
    }

    /// Fails when the identifier in `token` already names a symbol.
    pub fn ensure_undeclared(&self, token: &Token) -> Result<(), Error> {
        if self.symbols.lookup(&token.value).is_some() {
            return Err(Error::new(
                ErrorImpl::AlreadyDeclared {
                    identifier: token.value.clone(),
                },
                token.span.start.clone(),
            ));
        }

        Ok(())
    }

    /// Adds `token` to the symbol table, rejecting names already in use.
    pub fn declare(
        &mut self,
        kind: SymbolKind,
        token: &Token,
        value: i32,
        address: i32,
    ) -> Result<usize, Error> {
        self.ensure_undeclared(token)?;
        Ok(self.symbols.insert(kind, &token.value, value, 0, address))
    }

    /// Finds the symbol an identifier token refers to.
    pub fn resolve(&self, token: &Token) -> Result<&Symbol, Error> {
        self.symbols
            .lookup(&token.value)
            .and_then(|index| self.symbols.get(index))
            .ok_or_else(|| {
                Error::new(
                    ErrorImpl::NotDeclared {
                        identifier: token.value.clone(),
                    },
                    token.span.start.clone(),
                )
            })
    }

    /// Finds the frame address of the variable an identifier token names.
    pub fn resolve_variable(&self, token: &Token) -> Result<i32, Error> {
        let symbol = self.resolve(token)?;

        if symbol.kind != SymbolKind::Variable {
            return Err(Error::new(
                ErrorImpl::NotAVariable {
                    identifier: token.value.clone(),
                },
                token.span.start.clone(),
            ));
        }

        Ok(symbol.address)
    }

    /// Emits an instruction at level 0 and returns its index.
    pub fn emit(&mut self, op: OpCode, operand: i32) -> usize {
        self.assembly.emit(op, 0, operand)
    }

    pub fn emit_opr(&mut self, opr: OprCode) -> usize {
        self.emit(OpCode::Opr, opr as i32)
    }

    pub fn emit_sys(&mut self, sys: SysCode) -> usize {
        self.emit(OpCode::Sys, sys as i32)
    }

    pub fn next_index(&self) -> usize {
        self.assembly.next_index()
    }

    /// Points the jump emitted at `index` at the next instruction to be emitted.
    pub fn patch_to_here(&mut self, index: usize) {
        let target = self.assembly.next_index() as i32;
        let patched = self.assembly.patch(index, target);
        debug_assert!(patched, "no instruction at {} to patch", index);
    }

    pub fn get_symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn get_assembly(&self) -> &Assembly {
        &self.assembly
    }
}

/// Parses a number token into its value.
pub fn parse_number(token: &Token) -> Result<i32, Error> {
    token.value.parse().map_err(|_| {
        Error::new(
            ErrorImpl::NumberParseError {
                token: token.value.clone(),
            },
            token.span.start.clone(),
        )
    })
}

/// block = const-declarations var-declarations statement
pub fn parse_block(parser: &mut Parser) -> Result<(), Error> {
    parse_const_decl(parser)?;
    let variables = parse_var_decl(parser)?;
    parser.emit(OpCode::Inc, FRAME_HEADER_SIZE + variables);
    parse_stmt(parser)
}

/// program = block "."
pub fn parse_program(parser: &mut Parser) -> Result<(), Error> {
    parser.emit(OpCode::Jmp, ENTRY_ADDRESS);
    parser
        .symbols
        .insert(SymbolKind::Procedure, "main", 0, 0, ENTRY_ADDRESS);

    parse_block(parser)?;

    parser.expect(TokenKind::Period)?;
    parser.emit_sys(SysCode::Halt);

    if parser.current_token_kind() != TokenKind::EOF {
        warn!(
            "{}: ignoring input after the final period, starting at `{}`",
            parser.get_file(),
            parser.current_token().value
        );
    }

    Ok(())
}

/// Compiles a token stream into P-code and its symbol table.
///
/// This is the main entry point for parsing. It creates a parser instance,
/// registers the statement handlers and parses one program. The first
/// error ends the run; no partial output is returned.
pub fn parse(tokens: Vec<Token>, file: Rc<String>) -> Result<CompiledProgram, Error> {
    let lexemes = lexeme_list(&tokens);

    let mut parser = Parser::new(tokens, file);
    create_token_lookups(&mut parser);

    parse_program(&mut parser)?;

    Ok(CompiledProgram {
        code: parser.assembly.into_instructions(),
        symbols: parser.symbols,
        lexemes,
    })
}
