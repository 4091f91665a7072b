#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::{
    codegen::instruction::Instruction,
    errors::errors::{Error, ErrorTip},
    lexer::lexer::tokenize_with_mode,
    options::CompilerOptions,
    parser::parser::parse,
    symbols::symbol_table::SymbolTable,
};

pub mod codegen;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod options;
pub mod parser;
pub mod symbols;

extern crate regex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub u32, pub Rc<String>);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Everything a single compilation run hands to the presentation layer.
#[derive(Debug, Clone)]
pub struct CompiledProgram {
    pub code: Vec<Instruction>,
    pub symbols: SymbolTable,
    pub lexemes: String,
}

/// Compiles PL/0 source text into P-code and its symbol table.
///
/// Runs the tokenizer and the one-pass parser/code generator. The first
/// error stops the run and nothing partial is returned.
pub fn compile(
    source: String,
    file: Option<String>,
    options: &CompilerOptions,
) -> Result<CompiledProgram, Error> {
    let file_name = Rc::new(file.unwrap_or_else(|| String::from("shell")));

    let tokens = tokenize_with_mode(source, Some(file_name.to_string()), options.lex_mode)?;
    log::debug!("tokenized {} into {} tokens", file_name, tokens.len());

    let program = parse(tokens, Rc::clone(&file_name))?;
    log::debug!(
        "compiled {} into {} instructions and {} symbols",
        file_name,
        program.code.len(),
        program.symbols.len()
    );

    Ok(program)
}

/// Finds the line containing the byte offset `position`.
///
/// Returns the 1-based line number, the line text and the offset inside
/// that line, or `None` when the position lies past the end of `content`.
pub fn get_line_at_position(content: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    // Errors at end of input point just past the last character.
    if pos > content.len() || content.is_empty() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in content.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) || (end == content.len() && pos == end) {
            let line_pos = pos - start;
            return Some((line_number, line.to_string(), line_pos));
        }

        start = end;
        line_number += 1;
    }

    None
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::{
        errors::errors::{Error, ErrorImpl},
        Position,
    };

    #[test]
    fn test_get_line_at_position() {
        let content = "Hello, world!\nvar x;\n\nTesting { }\n";

        let (line_number, line, line_pos) = super::get_line_at_position(content, 10).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = super::get_line_at_position(content, 30).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line, "Testing { }\n");
        assert_eq!(line_pos, 8);
    }

    #[test]
    fn test_get_line_at_end_of_input() {
        let (line_number, line, line_pos) = super::get_line_at_position("begin end", 9).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "begin end");
        assert_eq!(line_pos, 9);

        assert!(super::get_line_at_position("end", 42).is_none());
    }

    #[test]
    fn test_format_error_points_at_token() {
        let source = "var x;\n  begin y := 1 end.\n";
        let error = Error::new(
            ErrorImpl::NotDeclared {
                identifier: String::from("y"),
            },
            Position(15, Rc::new(String::from("test.pl0"))),
        );

        let rendered = super::format_error(&error, source, "test.pl0");
        let lines = rendered.lines().collect::<Vec<&str>>();

        assert_eq!(lines[0], "Error: NotDeclared (Identifier `y` has not been declared)");
        assert_eq!(lines[1], "-> test.pl0");
        assert_eq!(lines[3], "2 | begin y := 1 end.");
        assert_eq!(lines[4], "  | ------^");
        assert!(rendered.ends_with("^\n"));
    }

    #[test]
    fn test_format_error_outside_source() {
        let error = Error::new(
            ErrorImpl::InvalidLexeme {
                lexeme: String::from("$"),
            },
            Position(42, Rc::new(String::from("test.pl0"))),
        );

        let rendered = super::format_error(&error, "end", "test.pl0");

        assert_eq!(
            rendered,
            "Error: InvalidLexeme\n-> test.pl0\ninvalid lexeme: \"$\"\n"
        );
    }
}

/// Renders an error with the offending source line underneath it.
///
/// ```text
/// Error: NotDeclared (Identifier `y` has not been declared)
/// -> test.pl0
///   |
/// 2 | begin y := 1 end.
///   | ------^
/// ```
pub fn format_error(error: &Error, source: &str, file: &str) -> String {
    let mut lines = vec![];

    if let ErrorTip::None = error.get_tip() {
        lines.push(format!("Error: {}", error.get_error_name()));
    } else {
        lines.push(format!("Error: {} ({})", error.get_error_name(), error.get_tip()));
    }
    lines.push(format!("-> {}", file));

    let position = error.get_position();
    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.0) else {
        lines.push(error.to_string());
        return lines.join("\n") + "\n";
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    lines.push(format!("{:>padding$}", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    lines.push(format!("{} | {}", line_string, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    lines.push(format!("{:>padding$} {:->arrows$}", "|", "^"));

    lines.join("\n") + "\n"
}

pub fn display_error(error: &Error, source: &str, file: &str) {
    print!("{}", format_error(error, source, file));
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
