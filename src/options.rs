//! Compiler configuration.

/// How the tokenizer treats lexemes that are neither keywords, operators,
/// numbers of at most five digits nor identifiers of at most eleven
/// lowercase letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexMode {
    /// Report the first malformed lexeme as a lexical error.
    #[default]
    Strict,
    /// Drop malformed lexemes without a token, as the classic PL/0 scanner did.
    Lenient,
}

#[derive(Debug, Clone, Default)]
pub struct CompilerOptions {
    pub lex_mode: LexMode,
}

impl CompilerOptions {
    pub fn lenient() -> Self {
        CompilerOptions {
            lex_mode: LexMode::Lenient,
        }
    }
}
