use std::fmt::Display;

use log::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    Constant,
    Variable,
    Procedure,
}

impl SymbolKind {
    /// The numeric kind shown in symbol table listings.
    pub fn code(&self) -> i32 {
        match self {
            SymbolKind::Constant => 1,
            SymbolKind::Variable => 2,
            SymbolKind::Procedure => 3,
        }
    }
}

impl Display for SymbolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SymbolKind::Constant => write!(f, "constant"),
            SymbolKind::Variable => write!(f, "variable"),
            SymbolKind::Procedure => write!(f, "procedure"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub kind: SymbolKind,
    pub name: String,
    /// Only meaningful for constants
    pub value: i32,
    /// Always 0 while procedures cannot nest
    pub level: i32,
    /// Frame offset of a variable or entry address of a procedure
    pub address: i32,
    /// Whether the entry is still visible; nothing clears it yet
    pub mark: bool,
}

/// Append-only table of every name declared during one compilation.
///
/// Lookups scan in insertion order and return the first match, so a name
/// is never shadowed. Duplicate checks are the caller's job.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    symbols: Vec<Symbol>,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable { symbols: vec![] }
    }

    /// Appends an active entry and returns its index.
    pub fn insert(
        &mut self,
        kind: SymbolKind,
        name: &str,
        value: i32,
        level: i32,
        address: i32,
    ) -> usize {
        trace!(
            "symbol {}: {} {} value={} level={} address={}",
            self.symbols.len(),
            kind,
            name,
            value,
            level,
            address
        );

        self.symbols.push(Symbol {
            kind,
            name: name.to_string(),
            value,
            level,
            address,
            mark: true,
        });

        self.symbols.len() - 1
    }

    pub fn lookup(&self, name: &str) -> Option<usize> {
        self.symbols.iter().position(|symbol| symbol.name == name)
    }

    pub fn get(&self, index: usize) -> Option<&Symbol> {
        self.symbols.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Symbol> {
        self.symbols.iter()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl<'a> IntoIterator for &'a SymbolTable {
    type Item = &'a Symbol;
    type IntoIter = std::slice::Iter<'a, Symbol>;

    fn into_iter(self) -> Self::IntoIter {
        self.symbols.iter()
    }
}
