//! Unit tests for the symbol table.

use super::symbol_table::{SymbolKind, SymbolTable};

#[test]
fn test_insert_returns_index() {
    let mut table = SymbolTable::new();

    assert_eq!(table.insert(SymbolKind::Procedure, "main", 0, 0, 3), 0);
    assert_eq!(table.insert(SymbolKind::Constant, "a", 5, 0, 0), 1);
    assert_eq!(table.insert(SymbolKind::Variable, "b", 0, 0, 3), 2);
    assert_eq!(table.len(), 3);
}

#[test]
fn test_insert_marks_active() {
    let mut table = SymbolTable::new();
    let index = table.insert(SymbolKind::Variable, "x", 0, 0, 4);
    let symbol = table.get(index).unwrap();

    assert_eq!(symbol.kind, SymbolKind::Variable);
    assert_eq!(symbol.name, "x");
    assert_eq!(symbol.address, 4);
    assert_eq!(symbol.level, 0);
    assert!(symbol.mark);
}

#[test]
fn test_lookup() {
    let mut table = SymbolTable::new();
    table.insert(SymbolKind::Constant, "a", 1, 0, 0);
    table.insert(SymbolKind::Variable, "b", 0, 0, 3);

    assert_eq!(table.lookup("a"), Some(0));
    assert_eq!(table.lookup("b"), Some(1));
    assert_eq!(table.lookup("c"), None);
}

#[test]
fn test_lookup_returns_first_match() {
    let mut table = SymbolTable::new();
    table.insert(SymbolKind::Constant, "a", 1, 0, 0);
    table.insert(SymbolKind::Variable, "a", 0, 0, 3);

    let index = table.lookup("a").unwrap();
    assert_eq!(index, 0);
    assert_eq!(table.get(index).unwrap().kind, SymbolKind::Constant);
}

#[test]
fn test_empty_table() {
    let table = SymbolTable::default();

    assert!(table.is_empty());
    assert!(table.get(0).is_none());
    assert_eq!(table.iter().count(), 0);
}

#[test]
fn test_kind_codes() {
    assert_eq!(SymbolKind::Constant.code(), 1);
    assert_eq!(SymbolKind::Variable.code(), 2);
    assert_eq!(SymbolKind::Procedure.code(), 3);
}
