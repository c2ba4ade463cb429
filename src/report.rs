use crate::lexer::token::Token;
use crate::symbol_table::SymbolTable;
use std::fmt::Write;

const TOKEN_RULE: usize = 60;
const SYMBOL_RULE: usize = 85;

/// Lexemes and tokens table, one row per token.
pub fn token_table(tokens: &[Token]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<20}{:<20}{:<10}{:<10}",
        "Lexeme", "Token Type", "Line", "Column"
    );
    let _ = writeln!(out, "{}", "-".repeat(TOKEN_RULE));
    for token in tokens {
        let _ = writeln!(
            out,
            "{:<20}{:<20}{:<10}{:<10}",
            token.lexeme,
            token.tok_type.to_string(),
            token.line,
            token.column
        );
    }
    let _ = write!(out, "{}", "-".repeat(TOKEN_RULE));
    out
}

/// Symbol table contents in insertion order.
pub fn symbol_table(table: &SymbolTable) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<15}{:<10}{:<8}{:<12}{:<20}{:<20}",
        "Name", "Type", "Size", "Dimension", "Decl. Line", "Usage Lines"
    );
    let _ = writeln!(out, "{}", "-".repeat(SYMBOL_RULE));
    for entry in table.entries() {
        let usages = entry
            .usage_lines
            .iter()
            .map(|line| line.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(
            out,
            "{:<15}{:<10}{:<8}{:<12}{:<20}{:<20}",
            entry.name,
            entry.data_type.to_string(),
            entry.size,
            entry.dimension,
            entry.declaration_line,
            usages
        );
    }
    let _ = write!(out, "{}", "-".repeat(SYMBOL_RULE));
    out
}
