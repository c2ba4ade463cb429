use diagnostics::{Category, DiagnosticSink, Diagnostics};
use lexer::{token::Token, Lexer};
use parser::Parser;
use symbol_table::SymbolTable;

pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod report;
pub mod symbol_table;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Clean,
    SyntaxErrors,
    LexicalErrors,
}

/// Everything one run of the front end produced.
#[derive(Debug)]
pub struct Analysis {
    pub tokens: Vec<Token>,
    pub symbols: SymbolTable,
    pub diagnostics: Diagnostics,
    /// False when lexical errors stopped the run before recognition.
    pub parsed: bool,
}

impl Analysis {
    pub fn outcome(&self) -> Outcome {
        if self.diagnostics.count(Category::Lexical) > 0 {
            Outcome::LexicalErrors
        } else if self.diagnostics.has_any() {
            Outcome::SyntaxErrors
        } else {
            Outcome::Clean
        }
    }
}

/// Tokenizes `input` and, if that produced no lexical errors, recognizes it.
pub fn analyze(input: &str) -> Analysis {
    let mut diagnostics = Diagnostics::new();
    let mut symbols = SymbolTable::new();

    let tokens = Lexer::new(input, &mut diagnostics).tokenize();

    let parsed = if diagnostics.has_any() {
        tracing::info!(
            "{} lexical errors, skipping syntax analysis",
            diagnostics.len()
        );
        false
    } else {
        Parser::new(&tokens, &mut symbols, &mut diagnostics).run();
        true
    };

    Analysis {
        tokens,
        symbols,
        diagnostics,
        parsed,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_clean_run() {
        let analysis = analyze("x = 5\nprint(x)");

        assert!(analysis.parsed);
        assert_eq!(analysis.outcome(), Outcome::Clean);
        assert_eq!(
            analysis.symbols.get("x").map(|e| e.usage_lines.clone()),
            Some(vec![2])
        );
    }

    #[test]
    fn test_lexical_errors_block_recognition() {
        let analysis = analyze("x = 5\ny = z\n'open");

        assert!(!analysis.parsed);
        assert_eq!(analysis.outcome(), Outcome::LexicalErrors);
        assert!(analysis.symbols.is_empty());
        assert_eq!(analysis.diagnostics.len(), 1);
    }

    #[test]
    fn test_syntax_errors_keep_partial_table() {
        let analysis = analyze("x = 5\ny = z");

        assert!(analysis.parsed);
        assert_eq!(analysis.outcome(), Outcome::SyntaxErrors);
        assert_eq!(analysis.symbols.len(), 2);
    }
}
