use colored::Colorize;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Lexical,
    Syntax,
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Lexical => write!(f, "Lexical"),
            Category::Syntax => write!(f, "Syntax"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub message: String,
    pub line: usize,
    pub column: usize,
    pub category: Category,
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} Error at Line {}, Column {}: {}",
            self.category, self.line, self.column, self.message
        )
    }
}

/// Receiver for the errors produced while tokenizing and recognizing.
///
/// The lexer and parser only ever write through this trait, so callers own
/// the sink and read it back once a run is over.
pub trait DiagnosticSink {
    fn report(&mut self, message: String, line: usize, column: usize, category: Category);

    fn has_any(&self) -> bool;
}

/// Diagnostics kept in the order they were reported.
#[derive(Debug, Default)]
pub struct Diagnostics {
    errors: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.errors.iter()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn count(&self, category: Category) -> usize {
        self.errors
            .iter()
            .filter(|err| err.category == category)
            .count()
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    pub fn print_all(&self) {
        if self.errors.is_empty() {
            return;
        }

        eprintln!("\n{}", "--- Errors Encountered ---".red().bold());
        for err in &self.errors {
            eprintln!("{}", err.to_string().red());
        }
        eprintln!("{}", "-".repeat(26).red());
    }
}

impl DiagnosticSink for Diagnostics {
    fn report(&mut self, message: String, line: usize, column: usize, category: Category) {
        tracing::trace!("{category} error reported at {line}:{column}: {message}");
        self.errors.push(Diagnostic {
            message,
            line,
            column,
            category,
        });
    }

    fn has_any(&self) -> bool {
        !self.errors.is_empty()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_reports_keep_arrival_order() {
        let mut diags = Diagnostics::new();
        assert!(!diags.has_any());

        diags.report("first".to_string(), 1, 4, Category::Lexical);
        diags.report("second".to_string(), 3, 1, Category::Syntax);

        assert!(diags.has_any());
        let messages = diags.iter().map(|d| d.message.as_str()).collect::<Vec<_>>();
        assert_eq!(messages, vec!["first", "second"]);
        assert_eq!(diags.count(Category::Lexical), 1);
        assert_eq!(diags.count(Category::Syntax), 1);
    }

    #[test]
    fn test_clear_resets_state() {
        let mut diags = Diagnostics::new();
        diags.report("oops".to_string(), 2, 2, Category::Syntax);
        diags.clear();

        assert!(!diags.has_any());
        assert!(diags.is_empty());
    }

    #[test]
    fn test_display_format() {
        let diag = Diagnostic {
            message: "Undeclared identifier: y".to_string(),
            line: 1,
            column: 5,
            category: Category::Syntax,
        };
        assert_eq!(
            diag.to_string(),
            "Syntax Error at Line 1, Column 5: Undeclared identifier: y"
        );
    }
}
