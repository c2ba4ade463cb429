use super::TokenCursor;
use crate::lexer::token::TokenType;

/// Token types that usually begin a statement.
pub const STATEMENT_STARTERS: [TokenType; 6] = [
    TokenType::KIf,
    TokenType::KWhile,
    TokenType::KFor,
    TokenType::KPrint,
    TokenType::KInput,
    TokenType::Identifier,
];

/// Panic-mode recovery: discards tokens until the next one is in `safe` or is
/// the end token. The stopping token is left in place.
///
/// Returns how many tokens were discarded.
pub(crate) fn synchronize(tokens: &mut TokenCursor<'_>, safe: &[TokenType]) -> usize {
    let mut skipped = 0;
    while let Some(token) = tokens.peek() {
        if token.tok_type == TokenType::EOF || safe.contains(&token.tok_type) {
            break;
        }
        tokens.next();
        skipped += 1;
    }
    skipped
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::diagnostics::Diagnostics;
    use crate::lexer::token::Token;
    use crate::lexer::Lexer;
    use multipeek::multipeek;

    fn tokenize(input: &str) -> Vec<Token> {
        let mut diags = Diagnostics::new();
        Lexer::new(input, &mut diags).tokenize()
    }

    #[test]
    fn test_stops_at_statement_starter_without_consuming_it() {
        let tokens = tokenize(") + 3 ] print(x)");
        let mut cursor = multipeek(tokens.iter());

        let skipped = synchronize(&mut cursor, &STATEMENT_STARTERS);

        assert_eq!(skipped, 4);
        assert_eq!(
            cursor.peek().map(|t| t.tok_type),
            Some(TokenType::KPrint)
        );
    }

    #[test]
    fn test_stops_at_end_token() {
        let tokens = tokenize(": ) 1 2");
        let mut cursor = multipeek(tokens.iter());

        assert_eq!(synchronize(&mut cursor, &STATEMENT_STARTERS), 4);
        assert_eq!(cursor.peek().map(|t| t.tok_type), Some(TokenType::EOF));

        // already at a boundary: nothing moves
        assert_eq!(synchronize(&mut cursor, &STATEMENT_STARTERS), 0);
    }

    #[test]
    fn test_custom_safe_set() {
        let tokens = tokenize("a b : c");
        let mut cursor = multipeek(tokens.iter());

        assert_eq!(synchronize(&mut cursor, &[TokenType::Colon]), 2);
        assert_eq!(cursor.peek().map(|t| t.lexeme.as_str()), Some(":"));
    }

    #[test]
    fn test_empty_sequence() {
        let tokens: Vec<Token> = Vec::new();
        let mut cursor = multipeek(tokens.iter());
        assert_eq!(synchronize(&mut cursor, &STATEMENT_STARTERS), 0);
    }
}
