pub mod recovery;


use std::borrow::Cow;

use crate::diagnostics::{Category, DiagnosticSink};
use crate::lexer::token::{Literal, Token, TokenType};
use crate::symbol_table::{DataType, SymbolTable};
use multipeek::{multipeek, MultiPeek};
use recovery::STATEMENT_STARTERS;
use thiserror::Error;

// <program>     ::= ( <statement> )* <eof>
// <statement>   ::= <conditional> | <iterative> | <print> | <input>
//                 | <identifier> "=" <expr> | <expr>
// <conditional> ::= "if" <expr> ":" <statement>
//                   ( "elif" <expr> ":" <statement> )* ( "else" ":" <statement> )?
// <iterative>   ::= "while" <expr> ":" <statement> | "for" <identifier> ...
// <print>       ::= "print" "(" <expr> ")"
// <input>       ::= "input" "(" <string>? ")"
// <expr>        ::= <comparison> ( ( "and" | "or" ) <comparison> )*
// <comparison>  ::= <arith> ( ( "==" | "!=" | "<" | "<=" | ">" | ">=" ) <arith> )*
// <arith>       ::= <term> ( ( "+" | "-" ) <term> )*
// <term>        ::= <factor> ( ( "*" | "/" | "%" ) <factor> )*
// <factor>      ::= ( "+" | "-" | "not" )? <primary>
// <primary>     ::= <literal> | <identifier> | "(" <expr> ")" | <input>

macro_rules! parse_binary_expr {
    ( $self: ident, $ops: pat, $nextp: ident ) => {{
        $self.$nextp()?;
        while let $ops = $self.current_type() {
            $self.advance();
            $self.$nextp()?;
        }
        Ok(())
    }};
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorType {
    #[error("Expected {exp} but found '{got}' (type: {got_type})")]
    Expected {
        exp: TokenType,
        got: String,
        got_type: TokenType,
    },

    #[error("Expected an expression, literal, identifier, '(', or 'input()' call, but found '{0}'")]
    ExpectedExpression(String),

    #[error("Simple 'for' loop syntax `for IDENTIFIER in ITERABLE` not fully implemented. Expected 'in' followed by iterable.")]
    ForLoopUnsupported,

    #[error("Undeclared identifier: {0}")]
    UndeclaredIdentifier(String),

    #[error("Unexpected token at start of statement: '{0}'")]
    UnexpectedStatementStart(String),
}

/// Returned once a syntax error has been reported and the token cursor has
/// been moved to the next statement boundary.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("recovered from syntax error")]
pub struct Recovered;

pub type ParseResult<T> = Result<T, Recovered>;

pub(crate) type TokenCursor<'a> = MultiPeek<std::slice::Iter<'a, Token>>;

/// Recursive-descent recognizer.
///
/// Validates the token sequence without building a tree. Assigned and
/// referenced names are tracked in the symbol table, and every violation is
/// written to the diagnostics sink.
pub struct Parser<'a> {
    tokens: TokenCursor<'a>,
    symbols: &'a mut SymbolTable,
    diagnostics: &'a mut dyn DiagnosticSink,
    sync_set: Vec<TokenType>,
    end: (usize, usize),
}

impl<'a> Parser<'a> {
    pub fn new(
        tokens: &'a [Token],
        symbols: &'a mut SymbolTable,
        diagnostics: &'a mut dyn DiagnosticSink,
    ) -> Self {
        let end = tokens
            .last()
            .map(|token| (token.line, token.column))
            .unwrap_or((1, 1));

        Self {
            tokens: multipeek(tokens.iter()),
            symbols,
            diagnostics,
            sync_set: STATEMENT_STARTERS.to_vec(),
            end,
        }
    }

    /// Replaces the token types resynchronization stops at.
    pub fn with_sync_set(mut self, safe: &[TokenType]) -> Self {
        self.sync_set = safe.to_vec();
        self
    }

    fn current(&mut self) -> Option<&'a Token> {
        self.tokens.peek().copied()
    }

    fn current_type(&mut self) -> TokenType {
        self.current()
            .map_or(TokenType::EOF, |token| token.tok_type)
    }

    fn current_position(&mut self) -> (usize, usize) {
        self.current()
            .map_or(self.end, |token| (token.line, token.column))
    }

    fn current_lexeme(&mut self) -> String {
        self.current()
            .map_or("<eof>", |token| token.display_lexeme())
            .to_string()
    }

    fn peek_next_type(&mut self) -> TokenType {
        self.tokens
            .peek_nth(1)
            .map_or(TokenType::EOF, |token| token.tok_type)
    }

    /// Moves past the current token. The end token is never stepped over.
    fn advance(&mut self) -> Option<&'a Token> {
        match self.current() {
            Some(token) if token.tok_type != TokenType::EOF => self.tokens.next(),
            other => other,
        }
    }

    fn check(&mut self, tok_type: TokenType) -> bool {
        self.current_type() == tok_type
    }

    fn consume(&mut self, tok_type: TokenType) -> Cow<'a, Token> {
        match self.current() {
            Some(token) if token.tok_type == tok_type => {
                self.advance();
                Cow::Borrowed(token)
            }
            current => {
                let (line, column) = self.current_position();
                let got = current.map_or("<eof>", |token| token.display_lexeme());
                let got_type = current.map_or(TokenType::EOF, |token| token.tok_type);

                self.error_at(
                    line,
                    column,
                    ParseErrorType::Expected {
                        exp: tok_type,
                        got: got.to_string(),
                        got_type,
                    },
                );
                self.advance();
                Cow::Owned(Token::new(TokenType::Unknown, "ERROR", line, column))
            }
        }
    }

    fn error_at(&mut self, line: usize, column: usize, error: ParseErrorType) {
        self.diagnostics
            .report(error.to_string(), line, column, Category::Syntax);
    }

    fn synchronize(&mut self) {
        let skipped = recovery::synchronize(&mut self.tokens, &self.sync_set);
        tracing::debug!(
            "resynchronized at {:?} after discarding {skipped} tokens",
            self.current_position()
        );
    }

    /// Bails out of the current rule if anything has been reported so far.
    fn checkpoint(&mut self) -> ParseResult<()> {
        if self.diagnostics.has_any() {
            self.synchronize();
            Err(Recovered)
        } else {
            Ok(())
        }
    }

    fn bail<T>(&mut self, error: ParseErrorType) -> ParseResult<T> {
        let (line, column) = self.current_position();
        self.error_at(line, column, error);
        self.synchronize();
        Err(Recovered)
    }

    fn declare(&mut self, name: &Token) {
        if self.symbols.search(&name.lexeme).is_none() {
            self.symbols
                .insert(&name.lexeme, DataType::Dynamic, 0, 0, name.line);
        } else {
            self.symbols.add_line_of_usage(&name.lexeme, name.line);
        }
    }

    fn reference(&mut self, name: &Token) {
        if self.symbols.search(&name.lexeme).is_none() {
            self.error_at(
                name.line,
                name.column,
                ParseErrorType::UndeclaredIdentifier(name.lexeme.clone()),
            );
        } else {
            self.symbols.add_line_of_usage(&name.lexeme, name.line);
        }
    }
}

impl<'a> Parser<'a> {
    /// Recognizes the whole token sequence. Success or failure is read back
    /// from the diagnostics sink.
    pub fn run(&mut self) {
        tracing::info!("starting syntax analysis");
        self.program();

        if self.diagnostics.has_any() {
            tracing::info!("syntax analysis completed with errors");
        } else {
            tracing::info!("syntax analysis completed successfully");
        }
    }

    fn program(&mut self) {
        while !self.check(TokenType::EOF) && !self.diagnostics.has_any() {
            if self.statement().is_err() {
                break;
            }
        }
    }

    fn statement(&mut self) -> ParseResult<()> {
        tracing::trace!("statement at {:?}", self.current_position());

        match self.current_type() {
            TokenType::KIf => self.conditional(),
            TokenType::KWhile | TokenType::KFor => self.iterative(),
            TokenType::KPrint => self.print_statement(),
            TokenType::KInput => self.input_call(),
            TokenType::Identifier if self.peek_next_type() == TokenType::Equal => {
                self.assignment()
            }
            TokenType::Identifier => self.expression(),
            _ => {
                let got = self.current_lexeme();
                self.bail(ParseErrorType::UnexpectedStatementStart(got))
            }
        }
    }

    fn assignment(&mut self) -> ParseResult<()> {
        let target = self.consume(TokenType::Identifier);
        self.checkpoint()?;

        self.declare(&target);

        self.consume(TokenType::Equal);
        self.checkpoint()?;

        self.expression()
    }

    fn conditional(&mut self) -> ParseResult<()> {
        self.consume(TokenType::KIf);
        self.checkpoint()?;
        self.expression()?;
        self.consume(TokenType::Colon);
        self.checkpoint()?;
        self.statement()?;

        while self.check(TokenType::KElif) {
            self.consume(TokenType::KElif);
            self.checkpoint()?;
            self.expression()?;
            self.consume(TokenType::Colon);
            self.checkpoint()?;
            self.statement()?;
        }

        if self.check(TokenType::KElse) {
            self.consume(TokenType::KElse);
            self.checkpoint()?;
            self.consume(TokenType::Colon);
            self.checkpoint()?;
            self.statement()?;
        }

        Ok(())
    }

    fn iterative(&mut self) -> ParseResult<()> {
        if self.check(TokenType::KWhile) {
            self.consume(TokenType::KWhile);
            self.checkpoint()?;
            self.expression()?;
            self.consume(TokenType::Colon);
            self.checkpoint()?;
            return self.statement();
        }

        self.consume(TokenType::KFor);
        self.checkpoint()?;
        let loop_var = self.consume(TokenType::Identifier);
        self.checkpoint()?;

        self.declare(&loop_var);

        // `in <iterable>` is not supported, every for loop ends here
        self.bail(ParseErrorType::ForLoopUnsupported)
    }

    fn print_statement(&mut self) -> ParseResult<()> {
        self.consume(TokenType::KPrint);
        self.checkpoint()?;
        self.consume(TokenType::LParen);
        self.checkpoint()?;
        self.expression()?;
        self.consume(TokenType::RParen);
        self.checkpoint()
    }

    fn input_call(&mut self) -> ParseResult<()> {
        self.consume(TokenType::KInput);
        self.checkpoint()?;
        self.consume(TokenType::LParen);
        self.checkpoint()?;
        if self.check(TokenType::Literal(Literal::String)) {
            self.advance();
        }
        self.consume(TokenType::RParen);
        self.checkpoint()
    }
}

impl<'a> Parser<'a> {
    // Expression ladder, loosest binding first

    fn expression(&mut self) -> ParseResult<()> {
        parse_binary_expr!(self, TokenType::And | TokenType::Or, comparison)
    }

    fn comparison(&mut self) -> ParseResult<()> {
        parse_binary_expr!(
            self,
            TokenType::EqEqual
                | TokenType::BangEq
                | TokenType::Lesser
                | TokenType::LesserEq
                | TokenType::Greater
                | TokenType::GreaterEq,
            arith
        )
    }

    fn arith(&mut self) -> ParseResult<()> {
        parse_binary_expr!(self, TokenType::Plus | TokenType::Minus, term)
    }

    fn term(&mut self) -> ParseResult<()> {
        parse_binary_expr!(
            self,
            TokenType::Star | TokenType::Slash | TokenType::Perc,
            factor
        )
    }

    fn factor(&mut self) -> ParseResult<()> {
        if let TokenType::Plus | TokenType::Minus | TokenType::Not = self.current_type() {
            self.advance();
        }

        match self.current_type() {
            TokenType::Literal(_) => {
                self.advance();
                Ok(())
            }
            TokenType::Identifier => {
                let name = self.consume(TokenType::Identifier);
                self.reference(&name);
                Ok(())
            }
            TokenType::LParen => {
                self.consume(TokenType::LParen);
                self.checkpoint()?;
                self.expression()?;
                self.consume(TokenType::RParen);
                self.checkpoint()
            }
            TokenType::KInput => self.input_call(),
            _ => {
                let got = self.current_lexeme();
                self.bail(ParseErrorType::ExpectedExpression(got))
            }
        }
    }
}
