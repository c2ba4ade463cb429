pub mod token;


use crate::diagnostics::{Category, DiagnosticSink};
use lazy_static::lazy_static;
use std::collections::HashMap;
use std::str::Chars;
use thiserror::Error;
use token::{Literal, Token, TokenType};

macro_rules! hash_map {
    ( $( $key: expr => $value: expr ),* $(,)? ) => {{
        let mut m = HashMap::new();
        $(
            m.insert($key, $value);
        )*
        m
    }}
}

macro_rules! multi_char_tok {
    ( $self: ident, $orig: expr; $( $c: literal => $tt: expr ),+ $(,)? ) => {
        match $self.peek() {
            $(
                Some($c) => {
                    $self.advance();
                    $self.make_token($tt)
                }
            )+
            _ => $self.make_token($orig),
        }
    };
}

lazy_static! {
    static ref KEYWORDS: HashMap<&'static str, TokenType> = hash_map! {
        "False" => TokenType::Literal(Literal::Boolean),
        "True"  => TokenType::Literal(Literal::Boolean),
        "and"   => TokenType::And,
        "elif"  => TokenType::KElif,
        "else"  => TokenType::KElse,
        "for"   => TokenType::KFor,
        "if"    => TokenType::KIf,
        "input" => TokenType::KInput,
        "not"   => TokenType::Not,
        "or"    => TokenType::Or,
        "print" => TokenType::KPrint,
        "while" => TokenType::KWhile,
    };
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexerErrorType {
    #[error("Unterminated string literal")]
    UnterminatedString,

    #[error("Unexpected character: '{0}'")]
    UnexpectedChar(char),
}

/// Single pass tokenizer.
///
/// Errors never stop the scan: they are written to the diagnostics sink and
/// an `Unknown` token stands in for the offending text.
pub struct Lexer<'a> {
    input_str: &'a str,
    input: Chars<'a>,
    diagnostics: &'a mut dyn DiagnosticSink,
    line: usize,
    column: usize,
    start: usize,
    start_line: usize,
    start_column: usize,
    current: usize,
    eof: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(input_str: &'a str, diagnostics: &'a mut dyn DiagnosticSink) -> Self {
        Self {
            input_str,
            input: input_str.chars(),
            diagnostics,
            line: 1,
            column: 1,
            start: 0,
            start_line: 1,
            start_column: 1,
            current: 0,
            eof: false,
        }
    }

    /// Number of characters consumed so far.
    pub fn position(&self) -> usize {
        self.current
    }

    fn peek(&self) -> Option<char> {
        self.input.clone().next()
    }

    fn peek_next(&self) -> Option<char> {
        let mut iter = self.input.clone();
        iter.next();
        iter.next()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.input.next()?;
        self.current += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn offset(&self) -> usize {
        self.input_str.len() - self.input.as_str().len()
    }

    fn get_lexeme(&self) -> &'a str {
        &self.input_str[self.start..self.offset()]
    }

    fn make_token(&self, tok_type: TokenType) -> Token {
        Token::new(
            tok_type,
            self.get_lexeme(),
            self.start_line,
            self.start_column,
        )
    }

    fn error(&mut self, error: LexerErrorType) -> Token {
        self.diagnostics.report(
            error.to_string(),
            self.start_line,
            self.start_column,
            Category::Lexical,
        );
        self.make_token(TokenType::Unknown)
    }

    fn skip_whitespace(&mut self) {
        loop {
            match self.peek() {
                Some(' ' | '\t' | '\r' | '\n') => {
                    self.advance();
                }
                Some('#') => {
                    while let Some(c) = self.peek() {
                        if c == '\n' {
                            break;
                        }
                        self.advance();
                    }
                }
                _ => break,
            };
        }
    }

    fn number(&mut self) -> Token {
        while let Some('0'..='9') = self.peek() {
            self.advance();
        }

        match (self.peek(), self.peek_next()) {
            (Some('.'), Some('0'..='9')) => {
                self.advance();
                while let Some('0'..='9') = self.peek() {
                    self.advance();
                }
                self.make_token(TokenType::Literal(Literal::Float))
            }
            _ => self.make_token(TokenType::Literal(Literal::Integer)),
        }
    }

    fn string(&mut self, quote: char) -> Token {
        loop {
            match self.peek() {
                None | Some('\n') => return self.error(LexerErrorType::UnterminatedString),
                Some(c) if c == quote => {
                    self.advance();
                    break;
                }
                Some(_) => {
                    self.advance();
                }
            };
        }
        self.make_token(TokenType::Literal(Literal::String))
    }

    fn identifier(&mut self) -> Token {
        loop {
            match self.peek() {
                Some(c) if c == '_' || c.is_ascii_alphanumeric() => self.advance(),
                _ => break,
            };
        }
        let lexeme = self.get_lexeme();

        match KEYWORDS.get(lexeme) {
            Some(ttype) => self.make_token(*ttype),
            None => self.make_token(TokenType::Identifier),
        }
    }
}

impl<'a> Lexer<'a> {
    /// Scans the whole input. The returned sequence always ends with a single
    /// `EOF` token.
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        while !self.eof {
            tokens.push(self.next_token());
        }
        tracing::debug!(
            "tokenized {} characters into {} tokens",
            self.current,
            tokens.len()
        );
        tokens
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        self.start = self.offset();
        self.start_line = self.line;
        self.start_column = self.column;

        let Some(c) = self.advance() else {
            self.eof = true;
            return self.make_token(TokenType::EOF);
        };

        match c {
            ',' => self.make_token(TokenType::Comma),
            ':' => self.make_token(TokenType::Colon),
            '.' => self.make_token(TokenType::Dot),
            '(' => self.make_token(TokenType::LParen),
            ')' => self.make_token(TokenType::RParen),
            '[' => self.make_token(TokenType::LBracket),
            ']' => self.make_token(TokenType::RBracket),
            '+' => self.make_token(TokenType::Plus),
            '-' => self.make_token(TokenType::Minus),
            '*' => self.make_token(TokenType::Star),
            '/' => self.make_token(TokenType::Slash),
            '%' => self.make_token(TokenType::Perc),

            '=' => multi_char_tok!(self, TokenType::Equal; '=' => TokenType::EqEqual),
            '<' => multi_char_tok!(self, TokenType::Lesser; '=' => TokenType::LesserEq),
            '>' => multi_char_tok!(self, TokenType::Greater; '=' => TokenType::GreaterEq),
            '!' => match self.peek() {
                Some('=') => {
                    self.advance();
                    self.make_token(TokenType::BangEq)
                }
                _ => self.error(LexerErrorType::UnexpectedChar('!')),
            },

            '\'' | '"' => self.string(c),

            c if c.is_ascii_digit() => self.number(),
            c if c == '_' || c.is_ascii_alphabetic() => self.identifier(),
            _ => self.error(LexerErrorType::UnexpectedChar(c)),
        }
    }
}
