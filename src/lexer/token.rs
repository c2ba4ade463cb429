use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Literal {
    Boolean,
    Float,
    Integer,
    String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    Colon,
    Comma,
    Dot,
    LBracket,
    LParen,
    RBracket,
    RParen,

    BangEq,
    EqEqual,
    Equal,
    Greater,
    GreaterEq,
    Lesser,
    LesserEq,
    Minus,
    Perc,
    Plus,
    Slash,
    Star,

    And,
    Not,
    Or,

    KElif,
    KElse,
    KFor,
    KIf,
    KInput,
    KPrint,
    KWhile,

    Literal(Literal),
    Identifier,

    Unknown,
    EOF,
}

impl Display for TokenType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenType::Colon => "COLON",
            TokenType::Comma => "COMMA",
            TokenType::Dot => "DOT",
            TokenType::LBracket => "LBRACKET",
            TokenType::LParen => "LPAREN",
            TokenType::RBracket => "RBRACKET",
            TokenType::RParen => "RPAREN",

            TokenType::BangEq => "NOT_EQUAL",
            TokenType::EqEqual => "EQUAL_EQUAL",
            TokenType::Equal => "ASSIGN",
            TokenType::Greater => "GREATER_THAN",
            TokenType::GreaterEq => "GREATER_EQUAL",
            TokenType::Lesser => "LESS_THAN",
            TokenType::LesserEq => "LESS_EQUAL",
            TokenType::Minus => "MINUS",
            TokenType::Perc => "MODULO",
            TokenType::Plus => "PLUS",
            TokenType::Slash => "DIVIDE",
            TokenType::Star => "MULTIPLY",

            TokenType::And => "AND",
            TokenType::Not => "NOT",
            TokenType::Or => "OR",

            TokenType::KElif => "ELIF",
            TokenType::KElse => "ELSE",
            TokenType::KFor => "FOR",
            TokenType::KIf => "IF",
            TokenType::KInput => "INPUT",
            TokenType::KPrint => "PRINT",
            TokenType::KWhile => "WHILE",

            TokenType::Literal(Literal::Boolean) => "BOOLEAN_LITERAL",
            TokenType::Literal(Literal::Float) => "FLOAT_LITERAL",
            TokenType::Literal(Literal::Integer) => "INTEGER_LITERAL",
            TokenType::Literal(Literal::String) => "STRING_LITERAL",
            TokenType::Identifier => "IDENTIFIER",

            TokenType::Unknown => "UNKNOWN",
            TokenType::EOF => "END_OF_FILE",
        };
        f.write_str(name)
    }
}

/// A classified slice of source text. `line` and `column` are 1-based and
/// point at the first character of `lexeme`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub tok_type: TokenType,
    pub lexeme: String,
    pub line: usize,
    pub column: usize,
}

impl Token {
    pub fn new(tok_type: TokenType, lexeme: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            tok_type,
            lexeme: lexeme.into(),
            line,
            column,
        }
    }

    /// Lexeme as it should appear in messages.
    pub fn display_lexeme(&self) -> &str {
        match self.tok_type {
            TokenType::EOF => "<eof>",
            _ => &self.lexeme,
        }
    }
}
