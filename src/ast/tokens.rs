use std::fmt;

use crate::ast::FieldKey;

/// A lexical token.
///
/// Tokens carry their decoded payload; operators and punctuation carry
/// nothing since their text is fixed.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Field access
    /// Field key introduced by `$`
    ///
    /// Only three field names exist.
    ///
    /// # Examples
    /// ```text
    /// $key
    /// $value
    /// $type
    /// ```
    FieldKey(FieldKey),

    // Literals
    /// String literal, quoted or bare
    ///
    /// Quoted strings end at the next occurrence of the opening quote and are
    /// taken verbatim; there are no escape sequences. Bare words consist of
    /// ASCII letters, digits and underscores.
    ///
    /// # Examples
    /// ```text
    /// "hello world"
    /// 'say "hi"'
    /// name
    /// item_2
    /// ```
    String(String),

    /// Number literal
    ///
    /// # Examples
    /// ```text
    /// 42
    /// -1.5
    /// .5
    /// +3
    /// ```
    Number(f64),

    /// Boolean keyword
    ///
    /// # Examples
    /// ```text
    /// true
    /// false
    /// ```
    Boolean(bool),

    /// The `null` keyword
    Null,

    // Operators
    /// Logical AND (`&`)
    ///
    /// # Examples
    /// ```text
    /// $key: id & $type: number
    /// ```
    And,

    /// Logical OR (`|`)
    ///
    /// # Examples
    /// ```text
    /// $value: draft | $value: review
    /// ```
    Or,

    /// Logical NOT (`!`)
    ///
    /// Negates everything that follows it within the enclosing group.
    ///
    /// # Examples
    /// ```text
    /// !$type: null
    /// !(a | b) & c
    /// ```
    Not,

    // Punctuation
    /// Separates a field key from its target (`:`)
    Colon,

    /// Left parenthesis
    LParen,

    /// Right parenthesis
    RParen,
}

impl Token {
    /// The payload-free kind of this token, used in diagnostics.
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::FieldKey(_) => TokenKind::FieldKey,
            Token::String(_) => TokenKind::StringLiteral,
            Token::Number(_) => TokenKind::NumberLiteral,
            Token::Boolean(_) => TokenKind::BooleanLiteral,
            Token::Null => TokenKind::NullLiteral,
            Token::And => TokenKind::AndOperator,
            Token::Or => TokenKind::OrOperator,
            Token::Not => TokenKind::NotOperator,
            Token::Colon => TokenKind::Colon,
            Token::LParen => TokenKind::LeftParen,
            Token::RParen => TokenKind::RightParen,
        }
    }
}

/// Token kinds without payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    FieldKey,
    StringLiteral,
    BooleanLiteral,
    NullLiteral,
    NumberLiteral,
    AndOperator,
    OrOperator,
    NotOperator,
    Colon,
    LeftParen,
    RightParen,
}

impl TokenKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::FieldKey => "FieldKey",
            TokenKind::StringLiteral => "StringLiteral",
            TokenKind::BooleanLiteral => "BooleanLiteral",
            TokenKind::NullLiteral => "NullLiteral",
            TokenKind::NumberLiteral => "NumberLiteral",
            TokenKind::AndOperator => "AndOperator",
            TokenKind::OrOperator => "OrOperator",
            TokenKind::NotOperator => "NotOperator",
            TokenKind::Colon => "Colon",
            TokenKind::LeftParen => "LeftParen",
            TokenKind::RightParen => "RightParen",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
