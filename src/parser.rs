use std::fmt;

use log::{debug, trace};
use thiserror::Error;

use crate::{
    ast::{Expr, LogicalOp, Token, TokenKind},
    lexer::{self, LexError},
    value::Literal,
};

/// Nesting limit for groups, negations and field scopes.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// What the parser was looking for when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    Token(TokenKind),
    Expression,
    EndOfInput,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Token(kind) => write!(f, "{}", kind),
            Expected::Expression => f.write_str("expression"),
            Expected::EndOfInput => f.write_str("end of input"),
        }
    }
}

/// What the parser found instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Found {
    Token(TokenKind),
    EndOfInput,
}

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Found::Token(kind) => write!(f, "{}", kind),
            Found::EndOfInput => f.write_str("end of input"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error("expected {expected}, but found {found}")]
    Unexpected { expected: Expected, found: Found },

    #[error("expression nested deeper than {limit} levels")]
    TooDeep { limit: usize },
}

/// Lexes and parses a filter.
///
/// # Examples
///
/// ```
/// use sift_lang::{parse, Expr};
///
/// let expr = parse("a & b | c").unwrap();
/// assert_eq!(
///     expr,
///     Expr::and(Expr::value("a"), Expr::or(Expr::value("b"), Expr::value("c")))
/// );
/// ```
pub fn parse(source: &str) -> Result<Expr, ParseError> {
    let tokens = lexer::lex(source)?;
    let result = Parser::new(tokens).parse();
    match &result {
        Ok(expr) => trace!("parsed {:?}", expr),
        Err(e) => debug!("parse failed: {}", e),
    }
    result
}

pub struct Parser {
    tokens: Vec<Token>,
    position: usize,
    depth: usize,
    max_depth: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser {
            tokens,
            position: 0,
            depth: 0,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// `None` once every token has been consumed.
    fn current(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    fn found(&self) -> Found {
        match self.current() {
            Some(token) => Found::Token(token.kind()),
            None => Found::EndOfInput,
        }
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.position).cloned();
        self.position = (self.position + 1).min(self.tokens.len());
        token
    }

    fn expect(&mut self, kind: TokenKind) -> Result<(), ParseError> {
        if self.current().map(Token::kind) != Some(kind) {
            return Err(ParseError::Unexpected {
                expected: Expected::Token(kind),
                found: self.found(),
            });
        }
        self.advance();
        Ok(())
    }

    /// Parses a complete filter; every token must be consumed.
    pub fn parse(&mut self) -> Result<Expr, ParseError> {
        let expr = self.parse_expressions()?;
        if self.current().is_some() {
            return Err(ParseError::Unexpected {
                expected: Expected::EndOfInput,
                found: self.found(),
            });
        }
        Ok(expr)
    }

    /// `Exprs := Expr (('&' | '|') Exprs)?`
    ///
    /// Operands are collected in a loop and folded from the right, which
    /// yields the same tree as the recursive production without spending
    /// stack on long chains.
    fn parse_expressions(&mut self) -> Result<Expr, ParseError> {
        let head = self.parse_expression()?;

        let mut tail = Vec::new();
        while let Some(op) = self.current().and_then(LogicalOp::from_token) {
            self.advance();
            tail.push((op, self.parse_expression()?));
        }

        let Some((mut op, mut right)) = tail.pop() else {
            return Ok(head);
        };
        while let Some((prev_op, left)) = tail.pop() {
            right = op.join(left, right);
            op = prev_op;
        }
        Ok(op.join(head, right))
    }

    /// Parses everything that follows a prefix (`(`, `!`, `$field:`) one
    /// nesting level down.
    fn parse_nested(&mut self) -> Result<Expr, ParseError> {
        if self.depth >= self.max_depth {
            return Err(ParseError::TooDeep {
                limit: self.max_depth,
            });
        }
        self.depth += 1;
        let result = self.parse_expressions();
        self.depth -= 1;
        result
    }

    fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        let Some(token) = self.advance() else {
            return Err(ParseError::Unexpected {
                expected: Expected::Expression,
                found: Found::EndOfInput,
            });
        };

        match token {
            Token::LParen => {
                let expr = self.parse_nested()?;
                self.expect(TokenKind::RightParen)?;
                Ok(expr)
            }
            // Negates the whole remaining chain, not just the next operand
            Token::Not => Ok(Expr::not(self.parse_nested()?)),
            Token::FieldKey(key) => {
                self.expect(TokenKind::Colon)?;
                Ok(Expr::field(key, self.parse_nested()?))
            }

            // Literals
            Token::String(s) => Ok(Expr::Value(Literal::String(s))),
            Token::Number(n) => Ok(Expr::Value(Literal::Number(n))),
            Token::Boolean(b) => Ok(Expr::Value(Literal::Boolean(b))),
            Token::Null => Ok(Expr::Value(Literal::Null)),

            token => Err(ParseError::Unexpected {
                expected: Expected::Expression,
                found: Found::Token(token.kind()),
            }),
        }
    }
}

#[test]
fn test_depth_guard_ignores_flat_chains() {
    let source = vec!["a"; 1000].join(" & ");
    assert!(parse(&source).is_ok());

    let nested = format!("{}a{}", "(".repeat(200), ")".repeat(200));
    assert_eq!(
        parse(&nested),
        Err(ParseError::TooDeep {
            limit: DEFAULT_MAX_DEPTH
        })
    );
}
