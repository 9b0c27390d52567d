use crate::{ast::FieldKey, value::Literal};

/// Abstract Syntax Tree node representing a parsed filter.
///
/// Trees are immutable once built and own all of their children, so a
/// parsed filter can be evaluated any number of times, from any thread.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    // Logic
    /// Both sides must match; the right side is skipped when the left fails
    ///
    /// # Example
    /// ```text
    /// a & b
    /// ```
    And(Box<Expr>, Box<Expr>),

    /// Either side must match; the right side is skipped when the left matches
    ///
    /// # Example
    /// ```text
    /// a | b
    /// ```
    Or(Box<Expr>, Box<Expr>),

    /// Negation
    ///
    /// # Example
    /// ```text
    /// !a
    /// ```
    Not(Box<Expr>),

    // Scoping
    /// Evaluate `target` against the facet `key` resolves to
    ///
    /// # Examples
    /// ```text
    /// $key: name
    /// $type: (string | number)
    /// ```
    Field { key: FieldKey, target: Box<Expr> },

    // Leaves
    /// Literal compared against the data under test
    ///
    /// # Examples
    /// ```text
    /// "hello"
    /// 42
    /// true
    /// null
    /// ```
    Value(Literal),

    /// Type category test against a type-name string
    ///
    /// The textual grammar never produces this node; build it with
    /// [`Expr::type_literal`]. The name is checked when evaluated, so an
    /// unknown name is an evaluation error rather than a construction error.
    Type(String),
}

impl Expr {
    pub fn and(left: Expr, right: Expr) -> Self {
        Expr::And(Box::new(left), Box::new(right))
    }

    pub fn or(left: Expr, right: Expr) -> Self {
        Expr::Or(Box::new(left), Box::new(right))
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(expr: Expr) -> Self {
        Expr::Not(Box::new(expr))
    }

    pub fn field(key: FieldKey, target: Expr) -> Self {
        Expr::Field {
            key,
            target: Box::new(target),
        }
    }

    pub fn value(literal: impl Into<Literal>) -> Self {
        Expr::Value(literal.into())
    }

    pub fn type_literal(name: impl Into<String>) -> Self {
        Expr::Type(name.into())
    }
}
