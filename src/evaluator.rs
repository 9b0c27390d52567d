use std::borrow::Cow;

use log::debug;
use thiserror::Error;

use crate::{
    ast::{Expr, FieldKey, TypeCategory},
    environment::{EmptyEnvironment, Environment},
    parser::{self, DEFAULT_MAX_DEPTH, ParseError},
    value::{Literal, Subject, Value},
};

/// Decides whether a composite value (array or object) matches a literal.
///
/// Structural matching is left to the caller; see [`crate::compare`] for
/// ready-made comparators. Closures may borrow caller state for `'a`.
pub type Comparator<'a> = dyn Fn(&Value, &Literal) -> bool + Send + Sync + 'a;

/// Errors that can occur during filter evaluation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// The filter text could not be parsed
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The environment has no accessor for the field. Always the case for a
    /// field nested inside another field.
    #[error("field {0} cannot be resolved here")]
    MissingAccessor(FieldKey),

    /// The accessor produced no value for this data
    #[error("field {0} not found")]
    FieldNotFound(FieldKey),

    /// A type literal names no known type category
    #[error("unknown type '{0}'")]
    UnknownType(String),

    /// Left operands or field targets nest deeper than the evaluator allows
    #[error("expression nested deeper than {limit} levels")]
    TooDeep { limit: usize },
}

/// A filter in any of the forms [`evaluate`] accepts.
#[derive(Debug, Clone, Copy)]
pub enum Query<'q> {
    /// Filter text, parsed before evaluation
    Source(&'q str),
    /// An already built tree
    Tree(&'q Expr),
    /// The outcome of an earlier [`parse`](crate::parse) call
    Parsed(&'q Result<Expr, ParseError>),
}

impl<'q> Query<'q> {
    fn into_expr(self) -> Result<Cow<'q, Expr>, EvalError> {
        match self {
            Query::Source(source) => Ok(Cow::Owned(parser::parse(source)?)),
            Query::Tree(expr) => Ok(Cow::Borrowed(expr)),
            Query::Parsed(Ok(expr)) => Ok(Cow::Borrowed(expr)),
            Query::Parsed(Err(e)) => Err(EvalError::Parse(e.clone())),
        }
    }
}

impl<'q> From<&'q str> for Query<'q> {
    fn from(source: &'q str) -> Self {
        Query::Source(source)
    }
}

impl<'q> From<&'q String> for Query<'q> {
    fn from(source: &'q String) -> Self {
        Query::Source(source)
    }
}

impl<'q> From<&'q Expr> for Query<'q> {
    fn from(expr: &'q Expr) -> Self {
        Query::Tree(expr)
    }
}

impl<'q> From<&'q Result<Expr, ParseError>> for Query<'q> {
    fn from(outcome: &'q Result<Expr, ParseError>) -> Self {
        Query::Parsed(outcome)
    }
}

/// Evaluates a filter against `data`.
///
/// # Examples
///
/// ```
/// use sift_lang::{evaluate, FieldKey, Fields, Value};
/// use indexmap::IndexMap;
///
/// let mut node = IndexMap::new();
/// node.insert("key".to_string(), Value::from("name"));
/// node.insert("value".to_string(), Value::from("x"));
/// let node = Value::Object(node);
///
/// let env = Fields::new().with(FieldKey::Key, |d: &Value| match d {
///     Value::Object(map) => map.get("key").cloned(),
///     _ => None,
/// });
///
/// assert_eq!(evaluate("$key: \"name\"", &node, &env, None), Ok(true));
/// assert_eq!(evaluate("$key: other", &node, &env, None), Ok(false));
/// ```
pub fn evaluate<'q, T, E>(
    query: impl Into<Query<'q>>,
    data: &T,
    env: &E,
    comparator: Option<&Comparator<'_>>,
) -> Result<bool, EvalError>
where
    T: Subject + ?Sized,
    E: Environment<T> + ?Sized,
{
    let expr = query.into().into_expr()?;
    let evaluator = match comparator {
        Some(compare) => Evaluator::with_comparator(compare),
        None => Evaluator::new(),
    };
    let result = evaluator.eval(&expr, data, env);
    if let Err(e) = &result {
        debug!("evaluation failed: {}", e);
    }
    result
}

/// Walks expression trees down to a match decision.
///
/// Holds nothing but the optional comparator and a nesting limit, so one
/// evaluator can be shared across any number of evaluations.
#[derive(Clone, Copy)]
pub struct Evaluator<'c> {
    comparator: Option<&'c Comparator<'c>>,
    max_depth: usize,
}

impl Default for Evaluator<'_> {
    fn default() -> Self {
        Evaluator {
            comparator: None,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl<'c> Evaluator<'c> {
    /// Creates an evaluator without a comparator; composites never match
    /// literals.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_comparator(comparator: &'c Comparator<'c>) -> Self {
        Evaluator {
            comparator: Some(comparator),
            ..Self::default()
        }
    }

    /// Sets how deep left operands and field targets may nest. Literals and
    /// type tests at the bottom do not count.
    ///
    /// Parsed trees stay within the parser's own limit, so this only matters
    /// for trees built in code or parsed with a raised limit.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Evaluates `expr` against `data`, resolving fields through `env`.
    ///
    /// `&`/`|` short-circuit left to right. Right operands and negations are
    /// followed in a loop; left operands and field targets recurse and count
    /// toward the nesting limit.
    pub fn eval<T, E>(&self, expr: &Expr, data: &T, env: &E) -> Result<bool, EvalError>
    where
        T: Subject + ?Sized,
        E: Environment<T> + ?Sized,
    {
        self.eval_at(expr, data, env, 0)
    }

    fn eval_at<T, E>(
        &self,
        expr: &Expr,
        data: &T,
        env: &E,
        depth: usize,
    ) -> Result<bool, EvalError>
    where
        T: Subject + ?Sized,
        E: Environment<T> + ?Sized,
    {
        let leaf = matches!(expr, Expr::Value(_) | Expr::Type(_));
        if depth > self.max_depth && !leaf {
            return Err(EvalError::TooDeep {
                limit: self.max_depth,
            });
        }

        let mut expr = expr;
        let mut negate = false;

        loop {
            match expr {
                Expr::And(left, right) => {
                    if !self.eval_at(left, data, env, depth + 1)? {
                        return Ok(negate);
                    }
                    expr = &**right;
                }
                Expr::Or(left, right) => {
                    if self.eval_at(left, data, env, depth + 1)? {
                        return Ok(!negate);
                    }
                    expr = &**right;
                }
                Expr::Not(inner) => {
                    negate = !negate;
                    expr = &**inner;
                }
                Expr::Field { key, target } => {
                    let resolved = env.resolve(*key, data)?;
                    let matched = self.eval_at(target, &resolved, &EmptyEnvironment, depth + 1)?;
                    return Ok(matched != negate);
                }
                Expr::Value(literal) => {
                    return Ok(self.match_literal(data.as_value(), literal) != negate);
                }
                Expr::Type(name) => {
                    return Ok(match_type(name, data.as_value())? != negate);
                }
            }
        }
    }

    fn match_literal(&self, data: Option<&Value>, literal: &Literal) -> bool {
        match data {
            None => false,
            Some(value) if value.is_composite() => self
                .comparator
                .is_some_and(|compare| compare(value, literal)),
            Some(value) => value.strict_eq(literal),
        }
    }
}

/// Matches a type-category name against data holding a type tag string.
fn match_type(name: &str, data: Option<&Value>) -> Result<bool, EvalError> {
    let category =
        TypeCategory::from_name(name).ok_or_else(|| EvalError::UnknownType(name.to_string()))?;
    let is_null = matches!(data, Some(Value::Null));
    let tag = data.and_then(Value::as_str);

    Ok(match category {
        TypeCategory::Null => is_null,
        TypeCategory::Undefined => data.is_none(),
        TypeCategory::Primitive => is_null || matches!(tag, Some("boolean" | "number" | "string")),
        other => tag == Some(other.as_str()),
    })
}
