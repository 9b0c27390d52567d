use indexmap::IndexMap;

/// A host data value inspected by filters.
///
/// This mirrors the JSON data model. Numbers are a single `f64` kind, so
/// `1` and `1.0` are the same value.
///
/// # Examples
///
/// ```
/// use sift_lang::Value;
/// use indexmap::IndexMap;
///
/// // Scalar values
/// let null = Value::Null;
/// let boolean = Value::Boolean(true);
/// let number = Value::Number(3.5);
/// let string = Value::String("hello".to_string());
///
/// // Collections
/// let array = Value::Array(vec![Value::Number(1.0), Value::Number(2.0)]);
///
/// let mut obj = IndexMap::new();
/// obj.insert("key".to_string(), Value::String("value".to_string()));
/// let object = Value::Object(obj);
/// assert!(object.is_composite());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Boolean(bool),
    Number(f64),
    String(String),
    Array(Vec<Value>),
    /// Object with members kept in insertion order
    Object(IndexMap<String, Value>),
}

impl Value {
    /// Arrays and objects are composite; everything else is a scalar.
    pub fn is_composite(&self) -> bool {
        matches!(self, Value::Array(_) | Value::Object(_))
    }

    /// Strict equality against a literal.
    ///
    /// Only values of the same kind can be equal, and numbers follow IEEE
    /// comparison (`NaN` equals nothing). Composites never equal a literal.
    pub fn strict_eq(&self, literal: &Literal) -> bool {
        match (self, literal) {
            (Value::Null, Literal::Null) => true,
            (Value::Boolean(a), Literal::Boolean(b)) => a == b,
            (Value::Number(a), Literal::Number(b)) => a == b,
            (Value::String(a), Literal::String(b)) => a == b,
            _ => false,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

impl From<Literal> for Value {
    fn from(literal: Literal) -> Self {
        match literal {
            Literal::Null => Value::Null,
            Literal::Boolean(b) => Value::Boolean(b),
            Literal::Number(n) => Value::Number(n),
            Literal::String(s) => Value::String(s),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

/// A scalar written in filter source.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Null,
    Boolean(bool),
    Number(f64),
    String(String),
}

impl From<&str> for Literal {
    fn from(s: &str) -> Self {
        Literal::String(s.to_string())
    }
}

impl From<String> for Literal {
    fn from(s: String) -> Self {
        Literal::String(s)
    }
}

impl From<f64> for Literal {
    fn from(n: f64) -> Self {
        Literal::Number(n)
    }
}

impl From<i32> for Literal {
    fn from(n: i32) -> Self {
        Literal::Number(f64::from(n))
    }
}

impl From<bool> for Literal {
    fn from(b: bool) -> Self {
        Literal::Boolean(b)
    }
}

/// Anything a filter can be evaluated against.
///
/// Literal and type tests look at the data through [`Subject::as_value`];
/// `None` stands for an absent ("undefined") value. Field scopes hand the
/// host type to the [`Environment`](crate::Environment) instead, so host
/// records only need a value view for bare literals written outside a field.
pub trait Subject {
    fn as_value(&self) -> Option<&Value>;
}

impl Subject for Value {
    fn as_value(&self) -> Option<&Value> {
        Some(self)
    }
}

impl<T: Subject> Subject for Option<T> {
    fn as_value(&self) -> Option<&Value> {
        self.as_ref().and_then(Subject::as_value)
    }
}

impl<T: Subject + ?Sized> Subject for &T {
    fn as_value(&self) -> Option<&Value> {
        (**self).as_value()
    }
}

#[test]
fn test_strict_eq_requires_same_kind() {
    assert!(Value::Number(1.0).strict_eq(&Literal::Number(1.0)));
    assert!(!Value::String("1".into()).strict_eq(&Literal::Number(1.0)));
    assert!(!Value::Boolean(false).strict_eq(&Literal::Null));
    assert!(!Value::Number(f64::NAN).strict_eq(&Literal::Number(f64::NAN)));
    assert!(!Value::Array(vec![]).strict_eq(&Literal::Null));
}
