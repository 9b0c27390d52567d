//! Comparators for matching composite values against literals.

use crate::value::{Literal, Value};

/// Arrays match when an element is strictly equal to the literal; objects
/// match when they have a key equal to a string literal.
///
/// # Examples
///
/// ```
/// use sift_lang::{compare, Literal, Value};
///
/// let tags = Value::Array(vec![Value::from("red"), Value::from("blue")]);
/// assert!(compare::contains(&tags, &Literal::from("red")));
/// assert!(!compare::contains(&tags, &Literal::from("green")));
/// ```
pub fn contains(value: &Value, literal: &Literal) -> bool {
    match (value, literal) {
        (Value::Array(items), _) => items.iter().any(|item| item.strict_eq(literal)),
        (Value::Object(map), Literal::String(key)) => map.contains_key(key),
        _ => false,
    }
}

#[test]
fn test_object_matches_by_key() {
    let mut map = indexmap::IndexMap::new();
    map.insert("id".to_string(), Value::Number(1.0));
    let obj = Value::Object(map);

    assert!(contains(&obj, &Literal::from("id")));
    assert!(!contains(&obj, &Literal::Number(1.0)));
}
