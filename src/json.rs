//! JSON host support: value conversion, per-node metadata and an
//! environment that resolves `$key`, `$value` and `$type` for every node of
//! a JSON document.

use std::fmt;

use crate::{
    ast::{Expr, FieldKey},
    environment::Fields,
    evaluator::{Comparator, EvalError, Evaluator},
    value::{Subject, Value},
};

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Boolean(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(arr) => {
                Value::Array(arr.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(obj) => {
                Value::Object(obj.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

// Whole numbers within this bound are written back as JSON integers.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Converts back to `serde_json::Value`; non-finite numbers become `null`.
pub fn to_json(v: &Value) -> serde_json::Value {
    match v {
        Value::Null => serde_json::Value::Null,
        Value::Boolean(b) => serde_json::Value::Bool(*b),
        Value::Number(n) if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER => {
            serde_json::Value::Number((*n as i64).into())
        }
        Value::Number(n) => serde_json::Number::from_f64(*n)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        Value::String(s) => serde_json::Value::String(s.clone()),
        Value::Array(arr) => serde_json::Value::Array(arr.iter().map(to_json).collect()),
        Value::Object(obj) => serde_json::Value::Object(
            obj.iter().map(|(k, v)| (k.clone(), to_json(v))).collect(),
        ),
    }
}

/// JSON type categories, named as `$type` reports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonType {
    Object,
    Array,
    String,
    Number,
    Boolean,
    Null,
}

impl JsonType {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Object(_) => JsonType::Object,
            Value::Array(_) => JsonType::Array,
            Value::String(_) => JsonType::String,
            Value::Number(_) => JsonType::Number,
            Value::Boolean(_) => JsonType::Boolean,
            Value::Null => JsonType::Null,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            JsonType::Object => "object",
            JsonType::Array => "array",
            JsonType::String => "string",
            JsonType::Number => "number",
            JsonType::Boolean => "boolean",
            JsonType::Null => "null",
        }
    }
}

impl fmt::Display for JsonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a node is addressed within its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKey<'a> {
    /// Object member name
    Name(&'a str),
    /// Array position
    Index(usize),
}

/// Metadata for one node of a JSON document.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonNode<'a> {
    /// `None` for the root
    pub key: Option<NodeKey<'a>>,
    /// Position among its siblings
    pub index: usize,
    pub json_type: JsonType,
    pub value: &'a Value,
    /// JSONPath-style location, e.g. `$.items[0]`
    pub path: String,
}

impl Subject for JsonNode<'_> {
    fn as_value(&self) -> Option<&Value> {
        Some(self.value)
    }
}

/// Lists every node of `root` in pre-order, starting with the root itself.
pub fn walk(root: &Value) -> Vec<JsonNode<'_>> {
    let mut nodes = Vec::new();
    visit(root, None, 0, "$".to_string(), &mut nodes);
    nodes
}

fn visit<'a>(
    value: &'a Value,
    key: Option<NodeKey<'a>>,
    index: usize,
    path: String,
    nodes: &mut Vec<JsonNode<'a>>,
) {
    nodes.push(JsonNode {
        key,
        index,
        json_type: JsonType::of(value),
        value,
        path: path.clone(),
    });

    match value {
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                let child = format!("{}[{}]", path, i);
                visit(item, Some(NodeKey::Index(i)), i, child, nodes);
            }
        }
        Value::Object(members) => {
            for (i, (name, member)) in members.iter().enumerate() {
                let child = member_path(&path, name);
                visit(member, Some(NodeKey::Name(name)), i, child, nodes);
            }
        }
        _ => {}
    }
}

fn member_path(parent: &str, name: &str) -> String {
    let plain = name.chars().next().is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    if plain {
        format!("{}.{}", parent, name)
    } else {
        let escaped = name.replace('\\', "\\\\").replace('\'', "\\'");
        format!("{}['{}']", parent, escaped)
    }
}

/// Field accessors for [`JsonNode`]s.
///
/// `$key` is the member name, or the position for array elements, and does
/// not resolve on the root. `$type` resolves to the [`JsonType`] name.
pub fn node_environment<'v>() -> Fields<'static, JsonNode<'v>> {
    Fields::new()
        .with(FieldKey::Key, |node: &JsonNode<'v>| {
            node.key.map(|key| match key {
                NodeKey::Name(name) => Value::from(name),
                NodeKey::Index(i) => Value::Number(i as f64),
            })
        })
        .with(FieldKey::Value, |node: &JsonNode<'v>| Some(node.value.clone()))
        .with(FieldKey::Type, |node: &JsonNode<'v>| {
            Some(Value::from(node.json_type.as_str()))
        })
}

/// Returns the nodes of `root` that `expr` matches, in pre-order.
///
/// A node a field cannot be resolved on (the root has no `$key`) simply does
/// not match; any other evaluation error is returned.
pub fn filter_nodes<'v>(
    expr: &Expr,
    root: &'v Value,
    comparator: Option<&Comparator<'_>>,
) -> Result<Vec<JsonNode<'v>>, EvalError> {
    let env = node_environment();
    let evaluator = match comparator {
        Some(compare) => Evaluator::with_comparator(compare),
        None => Evaluator::new(),
    };

    let mut matches = Vec::new();
    for node in walk(root) {
        match evaluator.eval(expr, &node, &env) {
            Ok(true) => matches.push(node),
            Ok(false) | Err(EvalError::FieldNotFound(_)) => {}
            Err(e) => return Err(e),
        }
    }
    Ok(matches)
}
