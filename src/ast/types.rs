use std::fmt;

/// Type categories a [`Expr::Type`](crate::ast::Expr::Type) node can test for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeCategory {
    Array,
    /// Also spelled `bool`
    Boolean,
    Number,
    Object,
    String,
    Null,
    /// Any of boolean, number, string or null
    Primitive,
    /// The value is absent
    Undefined,
}

impl TypeCategory {
    /// Looks up a category by name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "array" => Some(Self::Array),
            "boolean" | "bool" => Some(Self::Boolean),
            "number" => Some(Self::Number),
            "object" => Some(Self::Object),
            "string" => Some(Self::String),
            "null" => Some(Self::Null),
            "primitive" => Some(Self::Primitive),
            "undefined" => Some(Self::Undefined),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Array => "array",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::Object => "object",
            Self::String => "string",
            Self::Null => "null",
            Self::Primitive => "primitive",
            Self::Undefined => "undefined",
        }
    }
}

impl fmt::Display for TypeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[test]
fn test_from_name_ignores_case() {
    assert_eq!(TypeCategory::from_name("ARRAY"), Some(TypeCategory::Array));
    assert_eq!(TypeCategory::from_name("Bool"), Some(TypeCategory::Boolean));
    assert_eq!(TypeCategory::from_name("integer"), None);
}
