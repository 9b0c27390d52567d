use std::fmt;

/// The facets of a node a filter can scope into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKey {
    /// `$key` - the node's name within its parent
    Key,
    /// `$value` - the node's value
    Value,
    /// `$type` - the node's type category name
    Type,
}

impl FieldKey {
    pub const ALL: [FieldKey; 3] = [FieldKey::Key, FieldKey::Value, FieldKey::Type];

    /// The word that follows `$` in source text.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldKey::Key => "key",
            FieldKey::Value => "value",
            FieldKey::Type => "type",
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.as_str())
    }
}
