//! Kind of value held by a dynamic

use serde_json::Value;
use std::fmt;

/// The six shapes a held value can take
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// JSON null
    Null,
    /// Boolean value
    Bool,
    /// Integer or floating point number
    Number,
    /// UTF-8 string
    String,
    /// Ordered sequence (JSON array)
    Sequence,
    /// Insertion-ordered mapping from string keys (JSON object)
    Mapping,
}

impl Kind {
    /// Classify a raw value
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Number(_) => Kind::Number,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Sequence,
            Value::Object(_) => Kind::Mapping,
        }
    }

    /// Human-readable name
    pub fn name(self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Bool => "boolean",
            Kind::Number => "number",
            Kind::String => "string",
            Kind::Sequence => "sequence",
            Kind::Mapping => "mapping",
        }
    }

    /// Whether iteration over this kind can yield items
    pub fn is_iterable(self) -> bool {
        matches!(self, Kind::String | Kind::Sequence | Kind::Mapping)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
