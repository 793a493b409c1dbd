//! JSON value type names used in type-mismatch messages.

use serde_json::Value;
use std::fmt;

/// Kind of a JSON value, as named in "Expected X, received Y" messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl ValueType {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => ValueType::Null,
            Value::Bool(_) => ValueType::Boolean,
            Value::Number(_) => ValueType::Number,
            Value::String(_) => ValueType::String,
            Value::Array(_) => ValueType::Array,
            Value::Object(_) => ValueType::Object,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            ValueType::Null => "null",
            ValueType::Boolean => "boolean",
            ValueType::Number => "number",
            ValueType::String => "string",
            ValueType::Array => "array",
            ValueType::Object => "object",
        }
    }

    /// "Expected {expected}, received {actual}"
    pub fn mismatch(expected: ValueType, actual: &Value) -> String {
        format!("Expected {}, received {}", expected, ValueType::of(actual))
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_type_names() {
        assert_eq!(ValueType::of(&json!(null)).as_str(), "null");
        assert_eq!(ValueType::of(&json!(true)).as_str(), "boolean");
        assert_eq!(ValueType::of(&json!(1.5)).as_str(), "number");
        assert_eq!(ValueType::of(&json!("x")).as_str(), "string");
        assert_eq!(ValueType::of(&json!([])).as_str(), "array");
        assert_eq!(ValueType::of(&json!({})).as_str(), "object");
    }

    #[test]
    fn test_mismatch_message() {
        assert_eq!(
            ValueType::mismatch(ValueType::String, &json!(42)),
            "Expected string, received number"
        );
    }
}
