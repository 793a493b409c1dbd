//! Fixed sample payloads shown on the page

use serde_json::{Value, json};

/// One of the two hardcoded inputs the page can validate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sample {
    /// Conforms to the schema
    Valid,
    /// Breaks every field: name too short, bad email, negative age
    Invalid,
}

impl Sample {
    pub const ALL: [Sample; 2] = [Sample::Valid, Sample::Invalid];

    /// Value of the `sample` query parameter selecting this sample
    pub const fn query_value(&self) -> &'static str {
        match self {
            Sample::Valid => "valid",
            Sample::Invalid => "invalid",
        }
    }

    /// Parse the `sample` query parameter; unknown values select nothing
    pub fn from_query(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.query_value() == value)
    }

    /// Name used in the rendered result
    pub const fn label(&self) -> &'static str {
        match self {
            Sample::Valid => "Valid User",
            Sample::Invalid => "Invalid User",
        }
    }

    pub const fn button_text(&self) -> &'static str {
        match self {
            Sample::Valid => "✅ Validate Good Data",
            Sample::Invalid => "❌ Validate Bad Data",
        }
    }

    pub fn payload(&self) -> Value {
        match self {
            Sample::Valid => json!({
                "name": "John Doe",
                "email": "john@example.com",
                "age": 25,
            }),
            Sample::Invalid => json!({
                "name": "J",
                "email": "not-an-email",
                "age": -5,
            }),
        }
    }
}
