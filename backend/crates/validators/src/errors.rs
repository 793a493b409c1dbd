//! Validation Errors
//!
//! Failure half of the validation result. A failed validation is ordinary
//! data: callers branch on it and render it, nothing is thrown.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// A field of the `User` shape.
///
/// Declaration order is the order fields appear in reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Age,
}

impl Field {
    /// Key used for this field in input and output objects
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Age => "age",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured validation failure report
///
/// * `field_errors` - messages per field, in check order; a field that passed
///   is absent, never present with an empty list
/// * `form_errors` - messages about the input as a whole (e.g. not an object)
///
/// Serializes as `{"formErrors": [...], "fieldErrors": {"name": [...], ...}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationErrors {
    form_errors: Vec<String>,
    field_errors: BTreeMap<Field, Vec<String>>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message against a field
    pub fn add(&mut self, field: Field, message: impl Into<String>) {
        self.field_errors
            .entry(field)
            .or_default()
            .push(message.into());
    }

    /// Record a message about the whole input
    pub fn add_form_error(&mut self, message: impl Into<String>) {
        self.form_errors.push(message.into());
    }

    /// True when nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.form_errors.is_empty() && self.field_errors.is_empty()
    }

    /// Messages for one field, if it failed
    pub fn get(&self, field: Field) -> Option<&[String]> {
        self.field_errors.get(&field).map(Vec::as_slice)
    }

    pub fn field_errors(&self) -> &BTreeMap<Field, Vec<String>> {
        &self.field_errors
    }

    pub fn form_errors(&self) -> &[String] {
        &self.form_errors
    }

    pub fn into_parts(self) -> (Vec<String>, BTreeMap<Field, Vec<String>>) {
        (self.form_errors, self.field_errors)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for message in &self.form_errors {
            if !first {
                f.write_str("; ")?;
            }
            f.write_str(message)?;
            first = false;
        }
        for (field, messages) in &self.field_errors {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field, messages.join(", "))?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}
