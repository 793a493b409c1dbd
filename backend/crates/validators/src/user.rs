//! User Schema
//!
//! The `User` shape and the [`validate`] operation. Every surface that
//! accepts a user (the HTTP API, the web page) goes through this module, so
//! the rules are defined exactly once.
//!
//! ## Check order
//! Each field is checked independently. Within a field the type check runs
//! first; if it fails, no further checks run for that field. Range checks
//! run afterwards and may all report.

use crate::errors::{Field, ValidationErrors};
use crate::value_object::{Age, Email, Name};
use crate::value_type::ValueType;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Validated user record
///
/// Holds exactly the schema fields; anything else in the input is dropped.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct User {
    name: Name,
    email: Email,
    #[serde(skip_serializing_if = "Option::is_none")]
    age: Option<Age>,
}

impl User {
    pub fn new(name: Name, email: Email, age: Option<Age>) -> Self {
        Self { name, email, age }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn age(&self) -> Option<&Age> {
        self.age.as_ref()
    }
}

impl TryFrom<Value> for User {
    type Error = ValidationErrors;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        validate(&value)
    }
}

/// Check an arbitrary JSON value against the `User` schema.
///
/// Never panics. Returns the normalized record, or every violation found.
pub fn validate(input: &Value) -> Result<User, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let Value::Object(object) = input else {
        errors.add_form_error(ValueType::mismatch(ValueType::Object, input));
        return Err(errors);
    };

    let name = check_name(object, &mut errors);
    let email = check_email(object, &mut errors);
    let age = check_age(object, &mut errors);

    match (name, email, age) {
        (Some(name), Some(email), Some(age)) => Ok(User { name, email, age }),
        _ => Err(errors),
    }
}

fn check_name(object: &Map<String, Value>, errors: &mut ValidationErrors) -> Option<Name> {
    let text = required_string(object, Field::Name, errors)?;
    match Name::new(text) {
        Ok(value) => Some(value),
        Err(e) => {
            errors.add(Field::Name, e.to_string());
            None
        }
    }
}

fn check_email(object: &Map<String, Value>, errors: &mut ValidationErrors) -> Option<Email> {
    let text = required_string(object, Field::Email, errors)?;
    match Email::new(text) {
        Ok(value) => Some(value),
        Err(e) => {
            errors.add(Field::Email, e.to_string());
            None
        }
    }
}

/// `Some(None)` when the field is absent, `None` when it failed
fn check_age(object: &Map<String, Value>, errors: &mut ValidationErrors) -> Option<Option<Age>> {
    let value = match object.get(Field::Age.as_str()) {
        None => return Some(None),
        Some(value) => value,
    };

    let Value::Number(number) = value else {
        errors.add(Field::Age, ValueType::mismatch(ValueType::Number, value));
        return None;
    };

    match Age::from_number(number) {
        Ok(age) => Some(Some(age)),
        Err(failures) => {
            for failure in failures {
                errors.add(Field::Age, failure.to_string());
            }
            None
        }
    }
}

/// Type check shared by the required text fields
fn required_string<'a>(
    object: &'a Map<String, Value>,
    field: Field,
    errors: &mut ValidationErrors,
) -> Option<&'a str> {
    match object.get(field.as_str()) {
        None => {
            errors.add(field, "Required");
            None
        }
        Some(Value::String(text)) => Some(text),
        Some(other) => {
            errors.add(field, ValueType::mismatch(ValueType::String, other));
            None
        }
    }
}
