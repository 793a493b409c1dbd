//! Name Value Object
//!
//! A user's display name. The text is kept exactly as submitted: no trimming,
//! no case folding, no Unicode normalization.
//!
//! ## Invariants
//! - Length: 2..=100 UTF-16 code units
//!
//! Length is counted in UTF-16 code units so that a browser's
//! `String.prototype.length` and this check always agree on the same input.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Minimum length for a name (UTF-16 code units)
pub const NAME_MIN_LENGTH: usize = 2;

/// Maximum length for a name (UTF-16 code units)
pub const NAME_MAX_LENGTH: usize = 100;

/// Error returned when name validation fails
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("Name must be at least {min} characters")]
    TooShort { length: usize, min: usize },

    #[error("Name must be at most {max} characters")]
    TooLong { length: usize, max: usize },
}

/// Validated user name
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    /// Create a new Name, checking both length bounds.
    ///
    /// At most one bound can fail for a given input.
    pub fn new(input: impl Into<String>) -> Result<Self, NameError> {
        let input = input.into();
        let length = Self::measure(&input);

        if length < NAME_MIN_LENGTH {
            return Err(NameError::TooShort {
                length,
                min: NAME_MIN_LENGTH,
            });
        }
        if length > NAME_MAX_LENGTH {
            return Err(NameError::TooLong {
                length,
                max: NAME_MAX_LENGTH,
            });
        }

        Ok(Self(input))
    }

    /// Length of `input` as the name rules count it
    #[inline]
    pub fn measure(input: &str) -> usize {
        input.encode_utf16().count()
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Name").field(&self.0).finish()
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Name {
    type Error = NameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Name {
    type Error = NameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        name.0
    }
}
