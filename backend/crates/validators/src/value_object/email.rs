//! Email Value Object
//!
//! Represents a syntactically valid email address. Only the shape is checked;
//! deliverability is out of scope.
//!
//! ## Accepted syntax
//! - ASCII only, exactly one `@`
//! - Local part: non-empty, not starting with `.`, characters from
//!   `A-Z a-z 0-9 _ ' + - .`, last character from `A-Z a-z 0-9 _ + -`
//! - No `..` anywhere in the address
//! - Domain: one or more labels of `[A-Za-z0-9][A-Za-z0-9-]*`, each followed
//!   by `.`, then a top-level label of at least two ASCII letters
//!
//! Quoted local parts, IP-literal domains and internationalized domains are
//! rejected.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Minimum length of the top-level domain label
const TLD_MIN_LENGTH: usize = 2;

/// Error returned when email validation fails
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmailError {
    #[error("Invalid email address")]
    InvalidFormat,
}

/// Email address value object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Create a new email with validation. The input is stored verbatim.
    pub fn new(email: impl Into<String>) -> Result<Self, EmailError> {
        let email = email.into();

        if !Self::is_valid_format(&email) {
            return Err(EmailError::InvalidFormat);
        }

        Ok(Self(email))
    }

    /// Email format validation
    pub fn is_valid_format(email: &str) -> bool {
        if !email.is_ascii() || email.contains("..") {
            return false;
        }

        let Some((local, domain)) = email.split_once('@') else {
            return false;
        };
        if domain.contains('@') {
            return false;
        }

        Self::is_valid_local_part(local) && Self::is_valid_domain(domain)
    }

    fn is_valid_local_part(local: &str) -> bool {
        let Some(last) = local.chars().next_back() else {
            return false;
        };

        if local.starts_with('.') {
            return false;
        }

        let body_ok = local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '\'' | '+' | '-' | '.'));

        body_ok && (last.is_ascii_alphanumeric() || matches!(last, '_' | '+' | '-'))
    }

    fn is_valid_domain(domain: &str) -> bool {
        let Some((labels, tld)) = domain.rsplit_once('.') else {
            return false;
        };

        if tld.len() < TLD_MIN_LENGTH || !tld.chars().all(|c| c.is_ascii_alphabetic()) {
            return false;
        }

        labels.split('.').all(|label| {
            let mut chars = label.chars();
            match chars.next() {
                Some(first) if first.is_ascii_alphanumeric() => {
                    chars.all(|c| c.is_ascii_alphanumeric() || c == '-')
                }
                _ => false,
            }
        })
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Get the domain part of the email
    pub fn domain(&self) -> &str {
        self.0.split_once('@').map(|(_, d)| d).unwrap_or("")
    }

    /// Get the local part of the email
    pub fn local_part(&self) -> &str {
        self.0.split_once('@').map(|(l, _)| l).unwrap_or("")
    }
}

impl FromStr for Email {
    type Err = EmailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Email::new(s)
    }
}

impl TryFrom<String> for Email {
    type Error = EmailError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
