//! Age Value Object
//!
//! A positive whole number of years. JSON numbers written with a zero
//! fraction (`25.0`) are accepted and normalized to their integer form.
//! Whole numbers beyond the 64-bit range stay valid and keep their float form.

use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::fmt;
use thiserror::Error;

/// 2^64 as f64; integral floats below this are stored as `u64`
const U64_UPPER_BOUND_F64: f64 = 18_446_744_073_709_551_616.0;

/// Error returned when age validation fails
///
/// Variant order is the order in which the checks are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Error)]
pub enum AgeError {
    #[error("Age must be a whole number")]
    NotInteger,

    #[error("Age must be a positive number")]
    NotPositive,
}

/// Validated age
///
/// Holds the normalized JSON number: an unsigned integer whenever the value
/// fits in `u64`, otherwise the integral float it was given as.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Number", into = "Number")]
pub struct Age(Number);

impl Age {
    /// Create an age from an unsigned integer
    pub fn new(value: u64) -> Result<Self, AgeError> {
        if value == 0 {
            return Err(AgeError::NotPositive);
        }
        Ok(Self(Number::from(value)))
    }

    /// Check a JSON number against every age rule.
    ///
    /// Both rules are always evaluated, so `-1.5` yields
    /// `[NotInteger, NotPositive]`.
    pub fn from_number(number: &Number) -> Result<Self, Vec<AgeError>> {
        if let Some(value) = number.as_u64() {
            return Self::new(value).map_err(|e| vec![e]);
        }
        if number.as_i64().is_some() {
            // as_u64 failed, so the integer is negative
            return Err(vec![AgeError::NotPositive]);
        }

        let value = number.as_f64().unwrap_or(f64::NAN);
        let mut errors = Vec::new();

        if !(value.is_finite() && value.fract() == 0.0) {
            errors.push(AgeError::NotInteger);
        }
        if value <= 0.0 {
            errors.push(AgeError::NotPositive);
        }
        if !errors.is_empty() {
            return Err(errors);
        }

        if value < U64_UPPER_BOUND_F64 {
            Ok(Self(Number::from(value as u64)))
        } else {
            Number::from_f64(value)
                .map(Self)
                .ok_or_else(|| vec![AgeError::NotInteger])
        }
    }

    /// The age as `u64`, if it fits
    #[inline]
    pub fn as_u64(&self) -> Option<u64> {
        self.0.as_u64()
    }

    #[inline]
    pub fn as_number(&self) -> &Number {
        &self.0
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl TryFrom<Number> for Age {
    type Error = AgeError;

    /// Reports the first failed rule; use [`Age::from_number`] for all of them.
    fn try_from(number: Number) -> Result<Self, Self::Error> {
        Self::from_number(&number)
            .map_err(|errors| errors.first().copied().unwrap_or(AgeError::NotInteger))
    }
}

impl From<Age> for Number {
    fn from(age: Age) -> Self {
        age.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number(json: &str) -> Number {
        serde_json::from_str(json).unwrap()
    }

    mod integers {
        use super::*;

        #[test]
        fn test_positive_integer() {
            assert_eq!(Age::from_number(&number("25")).unwrap().as_u64(), Some(25));
        }

        #[test]
        fn test_zero_is_not_positive() {
            assert_eq!(
                Age::from_number(&number("0")),
                Err(vec![AgeError::NotPositive])
            );
        }

        #[test]
        fn test_negative_is_not_positive() {
            assert_eq!(
                Age::from_number(&number("-5")),
                Err(vec![AgeError::NotPositive])
            );
        }

        #[test]
        fn test_u64_max() {
            let age = Age::from_number(&Number::from(u64::MAX)).unwrap();
            assert_eq!(age.as_u64(), Some(u64::MAX));
        }
    }

    mod floats {
        use super::*;

        #[test]
        fn test_zero_fraction_normalizes() {
            let age = Age::from_number(&number("25.0")).unwrap();
            assert_eq!(age.as_u64(), Some(25));
            assert_eq!(serde_json::to_string(&age).unwrap(), "25");
        }

        #[test]
        fn test_fraction_is_not_integer() {
            assert_eq!(
                Age::from_number(&number("25.5")),
                Err(vec![AgeError::NotInteger])
            );
        }

        #[test]
        fn test_negative_fraction_reports_both() {
            assert_eq!(
                Age::from_number(&number("-1.5")),
                Err(vec![AgeError::NotInteger, AgeError::NotPositive])
            );
        }

        #[test]
        fn test_small_positive_fraction() {
            assert_eq!(
                Age::from_number(&number("0.5")),
                Err(vec![AgeError::NotInteger])
            );
        }

        #[test]
        fn test_negative_zero_is_not_positive() {
            assert_eq!(
                Age::from_number(&number("-0.0")),
                Err(vec![AgeError::NotPositive])
            );
        }

        #[test]
        fn test_whole_numbers_beyond_u64_are_accepted() {
            for json in ["1e30", "100000000000000000000"] {
                let age = Age::from_number(&number(json)).unwrap();
                assert_eq!(age.as_u64(), None);
                assert_eq!(age.as_number().as_f64(), number(json).as_f64());
            }
        }
    }

    mod serde_bridge {
        use super::*;

        #[test]
        fn test_deserialize_checks_rules() {
            assert_eq!(serde_json::from_str::<Age>("7").unwrap().as_u64(), Some(7));
            assert!(serde_json::from_str::<Age>("0").is_err());
            assert!(serde_json::from_str::<Age>("2.5").is_err());
        }

        #[test]
        fn test_large_age_serializes_as_float() {
            let age = Age::from_number(&number("1e20")).unwrap();
            let value = serde_json::to_value(&age).unwrap();
            assert_eq!(value, serde_json::json!(1e20));
        }
    }

    #[test]
    fn test_new_rejects_zero() {
        assert_eq!(Age::new(0), Err(AgeError::NotPositive));
        assert!(Age::new(1).is_ok());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(AgeError::NotInteger.to_string(), "Age must be a whole number");
        assert_eq!(
            AgeError::NotPositive.to_string(),
            "Age must be a positive number"
        );
    }
}
