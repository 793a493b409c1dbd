//! Shared Validators
//!
//! Single source of truth for the `User` record. The HTTP API and the web
//! page both depend on this crate and call [`validate`] unchanged.
//!
//! - `user` - the `User` shape and the `validate` operation
//! - `value_object/` - `Name`, `Email`, `Age` with their individual rules
//! - `errors` - the structured failure report
//!
//! ## Result contract
//! `validate` returns `Result<User, ValidationErrors>` for every input and
//! never panics. Failure to conform is data, not an exceptional path.
//!
//! ```rust
//! use serde_json::json;
//! use validators::{Field, validate};
//!
//! let user = validate(&json!({"name": "Ann", "email": "ann@example.com"})).unwrap();
//! assert!(user.age().is_none());
//!
//! let errors = validate(&json!({"name": "J", "email": "ann@example.com"})).unwrap_err();
//! assert_eq!(
//!     errors.get(Field::Name).unwrap(),
//!     ["Name must be at least 2 characters"]
//! );
//! ```

pub mod errors;
pub mod user;
pub mod value_object;
pub mod value_type;

pub use errors::{Field, ValidationErrors};
pub use user::{User, validate};
pub use value_object::{Age, AgeError, Email, EmailError, Name, NameError};
