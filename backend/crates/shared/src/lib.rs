//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of vocabulary shared by every
//! application in the workspace:
//! - Common error types and result aliases
//! - Conversions from library errors into the unified error
//! - HTTP rendering of errors (feature `axum`)
//!
//! Validation rules for user input live in the `validators` crate; the
//! kernel only knows how to report failures that are *not* validation data.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}

pub use error::app_error::{AppError, AppResult};
pub use error::kind::ErrorKind;
