//! User Validation API
//!
//! HTTP surface over the shared `validators` crate:
//! - `GET /` - liveness probe
//! - `POST /users` - validate an arbitrary JSON body as a `User`
//!
//! Validation failures are answered with `400` and the per-field report.
//! Transport failures (unparseable body, wrong content type, unknown route)
//! are `kernel::AppError` problem documents.

pub mod config;
pub mod presentation;

pub use config::ApiConfig;
pub use presentation::router::{api_router, cors_layer};

#[cfg(test)]
mod tests;
