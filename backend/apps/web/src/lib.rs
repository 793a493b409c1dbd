//! Shared Validator Demo Page
//!
//! Server-rendered page holding two fixed sample payloads. Each trigger
//! validates its sample with the `validators` crate inside this process and
//! renders the outcome as text; the API is never called.

pub mod config;
pub mod presentation;
pub mod render;
pub mod samples;

pub use config::WebConfig;
pub use presentation::router::web_router;

#[cfg(test)]
mod tests;
