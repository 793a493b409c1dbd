//! Web Router

use crate::presentation::handlers;
use axum::{Router, routing::get};

pub fn web_router() -> Router {
    Router::new()
        .route("/", get(handlers::page))
        .fallback(handlers::not_found)
}
