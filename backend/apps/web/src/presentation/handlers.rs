//! HTTP Handlers

use crate::render::{render_page, run_sample};
use crate::samples::Sample;
use axum::extract::Query;
use axum::http::{Method, Uri};
use axum::response::Html;
use kernel::error::app_error::{AppError, AppResult};
use serde::Deserialize;

/// Query string for GET /
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub sample: Option<String>,
}

/// GET / and GET /?sample=valid|invalid
pub async fn page(Query(query): Query<PageQuery>) -> AppResult<Html<String>> {
    let sample = query.sample.as_deref().and_then(Sample::from_query);

    let outcome = match sample {
        Some(sample) => {
            let outcome = run_sample(sample)?;
            tracing::info!(
                sample = sample.query_value(),
                is_error = outcome.is_error,
                "Sample validated"
            );
            Some(outcome)
        }
        None => None,
    };

    Ok(Html(render_page(outcome.as_ref())))
}

/// Fallback for unknown routes
pub async fn not_found(method: Method, uri: Uri) -> AppError {
    AppError::not_found(format!("No route for {} {}", method, uri.path()))
}
