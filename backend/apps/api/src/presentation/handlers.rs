//! HTTP Handlers

use crate::presentation::dto::{HealthResponse, ValidateUserFailure, ValidateUserSuccess};
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::{Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use kernel::error::app_error::{AppError, AppResult};
use serde_json::Value;

/// GET /
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        message: "API is running 🚀",
    })
}

/// POST /users
///
/// Any JSON body is accepted and handed to the shared validator. A body that
/// is not JSON at all is a transport error, not a validation failure.
pub async fn validate_user(body: Result<Json<Value>, JsonRejection>) -> AppResult<Response> {
    let Json(input) = body.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Rejected POST /users body");
        AppError::from(rejection)
    })?;

    let response = match validators::validate(&input) {
        Ok(user) => {
            tracing::info!("User validated successfully");
            (
                StatusCode::OK,
                Json(ValidateUserSuccess {
                    success: true,
                    message: "User validated successfully ✅",
                    data: user,
                }),
            )
                .into_response()
        }
        Err(errors) => {
            tracing::info!(errors = %errors, "User validation failed");
            let (form_errors, field_errors) = errors.into_parts();
            (
                StatusCode::BAD_REQUEST,
                Json(ValidateUserFailure {
                    success: false,
                    errors: field_errors,
                    form_errors,
                }),
            )
                .into_response()
        }
    };

    Ok(response)
}

/// Fallback for unknown routes
pub async fn not_found(method: Method, uri: Uri) -> AppError {
    AppError::not_found(format!("No route for {} {}", method, uri.path()))
}
