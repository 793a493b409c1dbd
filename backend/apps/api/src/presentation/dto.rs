//! API DTOs (Data Transfer Objects)

use serde::Serialize;
use std::collections::BTreeMap;
use validators::{Field, User};

/// Response for GET /
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
}

/// 200 response for POST /users
#[derive(Debug, Clone, Serialize)]
pub struct ValidateUserSuccess {
    pub success: bool,
    pub message: &'static str,
    pub data: User,
}

/// 400 response for POST /users
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateUserFailure {
    pub success: bool,
    pub errors: BTreeMap<Field, Vec<String>>,
    /// Only present when the body as a whole was rejected (e.g. not an object)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub form_errors: Vec<String>,
}
