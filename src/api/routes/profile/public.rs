//! Public types for the profile intake API
use serde::Serialize;

#[derive(Serialize)]
pub struct SubmitResponse {
    pub state: String,
    pub notification_error: Option<String>,
}

/// A validation failure for one specific field.
#[derive(Serialize)]
pub struct FieldWarning {
    pub field: String,
    pub message: String,
}
