//! Router for the profile intake API

use std::sync::Arc;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};

use super::public;
use crate::api::state::AppState;
use crate::profile::Profile;

type SharedState = Arc<AppState>;

/// Validate and submit the profile. A passing submission attempts the
/// notification email and moves the session to the chat screen; a failing
/// field keeps the form up with a field-specific warning.
async fn submit_profile(
    State(state): State<SharedState>,
    axum::Json(profile): axum::Json<Profile>,
) -> impl IntoResponse {
    let mut session = state.session.lock().await;

    match session.submit_profile(&state.config, profile).await {
        Ok(outcome) => axum::Json(public::SubmitResponse {
            state: session.state.as_str().to_string(),
            notification_error: outcome.notification_error,
        })
        .into_response(),
        Err(e) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            axum::Json(public::FieldWarning {
                field: e.field.to_string(),
                message: e.message,
            }),
        )
            .into_response(),
    }
}

/// Skip the form and go straight to chat.
async fn skip_form(State(state): State<SharedState>) -> impl IntoResponse {
    let mut session = state.session.lock().await;
    session.skip_form();

    axum::Json(public::SubmitResponse {
        state: session.state.as_str().to_string(),
        notification_error: None,
    })
}

/// Create the profile router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/", post(submit_profile))
        .route("/skip", post(skip_form))
}
