//! Router for the chat API

use std::sync::Arc;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};

use super::public;
use crate::api::state::AppState;
use crate::session::SessionState;

type SharedState = Arc<AppState>;

/// Run one chat turn. External failures inside the reply step surface as
/// a normal reply describing the error; only using the endpoint before
/// the form is completed or skipped is rejected.
async fn send_message(
    State(state): State<SharedState>,
    axum::Json(payload): axum::Json<public::ChatRequest>,
) -> Result<impl IntoResponse, crate::api::public::ApiError> {
    if payload.message.trim().is_empty() {
        return Ok(
            (StatusCode::UNPROCESSABLE_ENTITY, "Message must not be empty").into_response(),
        );
    }

    let mut session = state.session.lock().await;
    if session.state != SessionState::Chat {
        return Ok((
            StatusCode::CONFLICT,
            "The profile form must be completed or skipped before chatting",
        )
            .into_response());
    }

    let reply = session.send_message(&state.config, &payload.message).await?;
    Ok(axum::Json(public::ChatResponse { reply }).into_response())
}

/// The full stored transcript; windowing never truncates what is shown.
async fn transcript(State(state): State<SharedState>) -> impl IntoResponse {
    let session = state.session.lock().await;
    axum::Json(public::TranscriptResponse {
        turns: session.transcript().turns().to_vec(),
    })
}

/// Create the chat router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/", post(send_message))
        .route("/transcript", get(transcript))
}
