use axum::{
    extract::State,
    http::header::SET_COOKIE,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::info;

use crate::{cookie, error::ApiError, AppState};

pub const COOKIE_SET_MESSAGE: &str = "Cookie has been set!";

// ── Health ────────────────────────────────────────────────────────────────────

pub async fn health() -> impl IntoResponse {
    Json(json!({"status": "ok"}))
}

// ── Cookie issuance ───────────────────────────────────────────────────────────

/// Attaches the backend credential cookie to the response. Every caller that
/// reaches this route receives it.
pub async fn set_server_data(State(state): State<AppState>) -> Result<Response, ApiError> {
    let issued = cookie::build_cookie(&state.config);
    let header = cookie::set_cookie_header(&issued)?;

    info!(cookie = cookie::COOKIE_NAME, "audit: cookie.issue");
    Ok((
        [(SET_COOKIE, header)],
        Json(json!({"message": COOKIE_SET_MESSAGE})),
    )
        .into_response())
}

// ── Public runtime config ─────────────────────────────────────────────────────

pub async fn public_config(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({"public": state.config.public()}))
}

// ── Stores ────────────────────────────────────────────────────────────────────

pub async fn profile_store(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.profiles.snapshot())
}
