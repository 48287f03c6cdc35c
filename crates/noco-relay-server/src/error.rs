use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The serialized cookie could not be carried in a `Set-Cookie` header.
    #[error("cookie could not be attached: {0}")]
    CookieHeader(#[from] http::header::InvalidHeaderValue),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "failed to set cookie");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "cookie could not be set"})),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_as_internal_server_error() {
        let err: ApiError = http::HeaderValue::from_str("bad\nvalue").unwrap_err().into();
        let resp = err.into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
