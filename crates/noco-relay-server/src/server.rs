use std::net::SocketAddr;

use anyhow::{Context, Result};
use axum::{
    routing::{any, get},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::{
    config::ServerConfig,
    handlers::{health, profile_store, public_config, set_server_data},
    AppState,
};

/// Builds the application router over the given state.
pub fn router(state: AppState, cors_origins: Option<&str>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/set-server-data", any(set_server_data))
        .route("/api/config", get(public_config))
        .route("/api/stores/profiles", get(profile_store))
        .with_state(state)
        .layer(build_cors(cors_origins))
        .layer(TraceLayer::new_for_http())
}

pub async fn run(cfg: ServerConfig) -> Result<()> {
    info!(base_url = %cfg.runtime.base_url(), "using backend");

    let state = AppState::new(cfg.runtime);
    let app = router(state, cfg.cors_origins.as_deref());

    let addr: SocketAddr = format!("{}:{}", cfg.host, cfg.port)
        .parse()
        .context("invalid host/port")?;

    info!(%addr, "noco-relay server listening");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("bind listener")?;

    axum::serve(listener, app).await.context("server error")
}

fn build_cors(origins: Option<&str>) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([
            http::Method::GET,
            http::Method::POST,
            http::Method::OPTIONS,
        ])
        .allow_headers(Any);

    match origins {
        Some(o) => {
            let origins: Vec<_> = o
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();
            cors.allow_origin(origins)
        }
        None => cors.allow_origin(Any),
    }
}
