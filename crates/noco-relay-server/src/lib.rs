pub mod config;
pub mod cookie;
pub mod error;
pub mod handlers;
pub mod server;
pub mod store;

use std::sync::Arc;

/// Shared application state threaded through axum handlers.
#[derive(Clone)]
pub struct AppState {
    /// Backend location and key, loaded once at startup.
    pub config: Arc<config::RuntimeConfig>,
    pub profiles: Arc<store::ProfileStore>,
}

impl AppState {
    pub fn new(config: config::RuntimeConfig) -> Self {
        Self {
            config: Arc::new(config),
            profiles: Arc::new(store::ProfileStore::new()),
        }
    }
}

pub use config::{RuntimeConfig, ServerConfig};
pub use server::{router, run};
