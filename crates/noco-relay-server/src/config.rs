use std::fmt;

use serde::Serialize;
use tracing::warn;
use zeroize::{Zeroize, ZeroizeOnDrop};

pub const BASE_URL_ENV: &str = "NOCODB_BASEURL";
pub const API_KEY_ENV: &str = "NOCODB_APIKEY";

// ── Scopes ────────────────────────────────────────────────────────────────────

/// Values that may reach client-side code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PublicConfig {
    #[serde(rename = "NOCODB_BASEURL")]
    pub base_url: String,
}

/// Server-only values. Never serialized; wiped from memory on drop.
#[derive(Clone, Default, Zeroize, ZeroizeOnDrop)]
pub struct PrivateConfig {
    api_key: String,
}

impl fmt::Debug for PrivateConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateConfig")
            .field("api_key", &"<redacted>")
            .finish()
    }
}

// ── RuntimeConfig ─────────────────────────────────────────────────────────────

/// Backend location and credentials, read once at startup and shared
/// read-only for the lifetime of the process.
#[derive(Debug, Clone, Default)]
pub struct RuntimeConfig {
    public: PublicConfig,
    private: PrivateConfig,
}

impl RuntimeConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            public: PublicConfig {
                base_url: base_url.into(),
            },
            private: PrivateConfig {
                api_key: api_key.into(),
            },
        }
    }

    /// Reads `NOCODB_BASEURL` and `NOCODB_APIKEY` from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from an arbitrary variable lookup. Missing values
    /// become empty strings; they are reported but do not abort startup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(BASE_URL_ENV).unwrap_or_default();
        let api_key = lookup(API_KEY_ENV).unwrap_or_default();

        if base_url.is_empty() {
            warn!(var = BASE_URL_ENV, "backend base URL is not set");
        }
        if api_key.is_empty() {
            warn!(var = API_KEY_ENV, "backend API key is not set");
        }

        Self::new(base_url, api_key)
    }

    pub fn base_url(&self) -> &str {
        &self.public.base_url
    }

    pub fn api_key(&self) -> &str {
        &self.private.api_key
    }

    /// The client-visible half of the configuration.
    pub fn public(&self) -> &PublicConfig {
        &self.public
    }
}

// ── ServerConfig ──────────────────────────────────────────────────────────────

/// Listener settings plus the runtime config. The daemon fills these from
/// CLI flags and their env fallbacks.
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors_origins: Option<String>,
    pub runtime: RuntimeConfig,
}
