//! Credential cookie handed to the browser so it can address the NocoDB
//! backend on its own.
//!
//! The logical value is `base=<BASE_URL>;plk=<API_KEY>`. Because it contains
//! `;` and `=`, it is percent-encoded on the wire; decoding the header yields
//! the logical value unchanged.

use axum_extra::extract::cookie::{Cookie, SameSite};
use http::HeaderValue;

use crate::{config::RuntimeConfig, error::ApiError};

pub const COOKIE_NAME: &str = "myCookie";

/// `base=<BASE_URL>;plk=<API_KEY>`. Empty inputs leave empty segments.
pub fn cookie_value(base_url: &str, api_key: &str) -> String {
    format!("base={base_url};plk={api_key}")
}

/// Site-wide, script-inaccessible, HTTPS-only, same-site-strict.
pub fn build_cookie(config: &RuntimeConfig) -> Cookie<'static> {
    Cookie::build((
        COOKIE_NAME,
        cookie_value(config.base_url(), config.api_key()),
    ))
    .path("/")
    .http_only(true)
    .secure(true)
    .same_site(SameSite::Strict)
    .build()
}

pub fn set_cookie_header(cookie: &Cookie<'_>) -> Result<HeaderValue, ApiError> {
    Ok(HeaderValue::from_str(&cookie.encoded().to_string())?)
}
