use axum::http::header::SET_COOKIE;
use axum_extra::extract::cookie::{Cookie, SameSite};
use axum_test::{TestResponse, TestServer};
use noco_relay_server::{cookie::COOKIE_NAME, router, AppState, RuntimeConfig};
use serde_json::{json, Value};

fn server(base_url: &str, api_key: &str) -> TestServer {
    let state = AppState::new(RuntimeConfig::new(base_url, api_key));
    TestServer::new(router(state, None)).unwrap()
}

fn issued_cookie(response: &TestResponse) -> Cookie<'static> {
    let header = response.header(SET_COOKIE);
    Cookie::parse_encoded(header.to_str().unwrap().to_owned()).unwrap()
}

#[tokio::test]
async fn issues_cookie_with_backend_credentials() {
    let server = server("https://api.example.com", "abc123");

    let response = server.get("/api/set-server-data").await;
    response.assert_status_ok();
    response.assert_json(&json!({"message": "Cookie has been set!"}));

    let cookie = issued_cookie(&response);
    assert_eq!(cookie.name(), COOKIE_NAME);
    assert_eq!(cookie.value(), "base=https://api.example.com;plk=abc123");
    assert_eq!(cookie.path(), Some("/"));
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.secure(), Some(true));
    assert_eq!(cookie.same_site(), Some(SameSite::Strict));
}

#[tokio::test]
async fn unset_config_renders_empty_segments() {
    let server = server("", "");

    let response = server.get("/api/set-server-data").await;
    response.assert_status_ok();
    assert_eq!(issued_cookie(&response).value(), "base=;plk=");
}

#[tokio::test]
async fn missing_base_url_keeps_key_segment() {
    let server = server("", "SECRET");

    let response = server.post("/api/set-server-data").await;
    response.assert_status_ok();
    assert_eq!(issued_cookie(&response).value(), "base=;plk=SECRET");
}

#[tokio::test]
async fn repeated_calls_issue_identical_cookies() {
    let server = server("https://api.example.com", "abc123");

    let first = server.get("/api/set-server-data").await;
    let second = server.get("/api/set-server-data").await;
    assert_eq!(first.header(SET_COOKIE), second.header(SET_COOKIE));
}

#[tokio::test]
async fn any_method_is_accepted() {
    let server = server("https://api.example.com", "abc123");

    for response in [
        server.get("/api/set-server-data").await,
        server.post("/api/set-server-data").await,
        server.put("/api/set-server-data").await,
    ] {
        response.assert_status_ok();
        let cookie = issued_cookie(&response);
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(true));
    }
}

#[tokio::test]
async fn public_config_omits_api_key() {
    let server = server("https://api.example.com", "abc123");

    let response = server.get("/api/config").await;
    response.assert_status_ok();
    response.assert_json(&json!({"public": {"NOCODB_BASEURL": "https://api.example.com"}}));
    assert!(!response.text().contains("abc123"));
}

#[tokio::test]
async fn other_routes_do_not_set_cookies() {
    let server = server("https://api.example.com", "abc123");

    for path in ["/health", "/api/config", "/api/stores/profiles"] {
        let response = server.get(path).await;
        response.assert_status_ok();
        assert!(response.headers().get(SET_COOKIE).is_none(), "{path}");
    }
}

#[tokio::test]
async fn profile_store_snapshot_is_empty() {
    let server = server("https://api.example.com", "abc123");

    let body: Value = server.get("/api/stores/profiles").await.json();
    assert_eq!(
        body,
        json!({"id": "profiles", "state": {}, "getters": [], "actions": []})
    );
}

#[tokio::test]
async fn health_reports_ok() {
    let server = server("", "");

    server
        .get("/health")
        .await
        .assert_json(&json!({"status": "ok"}));
}
