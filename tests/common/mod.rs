#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use nest_nourish::config::{AdminBootstrap, Config, Environment};
use nest_nourish::sessions::SessionStore;
use nest_nourish::state::AppState;

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "admin-password";

/// Application state backed by an in-memory `SQLite` database with migrations (and seed
/// catalog) applied.
pub async fn test_state() -> AppState {
    let db = nest_nourish::db::connect_and_migrate("sqlite::memory:")
        .await
        .unwrap_or_default();

    AppState {
        db,
        config: Config {
            database_url: String::new(),
            server_host: std::net::IpAddr::from([127, 0, 0, 1]),
            server_port: 0,
            environment: Environment::Development,
            log_level: "warn".to_string(),
            frontend_url: None,
            admin_bootstrap: None,
        },
        sessions: SessionStore::new(),
    }
}

pub fn app(state: &AppState) -> Router {
    nest_nourish::routes::router().with_state(state.clone())
}

/// Build the app router together with its state.
pub async fn test_app() -> (Router, AppState) {
    let state = test_state().await;
    (app(&state), state)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap_or_default();

    let status = response.status();
    let body = response
        .into_body()
        .collect()
        .await
        .map(http_body_util::Collected::to_bytes)
        .unwrap_or_default();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);

    (status, json)
}

fn builder(method: &str, uri: &str, token: Option<&str>) -> axum::http::request::Builder {
    let builder = Request::builder().method(method).uri(uri);
    match token {
        Some(token) => builder.header(header::AUTHORIZATION, format!("Bearer {token}")),
        None => builder,
    }
}

/// Test helper: send a GET request to the app and return (status, json body).
pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = builder("GET", uri, None)
        .body(Body::empty())
        .unwrap_or_default();
    send(app, request).await
}

pub async fn get_with_auth(app: &Router, uri: &str, token: &str) -> (StatusCode, Value) {
    let request = builder("GET", uri, Some(token))
        .body(Body::empty())
        .unwrap_or_default();
    send(app, request).await
}

pub async fn post_form(app: &Router, uri: &str, form: &str) -> (StatusCode, Value) {
    let request = builder("POST", uri, None)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap_or_default();
    send(app, request).await
}

pub async fn post_form_with_auth(
    app: &Router,
    uri: &str,
    form: &str,
    token: &str,
) -> (StatusCode, Value) {
    let request = builder("POST", uri, Some(token))
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap_or_default();
    send(app, request).await
}

pub async fn post_json(app: &Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    let request = builder("POST", uri, None)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap_or_default();
    send(app, request).await
}

pub async fn post_json_with_auth(
    app: &Router,
    uri: &str,
    body: &Value,
    token: &str,
) -> (StatusCode, Value) {
    let request = builder("POST", uri, Some(token))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap_or_default();
    send(app, request).await
}

pub async fn patch_json_with_auth(
    app: &Router,
    uri: &str,
    body: &Value,
    token: &str,
) -> (StatusCode, Value) {
    let request = builder("PATCH", uri, Some(token))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap_or_default();
    send(app, request).await
}

pub async fn delete_with_auth(app: &Router, uri: &str, token: &str) -> (StatusCode, Value) {
    let request = builder("DELETE", uri, Some(token))
        .body(Body::empty())
        .unwrap_or_default();
    send(app, request).await
}

/// Register `username` with a derived email and the password `password123`.
pub async fn register(app: &Router, username: &str) -> (StatusCode, Value) {
    let form = format!(
        "username={username}&email={username}@example.com&password=password123&full_name=Test+{username}"
    );
    post_form(app, "/api/v1/auth/register", &form).await
}

/// Log in and return the bearer token, or an empty string on failure.
pub async fn login(app: &Router, username: &str, password: &str) -> String {
    let form = format!("username={username}&password={password}");
    let (_, json) = post_form(app, "/api/v1/auth/login", &form).await;
    json["token"].as_str().unwrap_or_default().to_string()
}

/// Register and log in a regular user.
pub async fn register_and_login(app: &Router, username: &str) -> String {
    register(app, username).await;
    login(app, username, "password123").await
}

/// Ensure the bootstrap admin exists and log it in.
pub async fn admin_token(app: &Router, state: &AppState) -> String {
    let bootstrap = AdminBootstrap {
        username: ADMIN_USERNAME.to_string(),
        email: "admin@example.com".to_string(),
        password: ADMIN_PASSWORD.to_string(),
    };
    let _ = state.identity().ensure_admin(&bootstrap).await;
    login(app, ADMIN_USERNAME, ADMIN_PASSWORD).await
}
