mod admin;
mod auth;
mod dashboard;
mod exercise;
mod health;
mod mental_wellness;
mod profile;
mod recovery;

use axum::Router;

use crate::state::AppState;

/// Build the complete application router.
///
/// Structure:
/// - `GET /health` lightweight liveness check
/// - `GET /api/v1/health` health check with database connectivity
/// - `/api/v1/auth/...` registration, login, logout
/// - `/api/v1/{profile,dashboard,exercise,recovery,mental-wellness}` session-gated pages
/// - `/api/v1/admin/...` catalog, account and activity maintenance
pub fn router() -> Router<AppState> {
    let api_v1 = Router::new()
        .merge(health::api_router())
        .nest("/auth", auth::router())
        .merge(profile::router())
        .merge(dashboard::router())
        .merge(exercise::router())
        .merge(recovery::router())
        .merge(mental_wellness::router())
        .nest("/admin", admin::router());

    Router::new()
        .merge(health::root_router())
        .nest("/api/v1", api_v1)
}
