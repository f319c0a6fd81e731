use std::time::Instant;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
struct RootHealth {
    status: &'static str,
    version: &'static str,
}

#[derive(Serialize)]
struct ApiHealth {
    status: &'static str,
    version: &'static str,
    database: DatabaseHealth,
}

#[derive(Serialize)]
struct DatabaseHealth {
    connected: bool,
    latency_ms: u128,
}

/// `GET /health`
pub fn root_router() -> Router<AppState> {
    Router::new().route("/health", get(root_health))
}

/// `GET /api/v1/health`
pub fn api_router() -> Router<AppState> {
    Router::new().route("/health", get(api_health))
}

async fn root_health() -> Json<RootHealth> {
    Json(RootHealth {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn api_health(State(state): State<AppState>) -> Json<ApiHealth> {
    let started = Instant::now();
    let connected = match state.db.ping().await {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!("Database ping failed: {err}");
            false
        }
    };

    Json(ApiHealth {
        status: if connected { "healthy" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        database: DatabaseHealth {
            connected,
            latency_ms: started.elapsed().as_millis(),
        },
    })
}
