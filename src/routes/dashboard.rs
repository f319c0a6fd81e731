use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::auth::middleware::CurrentSession;
use crate::error::AppError;
use crate::services::wellness_service::DashboardView;
use crate::state::AppState;

/// Build the dashboard route: `/dashboard`
pub fn router() -> Router<AppState> {
    Router::new().route("/dashboard", get(dashboard))
}

/// `GET /dashboard`
async fn dashboard(
    State(state): State<AppState>,
    CurrentSession { session, .. }: CurrentSession,
) -> Result<Json<DashboardView>, AppError> {
    Ok(Json(state.wellness().dashboard(&session).await?))
}
