use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::auth::middleware::CurrentSession;
use crate::error::AppError;
use crate::services::wellness_service::RecoveryView;
use crate::state::AppState;

/// Build the recovery route: `/recovery`
pub fn router() -> Router<AppState> {
    Router::new().route("/recovery", get(recovery))
}

/// `GET /recovery`
async fn recovery(
    State(state): State<AppState>,
    CurrentSession { session, .. }: CurrentSession,
) -> Result<Json<RecoveryView>, AppError> {
    Ok(Json(state.wellness().recovery(&session).await?))
}
