use axum::extract::State;
use axum::extract::rejection::FormRejection;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Form, Json, Router};

use crate::auth::middleware::CurrentSession;
use crate::dto::{LoggedResponse, WellnessForm};
use crate::error::AppError;
use crate::services::wellness_service::MentalWellnessView;
use crate::state::AppState;

/// Build the mental wellness route group: `/mental-wellness/...`
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/mental-wellness", get(mental_wellness))
        .route("/mental-wellness/log", post(log_wellness))
}

/// `GET /mental-wellness`
async fn mental_wellness(
    State(state): State<AppState>,
    CurrentSession { session, .. }: CurrentSession,
) -> Result<Json<MentalWellnessView>, AppError> {
    Ok(Json(state.wellness().mental_wellness(&session).await?))
}

/// `POST /mental-wellness/log`
///
/// A blank `sleep_hours` is stored as absent.
async fn log_wellness(
    State(state): State<AppState>,
    CurrentSession { session, .. }: CurrentSession,
    form: Result<Form<WellnessForm>, FormRejection>,
) -> Result<(StatusCode, Json<LoggedResponse>), AppError> {
    session.require_user()?;
    let Form(form) = form?;
    let entry = form.validate()?;
    let id = state.activity().log_wellness(&session, entry).await?;
    Ok((
        StatusCode::CREATED,
        Json(LoggedResponse::new(id, "Wellness entry logged successfully!")),
    ))
}
