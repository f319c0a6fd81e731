use axum::extract::rejection::FormRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Form, Json, Router};

use crate::auth::middleware::CurrentSession;
use crate::dto::{ExerciseForm, LoggedResponse, ProgressForm};
use crate::error::AppError;
use crate::services::wellness_service::{ExerciseView, VideosView};
use crate::state::AppState;

// ─────────────────────────────────────────────────────────────────────────────
// Router
// ─────────────────────────────────────────────────────────────────────────────

/// Build the exercise route group: `/exercise/...`
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/exercise", get(exercise_page))
        .route("/exercise/log", post(log_exercise))
        .route("/exercise/progress", post(log_progress))
        .route("/exercise/videos/{exercise_type}", get(videos_by_type))
}

// ─────────────────────────────────────────────────────────────────────────────
// Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// `GET /exercise`
async fn exercise_page(
    State(state): State<AppState>,
    CurrentSession { session, .. }: CurrentSession,
) -> Result<Json<ExerciseView>, AppError> {
    Ok(Json(state.wellness().exercise_page(&session).await?))
}

/// `GET /exercise/videos/{exercise_type}`
async fn videos_by_type(
    State(state): State<AppState>,
    CurrentSession { session, .. }: CurrentSession,
    Path(exercise_type): Path<String>,
) -> Result<Json<VideosView>, AppError> {
    Ok(Json(
        state
            .wellness()
            .videos_by_type(&session, &exercise_type)
            .await?,
    ))
}

/// `POST /exercise/log`
async fn log_exercise(
    State(state): State<AppState>,
    CurrentSession { session, .. }: CurrentSession,
    form: Result<Form<ExerciseForm>, FormRejection>,
) -> Result<(StatusCode, Json<LoggedResponse>), AppError> {
    session.require_user()?;
    let Form(form) = form?;
    let entry = form.validate()?;
    let id = state.activity().log_exercise(&session, entry).await?;
    Ok((
        StatusCode::CREATED,
        Json(LoggedResponse::new(id, "Exercise logged successfully!")),
    ))
}

/// `POST /exercise/progress`
async fn log_progress(
    State(state): State<AppState>,
    CurrentSession { session, .. }: CurrentSession,
    form: Result<Form<ProgressForm>, FormRejection>,
) -> Result<(StatusCode, Json<LoggedResponse>), AppError> {
    session.require_user()?;
    let Form(form) = form?;
    let entry = form.validate()?;
    let id = state.activity().log_progress(&session, entry).await?;
    Ok((
        StatusCode::CREATED,
        Json(LoggedResponse::new(id, "Progress logged successfully!")),
    ))
}
