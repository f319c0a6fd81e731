use axum::extract::State;
use axum::extract::rejection::FormRejection;
use axum::routing::get;
use axum::{Form, Json, Router};

use crate::auth::middleware::CurrentSession;
use crate::dto::{ProfileForm, UserResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Build the profile route group: `/profile`
pub fn router() -> Router<AppState> {
    Router::new().route("/profile", get(get_profile).post(update_profile))
}

/// `GET /profile`
async fn get_profile(
    State(state): State<AppState>,
    CurrentSession { session, .. }: CurrentSession,
) -> Result<Json<UserResponse>, AppError> {
    let account = state.identity().current_user(&session).await?;
    Ok(Json(account.into()))
}

/// `POST /profile`
///
/// Blank or missing fields keep their stored values.
async fn update_profile(
    State(state): State<AppState>,
    CurrentSession { session, .. }: CurrentSession,
    form: Result<Form<ProfileForm>, FormRejection>,
) -> Result<Json<UserResponse>, AppError> {
    session.require_user()?;
    let Form(form) = form?;
    let update = form.validate()?;
    let account = state.identity().update_profile(&session, update).await?;
    Ok(Json(account.into()))
}
