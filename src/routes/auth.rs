use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Form, Json, Router};

use crate::auth::middleware::CurrentSession;
use crate::dto::{AuthResponse, LoginForm, RegisterForm, UserResponse};
use crate::error::AppError;
use crate::state::AppState;

// ─────────────────────────────────────────────────────────────────────────────
// Router
// ─────────────────────────────────────────────────────────────────────────────

/// Build the auth route group: `/auth/...`
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", post(logout))
}

// ─────────────────────────────────────────────────────────────────────────────
// Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// `POST /auth/register`
///
/// Creates the account without opening a session; the client logs in next.
async fn register(
    State(state): State<AppState>,
    Form(form): Form<RegisterForm>,
) -> Result<Response, AppError> {
    let new_user = form.validate()?;
    let created = state.identity().register(new_user).await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(created))).into_response())
}

/// `POST /auth/login`
async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Json<AuthResponse>, AppError> {
    let credentials = form.validate()?;
    let account = state.identity().authenticate(&credentials).await?;

    let token = state.sessions.open(account.id);
    tracing::info!(
        user_id = account.id,
        open_sessions = state.sessions.len(),
        "Session opened"
    );

    Ok(Json(AuthResponse {
        user: account.into(),
        token,
    }))
}

/// `POST /auth/logout`
///
/// Always succeeds; an anonymous caller simply has nothing to close.
async fn logout(
    State(state): State<AppState>,
    CurrentSession { token, session }: CurrentSession,
) -> StatusCode {
    if let Some(token) = token {
        state.sessions.close(&token);
        tracing::info!(user_id = ?session.user_id(), "Session closed");
    }
    StatusCode::NO_CONTENT
}
