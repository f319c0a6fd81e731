use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, patch};
use axum::{Json, Router};

use crate::auth::middleware::CurrentSession;
use crate::dto::UserResponse;
use crate::dto::admin::{
    CreateExerciseVideoRequest, CreateMentalTipRequest, CreateRecoveryTipRequest,
    CreateTipRequest, CreateWellnessResourceRequest, UpdateExerciseVideoRequest,
    UpdateMentalTipRequest, UpdateRecoveryTipRequest, UpdateTipRequest, UpdateUserRequest,
    UpdateWellnessResourceRequest,
};
use crate::entities::{
    exercise, exercise_video, mental_tip, progress_entry, recovery_tip, tip, wellness_entry,
    wellness_resource,
};
use crate::error::AppError;
use crate::state::AppState;

// ─────────────────────────────────────────────────────────────────────────────
// Router
// ─────────────────────────────────────────────────────────────────────────────

/// Build the admin route group: `/admin/...`
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users))
        .route("/users/{id}", patch(update_user))
        .route("/mental-tips", get(list_mental_tips).post(create_mental_tip))
        .route(
            "/mental-tips/{id}",
            patch(update_mental_tip).delete(delete_mental_tip),
        )
        .route(
            "/recovery-tips",
            get(list_recovery_tips).post(create_recovery_tip),
        )
        .route(
            "/recovery-tips/{id}",
            patch(update_recovery_tip).delete(delete_recovery_tip),
        )
        .route(
            "/wellness-resources",
            get(list_wellness_resources).post(create_wellness_resource),
        )
        .route(
            "/wellness-resources/{id}",
            patch(update_wellness_resource).delete(delete_wellness_resource),
        )
        .route(
            "/exercise-videos",
            get(list_exercise_videos).post(create_exercise_video),
        )
        .route(
            "/exercise-videos/{id}",
            patch(update_exercise_video).delete(delete_exercise_video),
        )
        .route("/tips", get(list_tips).post(create_tip))
        .route("/tips/{id}", patch(update_tip).delete(delete_tip))
        .route("/exercises", get(list_exercises))
        .route("/exercises/{id}", delete(delete_exercise))
        .route("/wellness-entries", get(list_wellness_entries))
        .route("/progress-entries", get(list_progress_entries))
}

// ─────────────────────────────────────────────────────────────────────────────
// Users
// ─────────────────────────────────────────────────────────────────────────────

/// `GET /admin/users`
async fn list_users(
    State(state): State<AppState>,
    CurrentSession { session, .. }: CurrentSession,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = state.admin().list_users(&session).await?;
    Ok(Json(users.iter().map(UserResponse::from).collect()))
}

/// `PATCH /admin/users/{id}`
async fn update_user(
    State(state): State<AppState>,
    CurrentSession { session, .. }: CurrentSession,
    Path(id): Path<i32>,
    Json(body): Json<UpdateUserRequest>,
) -> Result<Json<UserResponse>, AppError> {
    let updated = state.admin().update_user(&session, id, body).await?;
    Ok(Json(updated.into()))
}

// ─────────────────────────────────────────────────────────────────────────────
// Mental tips
// ─────────────────────────────────────────────────────────────────────────────

async fn list_mental_tips(
    State(state): State<AppState>,
    CurrentSession { session, .. }: CurrentSession,
) -> Result<Json<Vec<mental_tip::Model>>, AppError> {
    Ok(Json(state.admin().list_mental_tips(&session).await?))
}

async fn create_mental_tip(
    State(state): State<AppState>,
    CurrentSession { session, .. }: CurrentSession,
    Json(body): Json<CreateMentalTipRequest>,
) -> Result<(StatusCode, Json<mental_tip::Model>), AppError> {
    let created = state.admin().create_mental_tip(&session, body).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update_mental_tip(
    State(state): State<AppState>,
    CurrentSession { session, .. }: CurrentSession,
    Path(id): Path<i32>,
    Json(body): Json<UpdateMentalTipRequest>,
) -> Result<Json<mental_tip::Model>, AppError> {
    Ok(Json(
        state.admin().update_mental_tip(&session, id, body).await?,
    ))
}

async fn delete_mental_tip(
    State(state): State<AppState>,
    CurrentSession { session, .. }: CurrentSession,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    state.admin().delete_mental_tip(&session, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ─────────────────────────────────────────────────────────────────────────────
// Recovery tips
// ─────────────────────────────────────────────────────────────────────────────

async fn list_recovery_tips(
    State(state): State<AppState>,
    CurrentSession { session, .. }: CurrentSession,
) -> Result<Json<Vec<recovery_tip::Model>>, AppError> {
    Ok(Json(state.admin().list_recovery_tips(&session).await?))
}

async fn create_recovery_tip(
    State(state): State<AppState>,
    CurrentSession { session, .. }: CurrentSession,
    Json(body): Json<CreateRecoveryTipRequest>,
) -> Result<(StatusCode, Json<recovery_tip::Model>), AppError> {
    let created = state.admin().create_recovery_tip(&session, body).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update_recovery_tip(
    State(state): State<AppState>,
    CurrentSession { session, .. }: CurrentSession,
    Path(id): Path<i32>,
    Json(body): Json<UpdateRecoveryTipRequest>,
) -> Result<Json<recovery_tip::Model>, AppError> {
    Ok(Json(
        state
            .admin()
            .update_recovery_tip(&session, id, body)
            .await?,
    ))
}

async fn delete_recovery_tip(
    State(state): State<AppState>,
    CurrentSession { session, .. }: CurrentSession,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    state.admin().delete_recovery_tip(&session, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ─────────────────────────────────────────────────────────────────────────────
// Wellness resources
// ─────────────────────────────────────────────────────────────────────────────

async fn list_wellness_resources(
    State(state): State<AppState>,
    CurrentSession { session, .. }: CurrentSession,
) -> Result<Json<Vec<wellness_resource::Model>>, AppError> {
    Ok(Json(state.admin().list_wellness_resources(&session).await?))
}

async fn create_wellness_resource(
    State(state): State<AppState>,
    CurrentSession { session, .. }: CurrentSession,
    Json(body): Json<CreateWellnessResourceRequest>,
) -> Result<(StatusCode, Json<wellness_resource::Model>), AppError> {
    let created = state
        .admin()
        .create_wellness_resource(&session, body)
        .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update_wellness_resource(
    State(state): State<AppState>,
    CurrentSession { session, .. }: CurrentSession,
    Path(id): Path<i32>,
    Json(body): Json<UpdateWellnessResourceRequest>,
) -> Result<Json<wellness_resource::Model>, AppError> {
    Ok(Json(
        state
            .admin()
            .update_wellness_resource(&session, id, body)
            .await?,
    ))
}

async fn delete_wellness_resource(
    State(state): State<AppState>,
    CurrentSession { session, .. }: CurrentSession,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    state.admin().delete_wellness_resource(&session, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ─────────────────────────────────────────────────────────────────────────────
// Exercise videos
// ─────────────────────────────────────────────────────────────────────────────

async fn list_exercise_videos(
    State(state): State<AppState>,
    CurrentSession { session, .. }: CurrentSession,
) -> Result<Json<Vec<exercise_video::Model>>, AppError> {
    Ok(Json(state.admin().list_exercise_videos(&session).await?))
}

async fn create_exercise_video(
    State(state): State<AppState>,
    CurrentSession { session, .. }: CurrentSession,
    Json(body): Json<CreateExerciseVideoRequest>,
) -> Result<(StatusCode, Json<exercise_video::Model>), AppError> {
    let created = state.admin().create_exercise_video(&session, body).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update_exercise_video(
    State(state): State<AppState>,
    CurrentSession { session, .. }: CurrentSession,
    Path(id): Path<i32>,
    Json(body): Json<UpdateExerciseVideoRequest>,
) -> Result<Json<exercise_video::Model>, AppError> {
    Ok(Json(
        state
            .admin()
            .update_exercise_video(&session, id, body)
            .await?,
    ))
}

async fn delete_exercise_video(
    State(state): State<AppState>,
    CurrentSession { session, .. }: CurrentSession,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    state.admin().delete_exercise_video(&session, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ─────────────────────────────────────────────────────────────────────────────
// General tips
// ─────────────────────────────────────────────────────────────────────────────

async fn list_tips(
    State(state): State<AppState>,
    CurrentSession { session, .. }: CurrentSession,
) -> Result<Json<Vec<tip::Model>>, AppError> {
    Ok(Json(state.admin().list_tips(&session).await?))
}

async fn create_tip(
    State(state): State<AppState>,
    CurrentSession { session, .. }: CurrentSession,
    Json(body): Json<CreateTipRequest>,
) -> Result<(StatusCode, Json<tip::Model>), AppError> {
    let created = state.admin().create_tip(&session, body).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update_tip(
    State(state): State<AppState>,
    CurrentSession { session, .. }: CurrentSession,
    Path(id): Path<i32>,
    Json(body): Json<UpdateTipRequest>,
) -> Result<Json<tip::Model>, AppError> {
    Ok(Json(state.admin().update_tip(&session, id, body).await?))
}

async fn delete_tip(
    State(state): State<AppState>,
    CurrentSession { session, .. }: CurrentSession,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    state.admin().delete_tip(&session, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ─────────────────────────────────────────────────────────────────────────────
// Activity
// ─────────────────────────────────────────────────────────────────────────────

async fn list_exercises(
    State(state): State<AppState>,
    CurrentSession { session, .. }: CurrentSession,
) -> Result<Json<Vec<exercise::Model>>, AppError> {
    Ok(Json(state.admin().list_exercises(&session).await?))
}

async fn delete_exercise(
    State(state): State<AppState>,
    CurrentSession { session, .. }: CurrentSession,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    state.admin().delete_exercise(&session, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn list_wellness_entries(
    State(state): State<AppState>,
    CurrentSession { session, .. }: CurrentSession,
) -> Result<Json<Vec<wellness_entry::Model>>, AppError> {
    Ok(Json(state.admin().list_wellness_entries(&session).await?))
}

async fn list_progress_entries(
    State(state): State<AppState>,
    CurrentSession { session, .. }: CurrentSession,
) -> Result<Json<Vec<progress_entry::Model>>, AppError> {
    Ok(Json(state.admin().list_progress_entries(&session).await?))
}
