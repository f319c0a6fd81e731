use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use sea_orm::EntityTrait;

use crate::auth::bearer_token;
use crate::entities::user;
use crate::error::AppError;
use crate::sessions::Session;
use crate::state::AppState;

/// Session resolved from the `Authorization: Bearer <token>` header.
///
/// Never rejects a request for missing or unknown tokens; those resolve to
/// [`Session::Anonymous`] and the gated operation decides. A token whose user no longer
/// exists is closed here and treated as anonymous.
/// ```ignore
/// async fn handler(CurrentSession { session, .. }: CurrentSession) -> impl IntoResponse { ... }
/// ```
#[derive(Debug, Clone, Default)]
pub struct CurrentSession {
    pub token: Option<String>,
    pub session: Session,
}

impl FromRequestParts<AppState> for CurrentSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(token) = bearer_token(&parts.headers) else {
            return Ok(Self::default());
        };

        let session = state.sessions.resolve(&token);
        let Some(user_id) = session.user_id() else {
            return Ok(Self::default());
        };

        if user::Entity::find_by_id(user_id)
            .one(&state.db)
            .await?
            .is_none()
        {
            state.sessions.close_all_for(user_id);
            tracing::info!(user_id, "Closed sessions for missing user");
            return Ok(Self::default());
        }

        Ok(Self {
            token: Some(token),
            session,
        })
    }
}
