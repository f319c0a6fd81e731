use serde::Serialize;

use crate::entities::user;

/// Public view of an account. Never carries the credential hash.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub date_joined: String,
    pub postpartum_months: i32,
    pub is_admin: bool,
}

impl From<&user::Model> for UserResponse {
    fn from(u: &user::Model) -> Self {
        Self {
            id: u.id,
            username: u.username.clone(),
            email: u.email.clone(),
            full_name: u.full_name.clone(),
            date_joined: u.date_joined.to_rfc3339(),
            postpartum_months: u.postpartum_months,
            is_admin: u.is_admin,
        }
    }
}

impl From<user::Model> for UserResponse {
    fn from(u: user::Model) -> Self {
        Self::from(&u)
    }
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub user: UserResponse,
    pub token: String,
}

/// Acknowledgement for an activity-log write.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggedResponse {
    pub success: bool,
    pub id: i32,
    pub message: String,
}

impl LoggedResponse {
    #[must_use]
    pub fn new(id: i32, message: &str) -> Self {
        Self {
            success: true,
            id,
            message: message.to_string(),
        }
    }
}
