//! JSON bodies for the administrative catalog and user endpoints.
//!
//! `Update*` bodies are partial: absent fields keep their stored value.

use serde::Deserialize;

use crate::entities::RecoveryStage;
use crate::error::ServiceError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMentalTipRequest {
    pub month_relation: i32,
    pub tip_content: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMentalTipRequest {
    pub month_relation: Option<i32>,
    pub tip_content: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecoveryTipRequest {
    pub title: String,
    pub content: String,
    pub recovery_stage: String,
    pub is_active: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRecoveryTipRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub recovery_stage: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWellnessResourceRequest {
    pub title: String,
    pub content: String,
    pub resource_type: String,
    pub mood_category: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWellnessResourceRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub resource_type: Option<String>,
    pub mood_category: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateExerciseVideoRequest {
    pub exercise_type: String,
    pub title: String,
    pub video_url: String,
    pub description: Option<String>,
    pub difficulty_level: Option<String>,
    pub duration: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateExerciseVideoRequest {
    pub exercise_type: Option<String>,
    pub title: Option<String>,
    pub video_url: Option<String>,
    pub description: Option<String>,
    pub difficulty_level: Option<String>,
    pub duration: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTipRequest {
    pub title: String,
    pub content: String,
    pub category: String,
    pub is_active: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTipRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub is_active: Option<bool>,
}

/// Admin-side user edit. Unlike self-service profile updates this may change `is_admin`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub full_name: Option<String>,
    pub postpartum_months: Option<i32>,
    pub is_admin: Option<bool>,
}

/// Parse a recovery stage tag as submitted by an admin.
///
/// # Errors
///
/// Returns a validation error unless the tag is exactly `Early`, `Mid` or `Late`.
pub fn parse_stage(tag: &str) -> Result<RecoveryStage, ServiceError> {
    RecoveryStage::from_str(tag).ok_or_else(|| {
        ServiceError::Validation("Recovery stage must be one of Early, Mid or Late.".to_string())
    })
}

/// Reject blank required text in admin bodies.
///
/// # Errors
///
/// Returns a validation error naming the field when it is blank.
pub fn non_blank(value: &str, field: &str) -> Result<(), ServiceError> {
    if value.trim().is_empty() {
        return Err(ServiceError::Validation(format!("{field} cannot be empty.")));
    }
    Ok(())
}
