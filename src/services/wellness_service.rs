//! Personalized pages assembled from the account, its activity and the catalog.

use sea_orm::DatabaseConnection;
use serde::Serialize;

use crate::dto::UserResponse;
use crate::entities::{
    RecoveryStage, exercise, exercise_video, mental_tip, recovery_tip, wellness_entry,
    wellness_resource,
};
use crate::error::ServiceError;
use crate::personalization;
use crate::services::activity_service::{RECENT_EXERCISE_LIMIT, RECENT_WELLNESS_LIMIT};
use crate::services::{ActivityService, CatalogService, IdentityService};
use crate::sessions::Session;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub user: UserResponse,
    pub exercises: Vec<exercise::Model>,
    pub wellness_entries: Vec<wellness_entry::Model>,
    pub wellness_tips: Vec<mental_tip::Model>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseView {
    pub exercise_videos: Vec<exercise_video::Model>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideosView {
    pub exercise_type: String,
    pub videos: Vec<exercise_video::Model>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecoveryView {
    pub user: UserResponse,
    pub recovery_stage: RecoveryStage,
    pub recovery_tips: Vec<recovery_tip::Model>,
    pub all_recovery_tips: Vec<recovery_tip::Model>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MentalWellnessView {
    pub user: UserResponse,
    pub wellness_resources: Vec<wellness_resource::Model>,
    pub mental_tips: Vec<mental_tip::Model>,
}

#[derive(Debug, Clone)]
pub struct WellnessService {
    identity: IdentityService,
    activity: ActivityService,
    catalog: CatalogService,
}

impl WellnessService {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            identity: IdentityService::new(db.clone()),
            activity: ActivityService::new(db.clone()),
            catalog: CatalogService::new(db),
        }
    }

    /// # Errors
    ///
    /// `Unauthorized` without a session, `NotFound` if the user vanished.
    pub async fn dashboard(&self, session: &Session) -> Result<DashboardView, ServiceError> {
        let user = self.identity.current_user(session).await?;
        let exercises = self
            .activity
            .recent_exercises(session, RECENT_EXERCISE_LIMIT)
            .await?;
        let wellness_entries = self
            .activity
            .recent_wellness(session, RECENT_WELLNESS_LIMIT)
            .await?;
        let month_tips = self
            .catalog
            .mental_tips_for_month(user.postpartum_months)
            .await?;

        Ok(DashboardView {
            wellness_tips: personalization::eligible_mental_tips(
                &month_tips,
                user.postpartum_months,
            ),
            user: user.into(),
            exercises,
            wellness_entries,
        })
    }

    /// # Errors
    ///
    /// `Unauthorized` without a session.
    pub async fn exercise_page(&self, session: &Session) -> Result<ExerciseView, ServiceError> {
        session.require_user()?;
        let videos = self.catalog.active_videos(None).await?;
        Ok(ExerciseView {
            exercise_videos: personalization::eligible_videos(&videos, None),
        })
    }

    /// # Errors
    ///
    /// `Unauthorized` without a session.
    pub async fn videos_by_type(
        &self,
        session: &Session,
        exercise_type: &str,
    ) -> Result<VideosView, ServiceError> {
        session.require_user()?;
        let videos = self.catalog.active_videos(Some(exercise_type)).await?;
        Ok(VideosView {
            exercise_type: exercise_type.to_string(),
            videos: personalization::eligible_videos(&videos, Some(exercise_type)),
        })
    }

    /// # Errors
    ///
    /// `Unauthorized` without a session, `NotFound` if the user vanished.
    pub async fn recovery(&self, session: &Session) -> Result<RecoveryView, ServiceError> {
        let user = self.identity.current_user(session).await?;
        let stage = personalization::recovery_stage(user.postpartum_months);
        let tips = self.catalog.active_recovery_tips().await?;

        Ok(RecoveryView {
            user: user.into(),
            recovery_stage: stage,
            recovery_tips: personalization::eligible_recovery_tips(&tips, stage),
            all_recovery_tips: personalization::all_active_recovery_tips(&tips),
        })
    }

    /// # Errors
    ///
    /// `Unauthorized` without a session, `NotFound` if the user vanished.
    pub async fn mental_wellness(
        &self,
        session: &Session,
    ) -> Result<MentalWellnessView, ServiceError> {
        let user = self.identity.current_user(session).await?;
        let resources = self.catalog.active_wellness_resources().await?;
        let month_tips = self
            .catalog
            .mental_tips_for_month(user.postpartum_months)
            .await?;

        Ok(MentalWellnessView {
            mental_tips: personalization::eligible_mental_tips(&month_tips, user.postpartum_months),
            wellness_resources: personalization::eligible_wellness_resources(&resources),
            user: user.into(),
        })
    }
}
