//! Administrative maintenance of the catalog, accounts and activity records.
//!
//! Every operation first checks that the session belongs to an admin. Listings include
//! inactive catalog rows.

use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, PrimaryKeyTrait, QueryOrder};

use crate::dto::admin::{
    CreateExerciseVideoRequest, CreateMentalTipRequest, CreateRecoveryTipRequest,
    CreateTipRequest, CreateWellnessResourceRequest, UpdateExerciseVideoRequest,
    UpdateMentalTipRequest, UpdateRecoveryTipRequest, UpdateTipRequest, UpdateUserRequest,
    UpdateWellnessResourceRequest, non_blank, parse_stage,
};
use crate::dto::forms::validate_postpartum_months;
use crate::entities::{
    exercise, exercise_video, mental_tip, progress_entry, recovery_tip, tip, user,
    wellness_entry, wellness_resource,
};
use crate::error::ServiceError;
use crate::sessions::Session;

const DEFAULT_DIFFICULTY: &str = "Beginner";

#[derive(Debug, Clone)]
pub struct AdminService {
    db: DatabaseConnection,
}

impl AdminService {
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Resolve the session to an admin account.
    ///
    /// # Errors
    ///
    /// `Unauthorized` for anonymous or stale sessions, `Forbidden` for non-admins.
    pub async fn require_admin(&self, session: &Session) -> Result<user::Model, ServiceError> {
        let user_id = session.require_user()?;
        let account = user::Entity::find_by_id(user_id)
            .one(&self.db)
            .await?
            .ok_or(ServiceError::Unauthorized)?;
        if !account.is_admin {
            tracing::warn!(user_id, "Non-admin attempted admin operation");
            return Err(ServiceError::Forbidden);
        }
        Ok(account)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Users
    // ─────────────────────────────────────────────────────────────────────────

    /// # Errors
    ///
    /// `Unauthorized`/`Forbidden` for non-admin sessions.
    pub async fn list_users(&self, session: &Session) -> Result<Vec<user::Model>, ServiceError> {
        self.require_admin(session).await?;
        Ok(user::Entity::find()
            .order_by_asc(user::Column::Id)
            .all(&self.db)
            .await?)
    }

    /// # Errors
    ///
    /// `NotFound` for an unknown user, `Validation` for blank names or negative months.
    pub async fn update_user(
        &self,
        session: &Session,
        id: i32,
        body: UpdateUserRequest,
    ) -> Result<user::Model, ServiceError> {
        let admin = self.require_admin(session).await?;
        let existing = user::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(ServiceError::NotFound("User"))?;

        let mut active: user::ActiveModel = existing.clone().into();
        if let Some(full_name) = body.full_name {
            non_blank(&full_name, "Full name")?;
            active.full_name = Set(full_name);
        }
        if let Some(months) = body.postpartum_months {
            validate_postpartum_months(months)?;
            active.postpartum_months = Set(months);
        }
        if let Some(is_admin) = body.is_admin {
            active.is_admin = Set(is_admin);
        }

        if !active.is_changed() {
            return Ok(existing);
        }
        let updated = active.update(&self.db).await?;
        tracing::info!(
            admin_id = admin.id,
            user_id = updated.id,
            is_admin = updated.is_admin,
            "User updated by admin"
        );
        Ok(updated)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mental tips
    // ─────────────────────────────────────────────────────────────────────────

    /// # Errors
    ///
    /// `Unauthorized`/`Forbidden` for non-admin sessions.
    pub async fn list_mental_tips(
        &self,
        session: &Session,
    ) -> Result<Vec<mental_tip::Model>, ServiceError> {
        self.require_admin(session).await?;
        Ok(mental_tip::Entity::find()
            .order_by_asc(mental_tip::Column::Id)
            .all(&self.db)
            .await?)
    }

    /// # Errors
    ///
    /// `Validation` for blank content or a negative month.
    pub async fn create_mental_tip(
        &self,
        session: &Session,
        body: CreateMentalTipRequest,
    ) -> Result<mental_tip::Model, ServiceError> {
        self.require_admin(session).await?;
        non_blank(&body.tip_content, "Tip content")?;
        validate_postpartum_months(body.month_relation)?;

        let created = mental_tip::ActiveModel {
            month_relation: Set(body.month_relation),
            tip_content: Set(body.tip_content),
            date_created: Set(Utc::now().fixed_offset()),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;
        tracing::info!(
            mental_tip_id = created.id,
            month = created.month_relation,
            "Mental tip created"
        );
        Ok(created)
    }

    /// # Errors
    ///
    /// `NotFound` for an unknown tip, `Validation` for invalid fields.
    pub async fn update_mental_tip(
        &self,
        session: &Session,
        id: i32,
        body: UpdateMentalTipRequest,
    ) -> Result<mental_tip::Model, ServiceError> {
        self.require_admin(session).await?;
        let existing = mental_tip::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(ServiceError::NotFound("Mental tip"))?;

        let mut active: mental_tip::ActiveModel = existing.clone().into();
        if let Some(month) = body.month_relation {
            validate_postpartum_months(month)?;
            active.month_relation = Set(month);
        }
        if let Some(content) = body.tip_content {
            non_blank(&content, "Tip content")?;
            active.tip_content = Set(content);
        }

        if !active.is_changed() {
            return Ok(existing);
        }
        Ok(active.update(&self.db).await?)
    }

    /// # Errors
    ///
    /// `NotFound` for an unknown tip.
    pub async fn delete_mental_tip(&self, session: &Session, id: i32) -> Result<(), ServiceError> {
        self.require_admin(session).await?;
        self.remove::<mental_tip::Entity>(id, "Mental tip").await
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Recovery tips
    // ─────────────────────────────────────────────────────────────────────────

    /// # Errors
    ///
    /// `Unauthorized`/`Forbidden` for non-admin sessions.
    pub async fn list_recovery_tips(
        &self,
        session: &Session,
    ) -> Result<Vec<recovery_tip::Model>, ServiceError> {
        self.require_admin(session).await?;
        Ok(recovery_tip::Entity::find()
            .order_by_asc(recovery_tip::Column::Id)
            .all(&self.db)
            .await?)
    }

    /// # Errors
    ///
    /// `Validation` for blank text or an unknown stage tag.
    pub async fn create_recovery_tip(
        &self,
        session: &Session,
        body: CreateRecoveryTipRequest,
    ) -> Result<recovery_tip::Model, ServiceError> {
        self.require_admin(session).await?;
        non_blank(&body.title, "Title")?;
        non_blank(&body.content, "Content")?;
        let stage = parse_stage(&body.recovery_stage)?;

        let created = recovery_tip::ActiveModel {
            title: Set(body.title),
            content: Set(body.content),
            recovery_stage: Set(stage.as_str().to_string()),
            is_active: Set(body.is_active.unwrap_or(true)),
            created_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;
        tracing::info!(recovery_tip_id = created.id, stage = %stage, "Recovery tip created");
        Ok(created)
    }

    /// # Errors
    ///
    /// `NotFound` for an unknown tip, `Validation` for invalid fields.
    pub async fn update_recovery_tip(
        &self,
        session: &Session,
        id: i32,
        body: UpdateRecoveryTipRequest,
    ) -> Result<recovery_tip::Model, ServiceError> {
        self.require_admin(session).await?;
        let existing = recovery_tip::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(ServiceError::NotFound("Recovery tip"))?;

        let mut active: recovery_tip::ActiveModel = existing.clone().into();
        if let Some(title) = body.title {
            non_blank(&title, "Title")?;
            active.title = Set(title);
        }
        if let Some(content) = body.content {
            non_blank(&content, "Content")?;
            active.content = Set(content);
        }
        if let Some(tag) = body.recovery_stage {
            active.recovery_stage = Set(parse_stage(&tag)?.as_str().to_string());
        }
        if let Some(is_active) = body.is_active {
            active.is_active = Set(is_active);
        }

        if !active.is_changed() {
            return Ok(existing);
        }
        Ok(active.update(&self.db).await?)
    }

    /// # Errors
    ///
    /// `NotFound` for an unknown tip.
    pub async fn delete_recovery_tip(
        &self,
        session: &Session,
        id: i32,
    ) -> Result<(), ServiceError> {
        self.require_admin(session).await?;
        self.remove::<recovery_tip::Entity>(id, "Recovery tip").await
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Wellness resources
    // ─────────────────────────────────────────────────────────────────────────

    /// # Errors
    ///
    /// `Unauthorized`/`Forbidden` for non-admin sessions.
    pub async fn list_wellness_resources(
        &self,
        session: &Session,
    ) -> Result<Vec<wellness_resource::Model>, ServiceError> {
        self.require_admin(session).await?;
        Ok(wellness_resource::Entity::find()
            .order_by_asc(wellness_resource::Column::Id)
            .all(&self.db)
            .await?)
    }

    /// # Errors
    ///
    /// `Validation` for blank required text.
    pub async fn create_wellness_resource(
        &self,
        session: &Session,
        body: CreateWellnessResourceRequest,
    ) -> Result<wellness_resource::Model, ServiceError> {
        self.require_admin(session).await?;
        non_blank(&body.title, "Title")?;
        non_blank(&body.content, "Content")?;
        non_blank(&body.resource_type, "Resource type")?;

        let created = wellness_resource::ActiveModel {
            title: Set(body.title),
            content: Set(body.content),
            resource_type: Set(body.resource_type),
            mood_category: Set(body.mood_category),
            is_active: Set(body.is_active.unwrap_or(true)),
            created_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;
        tracing::info!(resource_id = created.id, "Wellness resource created");
        Ok(created)
    }

    /// # Errors
    ///
    /// `NotFound` for an unknown resource, `Validation` for invalid fields.
    pub async fn update_wellness_resource(
        &self,
        session: &Session,
        id: i32,
        body: UpdateWellnessResourceRequest,
    ) -> Result<wellness_resource::Model, ServiceError> {
        self.require_admin(session).await?;
        let existing = wellness_resource::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(ServiceError::NotFound("Wellness resource"))?;

        let mut active: wellness_resource::ActiveModel = existing.clone().into();
        if let Some(title) = body.title {
            non_blank(&title, "Title")?;
            active.title = Set(title);
        }
        if let Some(content) = body.content {
            non_blank(&content, "Content")?;
            active.content = Set(content);
        }
        if let Some(resource_type) = body.resource_type {
            non_blank(&resource_type, "Resource type")?;
            active.resource_type = Set(resource_type);
        }
        if let Some(mood_category) = body.mood_category {
            active.mood_category = Set(Some(mood_category).filter(|m| !m.trim().is_empty()));
        }
        if let Some(is_active) = body.is_active {
            active.is_active = Set(is_active);
        }

        if !active.is_changed() {
            return Ok(existing);
        }
        Ok(active.update(&self.db).await?)
    }

    /// # Errors
    ///
    /// `NotFound` for an unknown resource.
    pub async fn delete_wellness_resource(
        &self,
        session: &Session,
        id: i32,
    ) -> Result<(), ServiceError> {
        self.require_admin(session).await?;
        self.remove::<wellness_resource::Entity>(id, "Wellness resource")
            .await
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Exercise videos
    // ─────────────────────────────────────────────────────────────────────────

    /// # Errors
    ///
    /// `Unauthorized`/`Forbidden` for non-admin sessions.
    pub async fn list_exercise_videos(
        &self,
        session: &Session,
    ) -> Result<Vec<exercise_video::Model>, ServiceError> {
        self.require_admin(session).await?;
        Ok(exercise_video::Entity::find()
            .order_by_asc(exercise_video::Column::Id)
            .all(&self.db)
            .await?)
    }

    /// # Errors
    ///
    /// `Validation` for blank required text or a non-positive duration.
    pub async fn create_exercise_video(
        &self,
        session: &Session,
        body: CreateExerciseVideoRequest,
    ) -> Result<exercise_video::Model, ServiceError> {
        self.require_admin(session).await?;
        non_blank(&body.exercise_type, "Exercise type")?;
        non_blank(&body.title, "Title")?;
        non_blank(&body.video_url, "Video URL")?;
        if let Some(duration) = body.duration {
            validate_video_duration(duration)?;
        }

        let created = exercise_video::ActiveModel {
            exercise_type: Set(body.exercise_type),
            title: Set(body.title),
            video_url: Set(body.video_url),
            description: Set(body.description),
            difficulty_level: Set(body
                .difficulty_level
                .unwrap_or_else(|| DEFAULT_DIFFICULTY.to_string())),
            duration: Set(body.duration),
            is_active: Set(body.is_active.unwrap_or(true)),
            created_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;
        tracing::info!(
            video_id = created.id,
            exercise_type = %created.exercise_type,
            "Exercise video created"
        );
        Ok(created)
    }

    /// # Errors
    ///
    /// `NotFound` for an unknown video, `Validation` for invalid fields.
    pub async fn update_exercise_video(
        &self,
        session: &Session,
        id: i32,
        body: UpdateExerciseVideoRequest,
    ) -> Result<exercise_video::Model, ServiceError> {
        self.require_admin(session).await?;
        let existing = exercise_video::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(ServiceError::NotFound("Exercise video"))?;

        let mut active: exercise_video::ActiveModel = existing.clone().into();
        if let Some(exercise_type) = body.exercise_type {
            non_blank(&exercise_type, "Exercise type")?;
            active.exercise_type = Set(exercise_type);
        }
        if let Some(title) = body.title {
            non_blank(&title, "Title")?;
            active.title = Set(title);
        }
        if let Some(video_url) = body.video_url {
            non_blank(&video_url, "Video URL")?;
            active.video_url = Set(video_url);
        }
        if let Some(description) = body.description {
            active.description = Set(Some(description));
        }
        if let Some(difficulty) = body.difficulty_level {
            non_blank(&difficulty, "Difficulty level")?;
            active.difficulty_level = Set(difficulty);
        }
        if let Some(duration) = body.duration {
            validate_video_duration(duration)?;
            active.duration = Set(Some(duration));
        }
        if let Some(is_active) = body.is_active {
            active.is_active = Set(is_active);
        }

        if !active.is_changed() {
            return Ok(existing);
        }
        Ok(active.update(&self.db).await?)
    }

    /// # Errors
    ///
    /// `NotFound` for an unknown video.
    pub async fn delete_exercise_video(
        &self,
        session: &Session,
        id: i32,
    ) -> Result<(), ServiceError> {
        self.require_admin(session).await?;
        self.remove::<exercise_video::Entity>(id, "Exercise video")
            .await
    }

    // ─────────────────────────────────────────────────────────────────────────
    // General tips
    // ─────────────────────────────────────────────────────────────────────────

    /// # Errors
    ///
    /// `Unauthorized`/`Forbidden` for non-admin sessions.
    pub async fn list_tips(&self, session: &Session) -> Result<Vec<tip::Model>, ServiceError> {
        self.require_admin(session).await?;
        Ok(tip::Entity::find()
            .order_by_asc(tip::Column::Id)
            .all(&self.db)
            .await?)
    }

    /// # Errors
    ///
    /// `Validation` for blank required text.
    pub async fn create_tip(
        &self,
        session: &Session,
        body: CreateTipRequest,
    ) -> Result<tip::Model, ServiceError> {
        self.require_admin(session).await?;
        non_blank(&body.title, "Title")?;
        non_blank(&body.content, "Content")?;
        non_blank(&body.category, "Category")?;

        let created = tip::ActiveModel {
            title: Set(body.title),
            content: Set(body.content),
            category: Set(body.category),
            is_active: Set(body.is_active.unwrap_or(true)),
            created_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;
        tracing::info!(tip_id = created.id, category = %created.category, "Tip created");
        Ok(created)
    }

    /// # Errors
    ///
    /// `NotFound` for an unknown tip, `Validation` for invalid fields.
    pub async fn update_tip(
        &self,
        session: &Session,
        id: i32,
        body: UpdateTipRequest,
    ) -> Result<tip::Model, ServiceError> {
        self.require_admin(session).await?;
        let existing = tip::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(ServiceError::NotFound("Tip"))?;

        let mut active: tip::ActiveModel = existing.clone().into();
        if let Some(title) = body.title {
            non_blank(&title, "Title")?;
            active.title = Set(title);
        }
        if let Some(content) = body.content {
            non_blank(&content, "Content")?;
            active.content = Set(content);
        }
        if let Some(category) = body.category {
            non_blank(&category, "Category")?;
            active.category = Set(category);
        }
        if let Some(is_active) = body.is_active {
            active.is_active = Set(is_active);
        }

        if !active.is_changed() {
            return Ok(existing);
        }
        Ok(active.update(&self.db).await?)
    }

    /// # Errors
    ///
    /// `NotFound` for an unknown tip.
    pub async fn delete_tip(&self, session: &Session, id: i32) -> Result<(), ServiceError> {
        self.require_admin(session).await?;
        self.remove::<tip::Entity>(id, "Tip").await
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Activity
    // ─────────────────────────────────────────────────────────────────────────

    /// # Errors
    ///
    /// `Unauthorized`/`Forbidden` for non-admin sessions.
    pub async fn list_exercises(
        &self,
        session: &Session,
    ) -> Result<Vec<exercise::Model>, ServiceError> {
        self.require_admin(session).await?;
        Ok(exercise::Entity::find()
            .order_by_asc(exercise::Column::Id)
            .all(&self.db)
            .await?)
    }

    /// # Errors
    ///
    /// `Unauthorized`/`Forbidden` for non-admin sessions.
    pub async fn list_wellness_entries(
        &self,
        session: &Session,
    ) -> Result<Vec<wellness_entry::Model>, ServiceError> {
        self.require_admin(session).await?;
        Ok(wellness_entry::Entity::find()
            .order_by_asc(wellness_entry::Column::Id)
            .all(&self.db)
            .await?)
    }

    /// # Errors
    ///
    /// `Unauthorized`/`Forbidden` for non-admin sessions.
    pub async fn list_progress_entries(
        &self,
        session: &Session,
    ) -> Result<Vec<progress_entry::Model>, ServiceError> {
        self.require_admin(session).await?;
        Ok(progress_entry::Entity::find()
            .order_by_asc(progress_entry::Column::Id)
            .all(&self.db)
            .await?)
    }

    /// Remove an exercise. Progress entries that reference it are kept.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown exercise.
    pub async fn delete_exercise(&self, session: &Session, id: i32) -> Result<(), ServiceError> {
        let admin = self.require_admin(session).await?;
        self.remove::<exercise::Entity>(id, "Exercise").await?;
        tracing::info!(admin_id = admin.id, exercise_id = id, "Exercise deleted by admin");
        Ok(())
    }

    async fn remove<E>(&self, id: i32, what: &'static str) -> Result<(), ServiceError>
    where
        E: EntityTrait,
        <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
    {
        let result = E::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(ServiceError::NotFound(what));
        }
        tracing::info!(id, kind = what, "Record deleted");
        Ok(())
    }
}

fn validate_video_duration(duration: i32) -> Result<(), ServiceError> {
    if duration <= 0 {
        return Err(ServiceError::Validation(
            "Duration must be a positive number of minutes.".to_string(),
        ));
    }
    Ok(())
}
