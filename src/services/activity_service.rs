use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

use crate::dto::{NewExercise, NewProgress, NewWellness};
use crate::entities::{exercise, progress_entry, user, wellness_entry};
use crate::error::ServiceError;
use crate::sessions::Session;

/// How many completed exercises the dashboard shows.
pub const RECENT_EXERCISE_LIMIT: u64 = 5;
/// How many wellness check-ins the dashboard shows.
pub const RECENT_WELLNESS_LIMIT: u64 = 3;

/// Append-only per-user records: exercises, progress ratings, wellness check-ins.
#[derive(Debug, Clone)]
pub struct ActivityService {
    db: DatabaseConnection,
}

impl ActivityService {
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Record a completed exercise for the session's user, stamped with the current time.
    ///
    /// # Errors
    ///
    /// `Unauthorized` without a session, `NotFound` if the user vanished.
    pub async fn log_exercise(
        &self,
        session: &Session,
        entry: NewExercise,
    ) -> Result<i32, ServiceError> {
        let user_id = self.owner(session).await?;

        let record = exercise::ActiveModel {
            user_id: Set(user_id),
            exercise_type: Set(entry.exercise_type),
            duration: Set(entry.duration),
            date_completed: Set(Utc::now().fixed_offset()),
            notes: Set(entry.notes),
            ..Default::default()
        };
        let created = record.insert(&self.db).await?;

        tracing::info!(
            user_id,
            exercise_id = created.id,
            exercise_type = %created.exercise_type,
            duration = created.duration,
            "Exercise logged"
        );
        Ok(created.id)
    }

    /// Record how a previously logged exercise felt.
    ///
    /// The referenced exercise must exist and belong to the session's user.
    ///
    /// # Errors
    ///
    /// `Unauthorized` without a session, `NotFound` for a missing or foreign exercise.
    pub async fn log_progress(
        &self,
        session: &Session,
        entry: NewProgress,
    ) -> Result<i32, ServiceError> {
        let user_id = self.owner(session).await?;

        let owned = exercise::Entity::find_by_id(entry.exercise_id)
            .filter(exercise::Column::UserId.eq(user_id))
            .one(&self.db)
            .await?;
        if owned.is_none() {
            return Err(ServiceError::NotFound("Exercise"));
        }

        let record = progress_entry::ActiveModel {
            user_id: Set(user_id),
            exercise_id: Set(entry.exercise_id),
            performance_rating: Set(entry.performance_rating),
            energy_level: Set(entry.energy_level),
            difficulty_felt: Set(entry.difficulty_felt),
            notes: Set(entry.notes),
            date_recorded: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };
        let created = record.insert(&self.db).await?;

        tracing::info!(
            user_id,
            progress_id = created.id,
            exercise_id = created.exercise_id,
            "Progress logged"
        );
        Ok(created.id)
    }

    /// Record a mood/stress/sleep check-in.
    ///
    /// # Errors
    ///
    /// `Unauthorized` without a session, `NotFound` if the user vanished.
    pub async fn log_wellness(
        &self,
        session: &Session,
        entry: NewWellness,
    ) -> Result<i32, ServiceError> {
        let user_id = self.owner(session).await?;

        let record = wellness_entry::ActiveModel {
            user_id: Set(user_id),
            mood_rating: Set(entry.mood_rating),
            stress_level: Set(entry.stress_level),
            sleep_hours: Set(entry.sleep_hours),
            notes: Set(entry.notes),
            date_recorded: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };
        let created = record.insert(&self.db).await?;

        tracing::info!(
            user_id,
            wellness_id = created.id,
            mood_rating = created.mood_rating,
            stress_level = created.stress_level,
            "Wellness entry logged"
        );
        Ok(created.id)
    }

    /// The session user's latest exercises, newest first.
    ///
    /// # Errors
    ///
    /// `Unauthorized` without a session.
    pub async fn recent_exercises(
        &self,
        session: &Session,
        limit: u64,
    ) -> Result<Vec<exercise::Model>, ServiceError> {
        let user_id = session.require_user()?;
        Ok(exercise::Entity::find()
            .filter(exercise::Column::UserId.eq(user_id))
            .order_by_desc(exercise::Column::DateCompleted)
            .order_by_desc(exercise::Column::Id)
            .limit(limit)
            .all(&self.db)
            .await?)
    }

    /// The session user's latest wellness check-ins, newest first.
    ///
    /// # Errors
    ///
    /// `Unauthorized` without a session.
    pub async fn recent_wellness(
        &self,
        session: &Session,
        limit: u64,
    ) -> Result<Vec<wellness_entry::Model>, ServiceError> {
        let user_id = session.require_user()?;
        Ok(wellness_entry::Entity::find()
            .filter(wellness_entry::Column::UserId.eq(user_id))
            .order_by_desc(wellness_entry::Column::DateRecorded)
            .order_by_desc(wellness_entry::Column::Id)
            .limit(limit)
            .all(&self.db)
            .await?)
    }

    /// # Errors
    ///
    /// Database errors only.
    pub async fn exercises_for_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<exercise::Model>, ServiceError> {
        Ok(exercise::Entity::find()
            .filter(exercise::Column::UserId.eq(user_id))
            .order_by_asc(exercise::Column::Id)
            .all(&self.db)
            .await?)
    }

    /// # Errors
    ///
    /// Database errors only.
    pub async fn progress_for_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<progress_entry::Model>, ServiceError> {
        Ok(progress_entry::Entity::find()
            .filter(progress_entry::Column::UserId.eq(user_id))
            .order_by_asc(progress_entry::Column::Id)
            .all(&self.db)
            .await?)
    }

    /// # Errors
    ///
    /// Database errors only.
    pub async fn wellness_for_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<wellness_entry::Model>, ServiceError> {
        Ok(wellness_entry::Entity::find()
            .filter(wellness_entry::Column::UserId.eq(user_id))
            .order_by_asc(wellness_entry::Column::Id)
            .all(&self.db)
            .await?)
    }

    /// Writes must reference a user that exists right now.
    async fn owner(&self, session: &Session) -> Result<i32, ServiceError> {
        let user_id = session.require_user()?;
        if user::Entity::find_by_id(user_id)
            .one(&self.db)
            .await?
            .is_none()
        {
            return Err(ServiceError::NotFound("User"));
        }
        Ok(user_id)
    }
}
