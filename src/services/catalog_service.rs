use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::entities::{exercise_video, mental_tip, recovery_tip, wellness_resource};
use crate::error::ServiceError;

/// Read side of the content catalog. Every loader returns rows in insertion order.
#[derive(Debug, Clone)]
pub struct CatalogService {
    db: DatabaseConnection,
}

impl CatalogService {
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// # Errors
    ///
    /// Database errors only.
    pub async fn mental_tips_for_month(
        &self,
        month: i32,
    ) -> Result<Vec<mental_tip::Model>, ServiceError> {
        Ok(mental_tip::Entity::find()
            .filter(mental_tip::Column::MonthRelation.eq(month))
            .order_by_asc(mental_tip::Column::Id)
            .all(&self.db)
            .await?)
    }

    /// # Errors
    ///
    /// Database errors only.
    pub async fn active_recovery_tips(&self) -> Result<Vec<recovery_tip::Model>, ServiceError> {
        Ok(recovery_tip::Entity::find()
            .filter(recovery_tip::Column::IsActive.eq(true))
            .order_by_asc(recovery_tip::Column::Id)
            .all(&self.db)
            .await?)
    }

    /// Active videos, optionally narrowed to one exercise type.
    ///
    /// # Errors
    ///
    /// Database errors only.
    pub async fn active_videos(
        &self,
        exercise_type: Option<&str>,
    ) -> Result<Vec<exercise_video::Model>, ServiceError> {
        let mut query =
            exercise_video::Entity::find().filter(exercise_video::Column::IsActive.eq(true));
        if let Some(exercise_type) = exercise_type {
            query = query.filter(exercise_video::Column::ExerciseType.eq(exercise_type));
        }
        Ok(query
            .order_by_asc(exercise_video::Column::Id)
            .all(&self.db)
            .await?)
    }

    /// # Errors
    ///
    /// Database errors only.
    pub async fn active_wellness_resources(
        &self,
    ) -> Result<Vec<wellness_resource::Model>, ServiceError> {
        Ok(wellness_resource::Entity::find()
            .filter(wellness_resource::Column::IsActive.eq(true))
            .order_by_asc(wellness_resource::Column::Id)
            .all(&self.db)
            .await?)
    }
}
