use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::RecoveryStage;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[sea_orm(table_name = "recovery_tip")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    /// Stored as `Early`, `Mid` or `Late`
    pub recovery_stage: String,
    pub is_active: bool,
    pub created_at: DateTimeWithTimeZone,
}

impl Model {
    /// Parsed stage tag, `None` when the stored value is not a known stage.
    #[must_use]
    pub fn stage(&self) -> Option<RecoveryStage> {
        RecoveryStage::from_str(&self.recovery_stage)
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
