use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Self-reported feedback on a logged exercise.
///
/// `exercise_id` is not a foreign key and may dangle once an admin removes the exercise.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[sea_orm(table_name = "progress_entry")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub exercise_id: i32,
    /// 1 (poor) to 5 (excellent)
    pub performance_rating: i32,
    pub energy_level: i32,
    pub difficulty_felt: i32,
    #[sea_orm(column_type = "Text")]
    pub notes: String,
    pub date_recorded: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
