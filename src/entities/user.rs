use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub full_name: String,
    pub date_joined: DateTimeWithTimeZone,
    pub postpartum_months: i32,
    pub is_admin: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::exercise::Entity")]
    Exercise,
    #[sea_orm(has_many = "super::wellness_entry::Entity")]
    WellnessEntry,
    #[sea_orm(has_many = "super::progress_entry::Entity")]
    ProgressEntry,
}

impl Related<super::exercise::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Exercise.def()
    }
}

impl Related<super::wellness_entry::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WellnessEntry.def()
    }
}

impl Related<super::progress_entry::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProgressEntry.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
