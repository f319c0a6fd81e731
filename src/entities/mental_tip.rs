use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[sea_orm(table_name = "mental_tip")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Postpartum month this tip is written for
    pub month_relation: i32,
    #[sea_orm(column_type = "Text")]
    pub tip_content: String,
    pub date_created: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
