//! Listing entity: a time-bounded catalog entry with an outbound destination

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "listings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    pub publisher: Option<String>,
    pub author: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub destination_url: String,
    pub category: Option<String>,
    /// Last day (inclusive) on which the listing is active
    pub deadline: Date,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::click_log::Entity")]
    ClickLog,
}

impl Related<super::click_log::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClickLog.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
