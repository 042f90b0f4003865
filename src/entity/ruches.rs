use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Ruche (hive): a monitored beehive with a point location.
///
/// `queen_info` is a free-form JSON object (age, breed, ...); its contents are
/// documented but not enforced. The point geometry column is only read through
/// `ST_AsGeoJSON` in the spatial queries and is not mapped here.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ruches")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub rucher_id: Option<i32>,
    #[sea_orm(column_type = "JsonBinary")]
    pub queen_info: Option<serde_json::Value>,
    pub created_at: Option<DateTimeWithTimeZone>,
    pub active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::ruchers::Entity",
        from = "Column::RucherId",
        to = "super::ruchers::Column::Id"
    )]
    Rucher,
    #[sea_orm(has_many = "super::measurements::Entity")]
    Measurements,
    #[sea_orm(has_many = "super::alert_rules::Entity")]
    AlertRules,
    #[sea_orm(has_many = "super::alerts::Entity")]
    Alerts,
}

impl Related<super::ruchers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Rucher.def()
    }
}

impl Related<super::measurements::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Measurements.def()
    }
}

impl Related<super::alert_rules::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AlertRules.def()
    }
}

impl Related<super::alerts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Alerts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
