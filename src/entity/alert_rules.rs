use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Threshold configuration for hive monitoring. Inert record: no evaluation
/// engine lives in this service.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "alert_rules")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub ruche_id: i32,
    pub rule_type: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub params: Option<serde_json::Value>,
    pub notify_in_app: bool,
    pub notify_whatsapp: bool,
    pub whatsapp_number: Option<String>,
    pub active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::ruches::Entity",
        from = "Column::RucheId",
        to = "super::ruches::Column::Id"
    )]
    Ruche,
    #[sea_orm(has_many = "super::alerts::Entity")]
    Alerts,
}

impl Related<super::ruches::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ruche.def()
    }
}

impl Related<super::alerts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Alerts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
