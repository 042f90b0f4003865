use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Triggered-alert record. Inert: written by external ingestion, only counted
/// here.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "alerts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub rule_id: i32,
    pub ruche_id: i32,
    pub triggered_at: DateTimeWithTimeZone,
    #[sea_orm(column_type = "JsonBinary")]
    pub payload: Option<serde_json::Value>,
    pub sent_whatsapp: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::alert_rules::Entity",
        from = "Column::RuleId",
        to = "super::alert_rules::Column::Id"
    )]
    Rule,
    #[sea_orm(
        belongs_to = "super::ruches::Entity",
        from = "Column::RucheId",
        to = "super::ruches::Column::Id"
    )]
    Ruche,
}

impl Related<super::alert_rules::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Rule.def()
    }
}

impl Related<super::ruches::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ruche.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
