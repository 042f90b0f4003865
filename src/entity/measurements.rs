use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Time-series sensor reading tied to one hive. `raw` carries the unparsed
/// sensor payload.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "measurements")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub ruche_id: i32,
    pub recorded_at: DateTimeWithTimeZone,
    pub weight: Option<f64>,
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub signal: Option<f64>,
    #[sea_orm(column_type = "JsonBinary")]
    pub raw: Option<serde_json::Value>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::ruches::Entity",
        from = "Column::RucheId",
        to = "super::ruches::Column::Id"
    )]
    Ruche,
}

impl Related<super::ruches::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ruche.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
