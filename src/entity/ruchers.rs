use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Rucher (apiary): a site containing one or more hives.
///
/// The `geom` column (point or polygon, SRID 4326) is intentionally not mapped
/// here; geometry is only read through `ST_AsGeoJSON` in the spatial queries.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ruchers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::ruches::Entity")]
    Ruches,
}

impl Related<super::ruches::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ruches.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
