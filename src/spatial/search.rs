//! Radius search and geometry-bearing row access.
//!
//! All geometry reads go through raw SQL so PostGIS can hand back GeoJSON
//! (`ST_AsGeoJSON`) and do the distance math in geography space. `ST_DWithin`
//! and `ST_Distance` operate on `geography` casts: spheroidal meters, not
//! planar coordinate distance, which matters away from the equator.

use chrono::{DateTime, FixedOffset};
use geojson::JsonObject;
use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, FromQueryResult, Statement};
use serde_json::json;

use crate::error::AppResult;
use crate::spatial::geojson::ToFeature;

/// A table with a `geom` column that the spatial queries can target.
pub trait SpatialRecord: FromQueryResult {
    const TABLE: &'static str;
    /// Non-geometry select list; `ST_AsGeoJSON(geom) AS geom_json` is appended
    /// by the queries.
    const COLUMNS: &'static str;
}

/// Hive row as read by the spatial queries.
#[derive(Debug, Clone, FromQueryResult)]
pub struct RucheRow {
    pub id: i32,
    pub name: String,
    pub rucher_id: Option<i32>,
    pub queen_info: Option<serde_json::Value>,
    pub created_at: DateTime<FixedOffset>,
    pub active: bool,
    pub geom_json: Option<String>,
}

impl SpatialRecord for RucheRow {
    const TABLE: &'static str = "ruches";
    const COLUMNS: &'static str = "id, name, rucher_id, queen_info, created_at, active";
}

impl ToFeature for RucheRow {
    fn geometry_json(&self) -> Option<&str> {
        self.geom_json.as_deref()
    }

    fn properties(&self) -> JsonObject {
        let mut properties = JsonObject::new();
        properties.insert("id".to_string(), json!(self.id));
        properties.insert("name".to_string(), json!(self.name));
        properties.insert("rucher_id".to_string(), json!(self.rucher_id));
        properties.insert("queen_info".to_string(), json!(self.queen_info));
        properties.insert(
            "created_at".to_string(),
            json!(self.created_at.to_rfc3339()),
        );
        properties.insert("active".to_string(), json!(self.active));
        properties
    }
}

/// Apiary row as read by the spatial queries.
#[derive(Debug, Clone, FromQueryResult)]
pub struct RucherRow {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<FixedOffset>,
    pub geom_json: Option<String>,
}

impl SpatialRecord for RucherRow {
    const TABLE: &'static str = "ruchers";
    const COLUMNS: &'static str = "id, name, description, created_at";
}

impl ToFeature for RucherRow {
    fn geometry_json(&self) -> Option<&str> {
        self.geom_json.as_deref()
    }

    fn properties(&self) -> JsonObject {
        let mut properties = JsonObject::new();
        properties.insert("id".to_string(), json!(self.id));
        properties.insert("name".to_string(), json!(self.name));
        properties.insert("description".to_string(), json!(self.description));
        properties.insert(
            "created_at".to_string(),
            json!(self.created_at.to_rfc3339()),
        );
        properties
    }
}

/// Fetch all rows of a spatial table. Order is unspecified.
pub async fn find_all<T: SpatialRecord>(db: &DatabaseConnection) -> AppResult<Vec<T>> {
    let sql = format!(
        "SELECT {columns}, ST_AsGeoJSON(geom) AS geom_json FROM {table}",
        columns = T::COLUMNS,
        table = T::TABLE,
    );

    let rows = db
        .query_all(Statement::from_string(DatabaseBackend::Postgres, sql))
        .await?;

    let mut records = Vec::with_capacity(rows.len());
    for row in rows {
        records.push(T::from_query_result(&row, "")?);
    }
    Ok(records)
}

/// Fetch one row by primary key.
pub async fn find_by_id<T: SpatialRecord>(
    db: &DatabaseConnection,
    id: i32,
) -> AppResult<Option<T>> {
    let sql = format!(
        "SELECT {columns}, ST_AsGeoJSON(geom) AS geom_json FROM {table} WHERE id = $1",
        columns = T::COLUMNS,
        table = T::TABLE,
    );

    let row = db
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            &sql,
            [id.into()],
        ))
        .await?;

    row.map(|r| T::from_query_result(&r, "")).transpose().map_err(Into::into)
}

/// Fetch all rows whose geometry lies within `radius_meters` of the center
/// point, with the geodesic distance to the center for each hit. A missing
/// distance (null geometry edge case) is reported as 0.0. Order is
/// unspecified.
pub async fn find_within_radius<T: SpatialRecord>(
    db: &DatabaseConnection,
    longitude: f64,
    latitude: f64,
    radius_meters: f64,
) -> AppResult<Vec<(T, f64)>> {
    let sql = format!(
        r"
        SELECT {columns},
               ST_AsGeoJSON(geom) AS geom_json,
               ST_Distance(geom::geography, ST_SetSRID(ST_MakePoint($1, $2), 4326)::geography) AS distance_meters
        FROM {table}
        WHERE ST_DWithin(geom::geography, ST_SetSRID(ST_MakePoint($1, $2), 4326)::geography, $3)
        ",
        columns = T::COLUMNS,
        table = T::TABLE,
    );

    let rows = db
        .query_all(Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            &sql,
            [longitude.into(), latitude.into(), radius_meters.into()],
        ))
        .await?;

    let mut records = Vec::with_capacity(rows.len());
    for row in rows {
        let record = T::from_query_result(&row, "")?;
        let distance: f64 = row.try_get("", "distance_meters").unwrap_or(0.0);
        records.push((record, distance));
    }
    Ok(records)
}
