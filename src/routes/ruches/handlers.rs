use axum::{
    Json,
    extract::{Path, Query, State},
};
use geojson::FeatureCollection;
use sea_orm::{ConnectionTrait, DatabaseBackend, FromQueryResult, Statement};
use serde_json::json;

use crate::common::AppState;
use crate::error::{AppError, AppResult};
use crate::spatial::cluster;
use crate::spatial::geojson::{point_coordinates, to_collection, to_feature};
use crate::spatial::search::{self, RucheRow, SpatialRecord};

use super::types::{NearbyQuery, RuchesQuery};

/// GeoJSON FeatureCollection of hives, with optional filters, radius search,
/// and DBSCAN clustering summary
#[utoipa::path(
    get,
    path = "/api/geo/ruches",
    params(RuchesQuery),
    responses(
        (status = 200, description = "GeoJSON FeatureCollection of hives"),
        (status = 400, description = "Invalid filter or radius parameters"),
    ),
    tag = "ruches"
)]
pub async fn list_ruches(
    State(state): State<AppState>,
    Query(query): Query<RuchesQuery>,
) -> AppResult<Json<serde_json::Value>> {
    // A full radius search overrides the attribute filters.
    let rows: Vec<RucheRow> = if let (Some(radius), Some(lat), Some(lon)) =
        (&query.radius, &query.lat, &query.lon)
    {
        let parse = |raw: &str| {
            raw.trim()
                .parse::<f64>()
                .map_err(|_| AppError::BadRequest("Invalid radius parameters".to_string()))
        };
        let (radius, lat, lon) = (parse(radius)?, parse(lat)?, parse(lon)?);

        search::find_within_radius::<RucheRow>(&state.db, lon, lat, radius)
            .await?
            .into_iter()
            .map(|(row, _)| row)
            .collect()
    } else {
        let mut conditions: Vec<String> = Vec::new();
        let mut values: Vec<sea_orm::Value> = Vec::new();

        if let Some(active) = &query.active {
            values.push(active.eq_ignore_ascii_case("true").into());
            conditions.push(format!("active = ${}", values.len()));
        }
        if let Some(rucher_id) = &query.rucher_id {
            let rucher_id: i32 = rucher_id.trim().parse().map_err(|_| {
                AppError::BadRequest("Invalid rucher_id parameter".to_string())
            })?;
            values.push(rucher_id.into());
            conditions.push(format!("rucher_id = ${}", values.len()));
        }

        let mut sql = format!(
            "SELECT {}, ST_AsGeoJSON(geom) AS geom_json FROM ruches",
            RucheRow::COLUMNS
        );
        if !conditions.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&conditions.join(" AND "));
        }

        let result_rows = state
            .db
            .query_all(Statement::from_sql_and_values(
                DatabaseBackend::Postgres,
                &sql,
                values,
            ))
            .await?;

        let mut rows = Vec::with_capacity(result_rows.len());
        for row in result_rows {
            rows.push(RucheRow::from_query_result(&row, "")?);
        }
        rows
    };

    let mut collection = to_collection(&rows);

    if query
        .cluster
        .as_deref()
        .is_some_and(|c| c.eq_ignore_ascii_case("true"))
    {
        let points: Vec<(f64, f64)> = rows
            .iter()
            .filter_map(|row| row.geom_json.as_deref().and_then(point_coordinates))
            .collect();

        if !points.is_empty() {
            let clustering = cluster::cluster_points(
                &points,
                state.config.clustering_eps_meters,
                state.config.clustering_min_samples,
            )?;
            let mut extra = geojson::JsonObject::new();
            extra.insert(
                "clustering".to_string(),
                serde_json::to_value(clustering)
                    .map_err(|e| AppError::Internal(e.to_string()))?,
            );
            collection.foreign_members = Some(extra);
        }
    }

    serde_json::to_value(&collection)
        .map(Json)
        .map_err(|e| AppError::Internal(e.to_string()))
}

/// Single hive as a GeoJSON Feature
#[utoipa::path(
    get,
    path = "/api/geo/ruches/{ruche_id}",
    params(
        ("ruche_id" = i32, Path, description = "Hive ID"),
    ),
    responses(
        (status = 200, description = "GeoJSON Feature"),
        (status = 404, description = "Ruche not found"),
        (status = 500, description = "Stored geometry cannot be represented"),
    ),
    tag = "ruches"
)]
pub async fn get_ruche(
    State(state): State<AppState>,
    Path(ruche_id): Path<i32>,
) -> AppResult<Json<serde_json::Value>> {
    let row = search::find_by_id::<RucheRow>(&state.db, ruche_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Ruche {ruche_id} not found")))?;

    let feature = to_feature(&row)
        .ok_or_else(|| AppError::Internal(format!("Ruche {ruche_id} has invalid geometry")))?;

    serde_json::to_value(&feature)
        .map(Json)
        .map_err(|e| AppError::Internal(e.to_string()))
}

/// Hives within a radius of a center point, with per-feature distance
#[utoipa::path(
    get,
    path = "/api/geo/ruches/nearby",
    params(NearbyQuery),
    responses(
        (status = 200, description = "GeoJSON FeatureCollection with distance_meters per feature"),
        (status = 400, description = "Missing or invalid coordinates"),
    ),
    tag = "ruches"
)]
pub async fn nearby_ruches(
    State(state): State<AppState>,
    Query(query): Query<NearbyQuery>,
) -> AppResult<Json<serde_json::Value>> {
    let (Some(lat), Some(lon)) = (&query.lat, &query.lon) else {
        return Err(AppError::BadRequest(
            "lat and lon parameters required".to_string(),
        ));
    };
    let (lat, lon) = crate::spatial::coords::parse_lat_lon(lat, lon)?;

    let radius: f64 = match &query.radius {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::BadRequest("Invalid radius parameters".to_string()))?,
        None => 1000.0,
    };

    let hits = search::find_within_radius::<RucheRow>(&state.db, lon, lat, radius).await?;

    let mut features = Vec::with_capacity(hits.len());
    for (row, distance) in &hits {
        if let Some(mut feature) = to_feature(row) {
            if let Some(properties) = feature.properties.as_mut() {
                properties.insert("distance_meters".to_string(), json!(distance));
            }
            features.push(feature);
        }
    }

    let mut extra = geojson::JsonObject::new();
    extra.insert(
        "query".to_string(),
        json!({ "lat": lat, "lon": lon, "radius_meters": radius }),
    );

    let collection = FeatureCollection {
        bbox: None,
        features,
        foreign_members: Some(extra),
    };

    serde_json::to_value(&collection)
        .map(Json)
        .map_err(|e| AppError::Internal(e.to_string()))
}
