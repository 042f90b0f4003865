use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::common::AppState;
use crate::error::{AppError, AppResult};
use crate::spatial::geojson::{to_collection, to_feature};
use crate::spatial::search::{self, RucherRow};

use super::types::RuchersQuery;

/// GeoJSON FeatureCollection of apiaries, with optional radius search
#[utoipa::path(
    get,
    path = "/api/geo/ruchers",
    params(RuchersQuery),
    responses(
        (status = 200, description = "GeoJSON FeatureCollection of apiaries"),
        (status = 400, description = "Invalid radius parameters"),
    ),
    tag = "ruchers"
)]
pub async fn list_ruchers(
    State(state): State<AppState>,
    Query(query): Query<RuchersQuery>,
) -> AppResult<Json<serde_json::Value>> {
    let rows: Vec<RucherRow> = if let (Some(radius), Some(lat), Some(lon)) =
        (&query.radius, &query.lat, &query.lon)
    {
        let parse = |raw: &str| {
            raw.trim()
                .parse::<f64>()
                .map_err(|_| AppError::BadRequest("Invalid radius parameters".to_string()))
        };
        let (radius, lat, lon) = (parse(radius)?, parse(lat)?, parse(lon)?);

        search::find_within_radius::<RucherRow>(&state.db, lon, lat, radius)
            .await?
            .into_iter()
            .map(|(row, _)| row)
            .collect()
    } else {
        search::find_all::<RucherRow>(&state.db).await?
    };

    let collection = to_collection(&rows);

    serde_json::to_value(&collection)
        .map(Json)
        .map_err(|e| AppError::Internal(e.to_string()))
}

/// Single apiary as a GeoJSON Feature
#[utoipa::path(
    get,
    path = "/api/geo/ruchers/{rucher_id}",
    params(
        ("rucher_id" = i32, Path, description = "Apiary ID"),
    ),
    responses(
        (status = 200, description = "GeoJSON Feature"),
        (status = 404, description = "Rucher not found"),
        (status = 500, description = "Stored geometry cannot be represented"),
    ),
    tag = "ruchers"
)]
pub async fn get_rucher(
    State(state): State<AppState>,
    Path(rucher_id): Path<i32>,
) -> AppResult<Json<serde_json::Value>> {
    let row = search::find_by_id::<RucherRow>(&state.db, rucher_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Rucher {rucher_id} not found")))?;

    let feature = to_feature(&row)
        .ok_or_else(|| AppError::Internal(format!("Rucher {rucher_id} has invalid geometry")))?;

    serde_json::to_value(&feature)
        .map(Json)
        .map_err(|e| AppError::Internal(e.to_string()))
}
