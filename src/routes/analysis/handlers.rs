use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};

use crate::common::AppState;
use crate::error::{AppError, AppResult};
use crate::spatial::cluster::{self, LabeledPoint};
use crate::spatial::coords::{coerce_coordinate, parse_lat_lon, validate_coordinates};
use crate::spatial::distance::geodesic_distance_m;
use crate::spatial::geojson::point_coordinates;
use crate::spatial::search::{self, RucheRow};

use super::types::{
    ClustersQuery, ClustersResponse, CoordinatePair, DistanceQuery, DistanceResponse,
    ReverseGeocodeQuery, ReverseGeocodeResponse, ValidateCoordsRequest, ValidateCoordsResponse,
};

/// K-means clustering of all hives
#[utoipa::path(
    get,
    path = "/api/geo/clusters",
    params(ClustersQuery),
    responses(
        (status = 200, description = "Clusters with centroids and members", body = ClustersResponse),
        (status = 400, description = "Invalid n_clusters, or fewer hives than requested clusters"),
    ),
    tag = "analysis"
)]
pub async fn get_clusters(
    State(state): State<AppState>,
    Query(query): Query<ClustersQuery>,
) -> AppResult<Json<ClustersResponse>> {
    let n_clusters: i64 = match &query.n_clusters {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::BadRequest("Invalid n_clusters parameter".to_string()))?,
        None => 3,
    };
    if n_clusters < 1 {
        return Err(AppError::BadRequest(
            "n_clusters must be >= 1".to_string(),
        ));
    }
    let n_clusters = n_clusters as usize;

    let rows = search::find_all::<RucheRow>(&state.db).await?;
    let points: Vec<LabeledPoint> = rows
        .iter()
        .filter_map(|row| {
            let (lon, lat) = row.geom_json.as_deref().and_then(point_coordinates)?;
            Some(LabeledPoint {
                id: row.id,
                name: row.name.clone(),
                longitude: lon,
                latitude: lat,
            })
        })
        .collect();

    let clusters = cluster::kmeans_clusters(&points, n_clusters)?;

    Ok(Json(ClustersResponse {
        total_clusters: clusters.len(),
        n_clusters_requested: n_clusters,
        clusters,
    }))
}

/// Geodesic distance between two points
#[utoipa::path(
    get,
    path = "/api/geo/distance",
    params(DistanceQuery),
    responses(
        (status = 200, description = "Distance in meters and kilometers", body = DistanceResponse),
        (status = 400, description = "Missing or invalid coordinates"),
    ),
    tag = "analysis"
)]
pub async fn get_distance(
    Query(query): Query<DistanceQuery>,
) -> AppResult<Json<DistanceResponse>> {
    let (Some(lat1), Some(lon1), Some(lat2), Some(lon2)) =
        (&query.lat1, &query.lon1, &query.lat2, &query.lon2)
    else {
        return Err(AppError::BadRequest(
            "lat1, lon1, lat2, lon2 parameters required".to_string(),
        ));
    };

    let parse = |raw: &str| {
        raw.trim()
            .parse::<f64>()
            .map_err(|_| AppError::BadRequest("Invalid coordinates".to_string()))
    };
    let (lat1, lon1, lat2, lon2) = (parse(lat1)?, parse(lon1)?, parse(lat2)?, parse(lon2)?);

    if !validate_coordinates(lon1, lat1) || !validate_coordinates(lon2, lat2) {
        return Err(AppError::BadRequest("Invalid coordinates".to_string()));
    }

    let distance_meters = geodesic_distance_m(lon1, lat1, lon2, lat2);

    Ok(Json(DistanceResponse {
        distance_meters,
        distance_km: distance_meters / 1000.0,
        coordinates: CoordinatePair {
            point1: [lon1, lat1],
            point2: [lon2, lat2],
        },
    }))
}

/// Reverse geocode a coordinate pair to an address
#[utoipa::path(
    get,
    path = "/api/geo/reverse-geocode",
    params(ReverseGeocodeQuery),
    responses(
        (status = 200, description = "Address for the coordinates, or a placeholder when lookup fails", body = ReverseGeocodeResponse),
        (status = 400, description = "Missing or invalid coordinates"),
        (status = 503, description = "Reverse geocoding is disabled"),
    ),
    tag = "analysis"
)]
pub async fn reverse_geocode(
    State(state): State<AppState>,
    Query(query): Query<ReverseGeocodeQuery>,
) -> AppResult<Json<ReverseGeocodeResponse>> {
    let (Some(lat), Some(lon)) = (&query.lat, &query.lon) else {
        return Err(AppError::BadRequest(
            "lat and lon parameters required".to_string(),
        ));
    };
    let (lat, lon) = parse_lat_lon(lat, lon)?;

    let Some(geocoder) = &state.geocoder else {
        return Err(AppError::ServiceUnavailable(
            "Reverse geocoding is disabled".to_string(),
        ));
    };

    let fallback = || ReverseGeocodeResponse {
        lat,
        lon,
        address: "Address not found".to_string(),
        country: "Unknown".to_string(),
    };

    // Lookups are best-effort: a failed or empty lookup still answers 200.
    let response = match geocoder.reverse(lat, lon).await {
        Ok(Some(place)) => {
            let country = place
                .address
                .as_ref()
                .and_then(|a| a.country.clone())
                .or_else(|| {
                    place
                        .display_name
                        .rsplit(',')
                        .next()
                        .map(|part| part.trim().to_string())
                })
                .unwrap_or_else(|| "Unknown".to_string());

            ReverseGeocodeResponse {
                lat,
                lon,
                address: place.display_name,
                country,
            }
        }
        Ok(None) => fallback(),
        Err(e) => {
            tracing::warn!(error = %e, "Reverse geocoding failed");
            fallback()
        }
    };

    Ok(Json(response))
}

/// Validate a coordinate pair from an untrusted JSON body
#[utoipa::path(
    post,
    path = "/api/geo/validate-coords",
    request_body = ValidateCoordsRequest,
    responses(
        (status = 200, description = "Coordinates are valid", body = ValidateCoordsResponse),
        (status = 400, description = "Coordinates are missing, non-numeric, or out of range", body = ValidateCoordsResponse),
    ),
    tag = "analysis"
)]
pub async fn validate_coords(
    Json(body): Json<ValidateCoordsRequest>,
) -> (StatusCode, Json<ValidateCoordsResponse>) {
    let lat = body.lat.as_ref().and_then(coerce_coordinate);
    let lon = body.lon.as_ref().and_then(coerce_coordinate);

    let invalid = |message: &str| {
        (
            StatusCode::BAD_REQUEST,
            Json(ValidateCoordsResponse {
                valid: false,
                lat: None,
                lon: None,
                message: message.to_string(),
            }),
        )
    };

    match (lat, lon) {
        (Some(lat), Some(lon)) => {
            if !(-90.0..=90.0).contains(&lat) {
                invalid("Latitude must be between -90 and 90")
            } else if !(-180.0..=180.0).contains(&lon) {
                invalid("Longitude must be between -180 and 180")
            } else {
                (
                    StatusCode::OK,
                    Json(ValidateCoordsResponse {
                        valid: true,
                        lat: Some(lat),
                        lon: Some(lon),
                        message: "Coordinates are valid".to_string(),
                    }),
                )
            }
        }
        _ => invalid("Invalid coordinate format"),
    }
}
