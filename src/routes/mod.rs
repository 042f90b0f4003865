pub mod analysis;
pub mod health;
pub mod ruchers;
pub mod ruches;

use axum::{
    Router,
    http::HeaderValue,
    routing::{get, post},
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::common::AppState;
use crate::spatial::cluster::{KmeansCluster, KmeansMember};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        health::status,
        ruches::list_ruches,
        ruches::get_ruche,
        ruches::nearby_ruches,
        ruchers::list_ruchers,
        ruchers::get_rucher,
        analysis::get_clusters,
        analysis::get_distance,
        analysis::reverse_geocode,
        analysis::validate_coords,
    ),
    components(
        schemas(
            analysis::ClustersResponse,
            analysis::CoordinatePair,
            analysis::DistanceResponse,
            analysis::ReverseGeocodeResponse,
            analysis::ValidateCoordsRequest,
            analysis::ValidateCoordsResponse,
            KmeansCluster,
            KmeansMember,
        )
    ),
    tags(
        (name = "health", description = "Health and status endpoints"),
        (name = "ruches", description = "Hives as GeoJSON"),
        (name = "ruchers", description = "Apiaries as GeoJSON"),
        (name = "analysis", description = "Spatial analysis: clustering, distance, geocoding"),
    ),
    info(
        title = "BeeTrack GeoJSON API",
        description = "Beekeeping locations and sensor data as GeoJSON",
        version = "0.1.0"
    )
)]
struct ApiDoc;

pub fn build_router(state: AppState) -> Router {
    let geo_routes = Router::new()
        .route("/ruches", get(ruches::list_ruches))
        .route("/ruches/nearby", get(ruches::nearby_ruches))
        .route("/ruches/{ruche_id}", get(ruches::get_ruche))
        .route("/ruchers", get(ruchers::list_ruchers))
        .route("/ruchers/{rucher_id}", get(ruchers::get_rucher))
        .route("/clusters", get(analysis::get_clusters))
        .route("/distance", get(analysis::get_distance))
        .route("/reverse-geocode", get(analysis::reverse_geocode))
        .route("/validate-coords", post(analysis::validate_coords));

    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/status", get(health::status));

    // OpenAPI documentation
    let docs_routes = Router::new().merge(Scalar::with_url("/docs", ApiDoc::openapi()));

    Router::new()
        .nest("/api/geo", geo_routes)
        .nest("/api", health_routes)
        .merge(docs_routes)
        .layer(RequestBodyLimitLayer::new(1024 * 1024)) // 1MB body limit
        .layer(CompressionLayer::new())
        .layer(cors_layer(&state.config.cors_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(origins: &str) -> CorsLayer {
    if origins.trim() == "*" {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}
