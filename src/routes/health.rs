use axum::{Json, extract::State, http::StatusCode};
use chrono::Utc;
use sea_orm::{ConnectionTrait, DatabaseBackend, EntityTrait, PaginatorTrait, Statement};
use serde_json::json;

use crate::common::AppState;
use crate::entity::{alerts, measurements, ruchers, ruches};
use crate::error::AppResult;

/// Health check endpoint
///
/// Verifies database connectivity; answers 503 when the check fails.
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service and database are healthy"),
        (status = 503, description = "Database check failed"),
    ),
    tag = "health"
)]
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<serde_json::Value>) {
    let db_check = state
        .db
        .query_one(Statement::from_string(
            DatabaseBackend::Postgres,
            "SELECT 1",
        ))
        .await;

    let (healthy, db_status, db_message) = match db_check {
        Ok(_) => (true, "healthy", "Database connection successful".to_string()),
        Err(e) => {
            tracing::error!("Health check database error: {e:?}");
            (false, "unhealthy", "Database connection failed".to_string())
        }
    };

    let body = json!({
        "status": if healthy { "healthy" } else { "unhealthy" },
        "timestamp": Utc::now().to_rfc3339(),
        "api_version": env!("CARGO_PKG_VERSION"),
        "checks": {
            "database": {
                "status": db_status,
                "message": db_message,
            }
        }
    });

    let status = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(body))
}

/// API status endpoint with database versions and row statistics
#[utoipa::path(
    get,
    path = "/api/status",
    responses(
        (status = 200, description = "Status information"),
    ),
    tag = "health"
)]
pub async fn status(State(state): State<AppState>) -> AppResult<Json<serde_json::Value>> {
    let postgis_version = scalar_query(&state, "SELECT PostGIS_Version() AS version").await;
    let postgresql_version = scalar_query(&state, "SELECT version() AS version").await;

    let statistics = match row_counts(&state).await {
        Some((ruches, ruchers, measurements, alerts)) => json!({
            "ruches": ruches,
            "ruchers": ruchers,
            "measurements": measurements,
            "alerts": alerts,
        }),
        None => json!("Could not retrieve statistics"),
    };

    Ok(Json(json!({
        "api_title": "BeeTrack GeoJSON API",
        "api_version": env!("CARGO_PKG_VERSION"),
        "timestamp": Utc::now().to_rfc3339(),
        "database": {
            "postgis_version": postgis_version,
            "postgresql_version": postgresql_version,
        },
        "statistics": statistics,
        "features": {
            "geocoding_enabled": state.geocoder.is_some(),
            "clustering_enabled": true,
            "spatial_queries": true,
        }
    })))
}

async fn scalar_query(state: &AppState, sql: &str) -> String {
    let row = state
        .db
        .query_one(Statement::from_string(DatabaseBackend::Postgres, sql))
        .await
        .ok()
        .flatten();

    row.and_then(|r| r.try_get::<String>("", "version").ok())
        .unwrap_or_else(|| "Unknown".to_string())
}

async fn row_counts(state: &AppState) -> Option<(u64, u64, u64, u64)> {
    Some((
        ruches::Entity::find().count(&state.db).await.ok()?,
        ruchers::Entity::find().count(&state.db).await.ok()?,
        measurements::Entity::find().count(&state.db).await.ok()?,
        alerts::Entity::find().count(&state.db).await.ok()?,
    ))
}
