use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::spatial::cluster::KmeansCluster;

#[derive(Debug, Deserialize, IntoParams)]
pub struct ClustersQuery {
    /// Requested number of K-means clusters (default 3)
    pub n_clusters: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ClustersResponse {
    pub clusters: Vec<KmeansCluster>,
    pub total_clusters: usize,
    pub n_clusters_requested: usize,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct DistanceQuery {
    pub lat1: Option<String>,
    pub lon1: Option<String>,
    pub lat2: Option<String>,
    pub lon2: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CoordinatePair {
    /// (longitude, latitude) of the first point
    pub point1: [f64; 2],
    /// (longitude, latitude) of the second point
    pub point2: [f64; 2],
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DistanceResponse {
    pub distance_meters: f64,
    pub distance_km: f64,
    pub coordinates: CoordinatePair,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ReverseGeocodeQuery {
    pub lat: Option<String>,
    pub lon: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ReverseGeocodeResponse {
    pub lat: f64,
    pub lon: f64,
    pub address: String,
    pub country: String,
}

/// Coordinates may arrive as JSON numbers or numeric strings.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ValidateCoordsRequest {
    pub lat: Option<serde_json::Value>,
    pub lon: Option<serde_json::Value>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ValidateCoordsResponse {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
    pub message: String,
}
