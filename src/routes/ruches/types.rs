use serde::Deserialize;
use utoipa::IntoParams;

/// Query parameters for the hive listing. All values arrive as strings and
/// are parsed by the handler.
#[derive(Debug, Deserialize, IntoParams)]
pub struct RuchesQuery {
    /// Filter by active status (true/false)
    pub active: Option<String>,
    /// Filter by rucher (apiary) ID
    pub rucher_id: Option<String>,
    /// Attach a DBSCAN clustering summary (true/false)
    pub cluster: Option<String>,
    /// Radius in meters for a radius search (requires lat and lon)
    pub radius: Option<String>,
    /// Latitude of the radius search center
    pub lat: Option<String>,
    /// Longitude of the radius search center
    pub lon: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct NearbyQuery {
    /// Latitude of the search center (required)
    pub lat: Option<String>,
    /// Longitude of the search center (required)
    pub lon: Option<String>,
    /// Radius in meters (default 1000)
    pub radius: Option<String>,
}
