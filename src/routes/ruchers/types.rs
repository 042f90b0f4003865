use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
pub struct RuchersQuery {
    /// Radius in meters for a radius search (requires lat and lon)
    pub radius: Option<String>,
    /// Latitude of the radius search center
    pub lat: Option<String>,
    /// Longitude of the radius search center
    pub lon: Option<String>,
}
