//! Geodesic distance on the WGS84 ellipsoid.

use geo::{GeodesicDistance, point};

/// Distance in meters between two (longitude, latitude) points, computed on
/// the WGS84 spheroid. Same geography-space semantics as the `ST_Distance`
/// calls used by the radius search, as opposed to flat-plane coordinate
/// distance.
#[must_use]
pub fn geodesic_distance_m(lon1: f64, lat1: f64, lon2: f64, lat2: f64) -> f64 {
    let a = point!(x: lon1, y: lat1);
    let b = point!(x: lon2, y: lat2);
    a.geodesic_distance(&b)
}
