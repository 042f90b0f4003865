//! GeoJSON serialization of geometry-bearing records.
//!
//! Geometries arrive as `ST_AsGeoJSON` output (already in the service's
//! canonical SRID, no reprojection). Records whose geometry is null or cannot
//! be parsed yield no Feature and are silently dropped from collections.

use geojson::{Feature, FeatureCollection, GeoJson, Geometry, JsonObject};

/// A record that can be rendered as a GeoJSON Feature.
pub trait ToFeature {
    /// Stored geometry as a GeoJSON geometry string, if any.
    fn geometry_json(&self) -> Option<&str>;

    /// Non-geometry attributes for the Feature's `properties` member.
    fn properties(&self) -> JsonObject;
}

/// Convert one record into a Feature. `None` when the geometry is null or
/// unrepresentable; the caller decides whether that is a 404 or a 500.
pub fn to_feature<T: ToFeature>(record: &T) -> Option<Feature> {
    let geometry = parse_geometry(record.geometry_json()?)?;

    Some(Feature {
        bbox: None,
        geometry: Some(geometry),
        id: None,
        properties: Some(record.properties()),
        foreign_members: None,
    })
}

/// Convert many records into a FeatureCollection, dropping records without a
/// representable geometry.
pub fn to_collection<T: ToFeature>(records: &[T]) -> FeatureCollection {
    FeatureCollection {
        bbox: None,
        features: records.iter().filter_map(to_feature).collect(),
        foreign_members: None,
    }
}

/// Extract (longitude, latitude) from a GeoJSON Point geometry string.
/// `None` for non-point geometries.
#[must_use]
pub fn point_coordinates(geometry_json: &str) -> Option<(f64, f64)> {
    let geometry = parse_geometry(geometry_json)?;
    match geometry.value {
        geojson::Value::Point(ref position) if position.len() >= 2 => {
            Some((position[0], position[1]))
        }
        _ => None,
    }
}

fn parse_geometry(raw: &str) -> Option<Geometry> {
    match raw.parse::<GeoJson>().ok()? {
        GeoJson::Geometry(geometry) => Some(geometry),
        _ => None,
    }
}
