//! Unit tests for GeoJSON serialization of geometry-bearing records.
//!
//! Run with: cargo test --test geojson_unit_test

use chrono::DateTime;
use geojson::JsonObject;
use serde_json::json;

use beetrack_api::spatial::geojson::{ToFeature, point_coordinates, to_collection, to_feature};
use beetrack_api::spatial::search::RucheRow;

struct Record {
    name: &'static str,
    geom_json: Option<String>,
}

impl Record {
    fn point(name: &'static str, lon: f64, lat: f64) -> Self {
        Self {
            name,
            geom_json: Some(format!(
                r#"{{"type":"Point","coordinates":[{lon},{lat}]}}"#
            )),
        }
    }
}

impl ToFeature for Record {
    fn geometry_json(&self) -> Option<&str> {
        self.geom_json.as_deref()
    }

    fn properties(&self) -> JsonObject {
        let mut properties = JsonObject::new();
        properties.insert("name".to_string(), json!(self.name));
        properties
    }
}

#[test]
fn feature_carries_geometry_and_properties() {
    let record = Record::point("Hive Alpha", -73.9654, 40.7829);
    let feature = to_feature(&record).unwrap();

    let value = serde_json::to_value(&feature).unwrap();
    assert_eq!(value["type"], "Feature");
    assert_eq!(value["geometry"]["type"], "Point");
    assert_eq!(value["geometry"]["coordinates"][0], -73.9654);
    assert_eq!(value["properties"]["name"], "Hive Alpha");
}

#[test]
fn null_geometry_yields_no_feature() {
    let record = Record {
        name: "No location",
        geom_json: None,
    };
    assert!(to_feature(&record).is_none());
}

#[test]
fn unparsable_geometry_yields_no_feature() {
    let record = Record {
        name: "Broken",
        geom_json: Some("not geojson".to_string()),
    };
    assert!(to_feature(&record).is_none());
}

#[test]
fn collection_silently_drops_records_without_geometry() {
    let records = vec![
        Record::point("A", 0.0, 0.0),
        Record {
            name: "B",
            geom_json: None,
        },
        Record::point("C", 1.0, 1.0),
    ];

    let collection = to_collection(&records);
    assert_eq!(collection.features.len(), 2);

    let value = serde_json::to_value(&collection).unwrap();
    assert_eq!(value["type"], "FeatureCollection");
}

#[test]
fn point_coordinates_extracts_lon_lat() {
    let raw = r#"{"type":"Point","coordinates":[-73.9969,40.7061]}"#;
    assert_eq!(point_coordinates(raw), Some((-73.9969, 40.7061)));
}

#[test]
fn point_coordinates_rejects_non_points() {
    let polygon = r#"{"type":"Polygon","coordinates":[[[0,0],[1,0],[1,1],[0,0]]]}"#;
    assert_eq!(point_coordinates(polygon), None);
    assert_eq!(point_coordinates("[]"), None);
}

#[test]
fn ruche_row_exposes_non_geometry_attributes_as_properties() {
    let row = RucheRow {
        id: 7,
        name: "Hive Beta".to_string(),
        rucher_id: Some(2),
        queen_info: Some(json!({"age": 1, "breed": "Carniolan"})),
        created_at: DateTime::parse_from_rfc3339("2026-08-01T12:00:00+00:00").unwrap(),
        active: true,
        geom_json: Some(r#"{"type":"Point","coordinates":[-73.9644,40.7839]}"#.to_string()),
    };

    let feature = to_feature(&row).unwrap();
    let value = serde_json::to_value(&feature).unwrap();

    assert_eq!(value["properties"]["id"], 7);
    assert_eq!(value["properties"]["rucher_id"], 2);
    assert_eq!(value["properties"]["queen_info"]["breed"], "Carniolan");
    assert_eq!(value["properties"]["active"], true);
    // Geometry stays out of properties
    assert!(value["properties"].get("geom_json").is_none());
}
