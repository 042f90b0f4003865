//! Unit tests for the spatial core: coordinates, distance, clustering.
//!
//! Run with: cargo test --test spatial_unit_test

use beetrack_api::error::AppError;
use beetrack_api::spatial::cluster::{self, LabeledPoint, NOISE};
use beetrack_api::spatial::coords;
use beetrack_api::spatial::distance::geodesic_distance_m;

// ---------- coordinates ----------

#[test]
fn validate_accepts_wgs84_bounds() {
    assert!(coords::validate_coordinates(0.0, 0.0));
    assert!(coords::validate_coordinates(-180.0, -90.0));
    assert!(coords::validate_coordinates(180.0, 90.0));
    assert!(coords::validate_coordinates(-73.9654, 40.7829));

    assert!(!coords::validate_coordinates(180.1, 0.0));
    assert!(!coords::validate_coordinates(-181.0, 0.0));
    assert!(!coords::validate_coordinates(0.0, 90.5));
    assert!(!coords::validate_coordinates(0.0, -91.0));
}

#[test]
fn clean_parses_and_normalizes() {
    assert_eq!(
        coords::clean_coordinates("-73.9654", "40.7829"),
        Some((-73.9654, 40.7829))
    );
    assert_eq!(coords::clean_coordinates(" 10.5 ", " -20 "), Some((10.5, -20.0)));
}

#[test]
fn clean_rejects_bad_input_without_panicking() {
    // Out of range
    assert_eq!(coords::clean_coordinates("181", "0"), None);
    assert_eq!(coords::clean_coordinates("0", "-91"), None);
    // Non-numeric
    assert_eq!(coords::clean_coordinates("abc", "10"), None);
    assert_eq!(coords::clean_coordinates("10", ""), None);
}

#[test]
fn parse_lat_lon_reports_descriptive_errors() {
    let parsed = coords::parse_lat_lon("40.7829", "-73.9654").unwrap();
    assert_eq!(parsed, (40.7829, -73.9654));

    let err = coords::parse_lat_lon("95", "0").unwrap_err();
    assert!(matches!(err, AppError::BadRequest(ref msg) if msg.contains("Latitude")));

    let err = coords::parse_lat_lon("0", "-200").unwrap_err();
    assert!(matches!(err, AppError::BadRequest(ref msg) if msg.contains("Longitude")));

    let err = coords::parse_lat_lon("not-a-number", "0").unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));
}

#[test]
fn coerce_accepts_numbers_and_numeric_strings() {
    use serde_json::json;

    assert_eq!(coords::coerce_coordinate(&json!(12.5)), Some(12.5));
    assert_eq!(coords::coerce_coordinate(&json!("12.5")), Some(12.5));
    assert_eq!(coords::coerce_coordinate(&json!(" -73.9654 ")), Some(-73.9654));
    assert_eq!(coords::coerce_coordinate(&json!("twelve")), None);
    assert_eq!(coords::coerce_coordinate(&json!(true)), None);
    assert_eq!(coords::coerce_coordinate(&json!(null)), None);
}

// ---------- geodesic distance ----------

#[test]
fn distance_to_self_is_zero() {
    let d = geodesic_distance_m(-73.9654, 40.7829, -73.9654, 40.7829);
    assert!(d.abs() < 1e-6);
}

#[test]
fn distance_is_symmetric() {
    let ab = geodesic_distance_m(2.3522, 48.8566, -0.1276, 51.5072);
    let ba = geodesic_distance_m(-0.1276, 51.5072, 2.3522, 48.8566);
    assert!((ab - ba).abs() < 1e-6);
}

#[test]
fn one_degree_of_longitude_on_the_equator() {
    // WGS84 equatorial circumference / 360
    let d = geodesic_distance_m(0.0, 0.0, 1.0, 0.0);
    assert!((d - 111_319.49).abs() < 1.0, "got {d}");
}

#[test]
fn known_nyc_landmark_pair() {
    // Central Park apiary to Brooklyn Bridge apiary, roughly 8.9 km
    let d = geodesic_distance_m(-73.9654, 40.7829, -73.9969, 40.7061);
    assert!((8_800.0..9_100.0).contains(&d), "got {d}");
}

// ---------- DBSCAN ----------

#[test]
fn dbscan_empty_input_yields_no_clusters() {
    let result = cluster::cluster_points(&[], 1000.0, 2).unwrap();
    assert!(result.labels.is_empty());
    assert_eq!(result.n_clusters, 0);
    assert!(result.clusters.is_empty());
}

#[test]
fn dbscan_fewer_points_than_min_samples_is_all_noise() {
    let points = [(0.0, 0.0), (0.001, 0.0)];
    let result = cluster::cluster_points(&points, 1000.0, 3).unwrap();
    assert_eq!(result.labels, vec![NOISE, NOISE]);
    assert_eq!(result.n_clusters, 0);
    assert!(result.clusters.is_empty());
}

#[test]
fn dbscan_single_point_with_min_samples_one_forms_a_cluster() {
    let result = cluster::cluster_points(&[(0.0, 0.0)], 1000.0, 1).unwrap();
    assert_eq!(result.labels.len(), 1);
    assert_ne!(result.labels[0], NOISE);
    assert_eq!(result.n_clusters, 1);
}

#[test]
fn dbscan_groups_near_points_and_flags_outliers() {
    // First two points are ~111 m apart; the third is ~150 km away.
    let points = [(0.0, 0.0), (0.001, 0.0), (1.0, 1.0)];
    let result = cluster::cluster_points(&points, 1000.0, 2).unwrap();

    assert_eq!(result.labels.len(), 3);
    assert_eq!(result.labels[0], result.labels[1]);
    assert_ne!(result.labels[0], NOISE);
    assert_eq!(result.labels[2], NOISE);
    assert_eq!(result.n_clusters, 1);

    let members = &result.clusters[&result.labels[0]];
    assert_eq!(members.len(), 2);
    assert_eq!(members[0].index, 0);
    assert_eq!(members[1].index, 1);
}

#[test]
fn dbscan_rejects_non_positive_eps() {
    let err = cluster::cluster_points(&[(0.0, 0.0)], 0.0, 2).unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));
}

// ---------- K-means ----------

fn labeled(id: i32, lon: f64, lat: f64) -> LabeledPoint {
    LabeledPoint {
        id,
        name: format!("Hive {id}"),
        longitude: lon,
        latitude: lat,
    }
}

#[test]
fn kmeans_fails_with_fewer_points_than_clusters() {
    let points = [labeled(1, 0.0, 0.0), labeled(2, 1.0, 1.0)];
    let err = cluster::kmeans_clusters(&points, 3).unwrap_err();
    assert!(matches!(err, AppError::InsufficientData(_)));
}

#[test]
fn kmeans_partitions_separated_groups() {
    let points = [
        labeled(1, 0.0, 0.0),
        labeled(2, 0.001, 0.0),
        labeled(3, 10.0, 10.0),
        labeled(4, 10.001, 10.0),
    ];
    let clusters = cluster::kmeans_clusters(&points, 2).unwrap();

    assert_eq!(clusters.len(), 2);
    for cluster in &clusters {
        assert_eq!(cluster.features.len(), 2);
        let mut ids: Vec<i32> = cluster.features.iter().map(|m| m.id).collect();
        ids.sort_unstable();
        assert!(ids == vec![1, 2] || ids == vec![3, 4], "got {ids:?}");
        // Centroid sits between its members
        for member in &cluster.features {
            assert!((member.coordinates[0] - cluster.center[0]).abs() < 0.01);
            assert!((member.coordinates[1] - cluster.center[1]).abs() < 0.01);
        }
    }
}

#[test]
fn kmeans_is_reproducible_for_the_same_dataset() {
    let points: Vec<LabeledPoint> = (0..12)
        .map(|i| labeled(i, f64::from(i % 4), f64::from(i / 4)))
        .collect();

    let first = cluster::kmeans_clusters(&points, 3).unwrap();
    let second = cluster::kmeans_clusters(&points, 3).unwrap();

    let first_json = serde_json::to_value(&first).unwrap();
    let second_json = serde_json::to_value(&second).unwrap();
    assert_eq!(first_json, second_json);
}

#[test]
fn kmeans_with_as_many_clusters_as_points_is_singletons() {
    let points = [
        labeled(1, 0.0, 0.0),
        labeled(2, 5.0, 5.0),
        labeled(3, -5.0, -5.0),
    ];
    let clusters = cluster::kmeans_clusters(&points, 3).unwrap();

    assert_eq!(clusters.len(), 3);
    assert!(clusters.iter().all(|c| c.features.len() == 1));
}
