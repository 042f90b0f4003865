//! Spatial query and clustering core.
//!
//! Coordinate validation, geodesic distance, radius search against PostGIS,
//! DBSCAN/K-means clustering, and GeoJSON serialization of stored geometries.
//! All coordinates are (longitude, latitude) pairs in WGS84 (SRID 4326).

pub mod cluster;
pub mod coords;
pub mod distance;
pub mod geojson;
pub mod search;
