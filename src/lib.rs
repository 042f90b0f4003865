//! BeeTrack API - GeoJSON API for beekeeping locations and sensor data
//!
//! This library exposes the core modules for testing and reuse.

pub mod common;
pub mod config;
pub mod entity;
pub mod error;
pub mod geocode;
pub mod routes;
pub mod spatial;
