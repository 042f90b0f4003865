//! Best-effort reverse geocoding against a Nominatim server.
//!
//! Pass-through collaborator: lookups are optional, and callers fall back to a
//! placeholder address when a lookup fails.

pub mod client;
pub mod models;

pub use client::GeocodeClient;
