//! Coordinate validation and normalization.

use crate::error::{AppError, AppResult};

/// Check that a (longitude, latitude) pair lies within WGS84 bounds.
#[must_use]
pub fn validate_coordinates(longitude: f64, latitude: f64) -> bool {
    (-180.0..=180.0).contains(&longitude) && (-90.0..=90.0).contains(&latitude)
}

/// Parse and validate raw coordinate strings.
///
/// Returns the normalized `(longitude, latitude)` pair, or `None` when either
/// value is non-numeric or out of range. Never panics on bad input.
#[must_use]
pub fn clean_coordinates(longitude: &str, latitude: &str) -> Option<(f64, f64)> {
    let lon: f64 = longitude.trim().parse().ok()?;
    let lat: f64 = latitude.trim().parse().ok()?;

    if validate_coordinates(lon, lat) {
        Some((lon, lat))
    } else {
        None
    }
}

/// Route-level coordinate parsing with descriptive error messages.
///
/// # Errors
///
/// Returns `AppError::BadRequest` when a value does not parse as a number or
/// falls outside the valid range.
pub fn parse_lat_lon(lat: &str, lon: &str) -> AppResult<(f64, f64)> {
    let lat: f64 = lat
        .trim()
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid coordinate format".to_string()))?;
    let lon: f64 = lon
        .trim()
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid coordinate format".to_string()))?;

    if !(-90.0..=90.0).contains(&lat) {
        return Err(AppError::BadRequest(
            "Latitude must be between -90 and 90".to_string(),
        ));
    }
    if !(-180.0..=180.0).contains(&lon) {
        return Err(AppError::BadRequest(
            "Longitude must be between -180 and 180".to_string(),
        ));
    }

    Ok((lat, lon))
}

/// Coerce an untrusted JSON value (number or numeric string) into an `f64`.
#[must_use]
pub fn coerce_coordinate(value: &serde_json::Value) -> Option<f64> {
    match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
