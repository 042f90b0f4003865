use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::config::Config;
use crate::geocode::GeocodeClient;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: Arc<Config>,
    /// `None` when reverse geocoding is disabled by configuration.
    pub geocoder: Option<Arc<GeocodeClient>>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, config: Config, geocoder: Option<GeocodeClient>) -> Self {
        Self {
            db,
            config: Arc::new(config),
            geocoder: geocoder.map(Arc::new),
        }
    }
}
