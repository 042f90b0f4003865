use std::env;

#[derive(Debug, Clone)]
pub enum Deployment {
    Local,
    Dev,
    Stage,
    Prod,
}

impl Deployment {
    #[must_use]
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "dev" | "development" => Self::Dev,
            "stage" | "staging" => Self::Stage,
            "prod" | "production" => Self::Prod,
            _ => Self::Local,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    // Database
    pub database_url: String,

    // API settings
    pub api_host: String,
    pub api_port: u16,
    pub cors_origins: String,

    // Clustering defaults (DBSCAN)
    pub clustering_eps_meters: f64,
    pub clustering_min_samples: usize,

    // Reverse geocoding (optional, best-effort)
    pub enable_geocoding: bool,
    pub geocoding_base_url: String,
    pub geocoding_user_agent: String,

    // Application metadata
    pub deployment: Deployment,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Missing` if required environment variables are not set.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            // Database
            database_url: env::var("DATABASE_URL")
                .map_err(|_| ConfigError::Missing("DATABASE_URL"))?,

            // API settings
            api_host: env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            api_port: env::var("API_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),
            cors_origins: env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".to_string()),

            // Clustering defaults
            clustering_eps_meters: env::var("CLUSTERING_EPS")
                .unwrap_or_else(|_| "1000".to_string())
                .parse()
                .unwrap_or(1000.0),
            clustering_min_samples: env::var("CLUSTERING_MIN_SAMPLES")
                .unwrap_or_else(|_| "2".to_string())
                .parse()
                .unwrap_or(2),

            // Reverse geocoding
            enable_geocoding: env::var("ENABLE_GEOCODING")
                .unwrap_or_else(|_| "false".to_string())
                .parse()
                .unwrap_or(false),
            geocoding_base_url: env::var("GEOCODING_BASE_URL")
                .unwrap_or_else(|_| "https://nominatim.openstreetmap.org".to_string()),
            geocoding_user_agent: env::var("GEOCODING_USER_AGENT")
                .unwrap_or_else(|_| "beetrack-api".to_string()),

            // Application metadata
            deployment: Deployment::from_str(
                &env::var("DEPLOYMENT").unwrap_or_else(|_| "local".to_string()),
            ),
        })
    }

    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.api_host, self.api_port)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}
