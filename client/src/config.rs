//! Configuration management for the Mesa client core
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with MESA_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Remote document store configuration
    pub store: StoreConfig,

    /// Local favorites persistence
    pub favorites: FavoritesConfig,

    /// Reverse-geocoding service
    pub geocoder: GeocoderConfig,

    /// Location defaults
    pub location: LocationConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    /// Collection holding the restaurant documents
    pub collection: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FavoritesConfig {
    /// Storage key for the JSON-encoded id array
    pub key: String,

    /// Directory for file-backed storage; in-memory when absent
    pub path: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GeocoderConfig {
    /// Reverse-geocoding API endpoint
    pub endpoint: String,

    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LocationConfig {
    /// Label shown before the user shares a position
    pub default_label: String,

    /// Map center used when geolocation is denied or unavailable
    pub fallback_latitude: f64,
    pub fallback_longitude: f64,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("MESA_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("store.collection", "restaurants")?
            .set_default("favorites.key", "MESA_FAVORITES")?
            .set_default("geocoder.endpoint", "https://nominatim.openstreetmap.org")?
            .set_default("geocoder.timeout_seconds", 10)?
            .set_default("location.default_label", "Cerca de Zona Centro")?
            .set_default("location.fallback_latitude", 20.076186)?
            .set_default("location.fallback_longitude", -102.271682)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (MESA_ prefix)
            .add_source(
                Environment::with_prefix("MESA")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
