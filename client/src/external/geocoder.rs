//! Reverse-geocoding client
//!
//! Turns a coordinate pair into the short "Cerca de {lugar}" label shown in
//! the home header. The lookup is cosmetic: any failure falls back to a
//! generic label and is only logged.

use std::time::Duration;

use serde::Deserialize;
use tracing::warn;

use shared::types::Coordinates;

use crate::config::GeocoderConfig;
use crate::error::{AppError, AppResult};

/// Label used when the service is unreachable or returns nothing usable
pub const FALLBACK_LABEL: &str = "Ubicación actual";

pub struct ReverseGeocoder {
    client: Option<reqwest::Client>,
    endpoint: String,
}

/// Nominatim-style reverse response, reduced to the address parts we label
/// with
#[derive(Debug, Deserialize)]
struct ReverseResponse {
    #[serde(default)]
    address: Address,
}

#[derive(Debug, Default, Deserialize)]
struct Address {
    neighbourhood: Option<String>,
    suburb: Option<String>,
    village: Option<String>,
    town: Option<String>,
    city: Option<String>,
}

impl ReverseGeocoder {
    pub fn new(config: &GeocoderConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|err| AppError::Configuration(err.to_string()))?;
        Ok(Self {
            client: Some(client),
            endpoint: config.endpoint.clone(),
        })
    }

    /// A geocoder that never goes to the network; every lookup falls back.
    /// For tests and offline demo runs.
    pub fn offline() -> Self {
        Self {
            client: None,
            endpoint: String::new(),
        }
    }

    /// The header label for a position. Never fails; the fallback label
    /// covers every error path.
    pub async fn label_for(&self, coords: Coordinates) -> String {
        match self.reverse(coords).await {
            Ok(Some(place)) => format!("Cerca de {place}"),
            Ok(None) => FALLBACK_LABEL.to_string(),
            Err(err) => {
                warn!(error = %err, "reverse geocoding failed");
                FALLBACK_LABEL.to_string()
            }
        }
    }

    async fn reverse(&self, coords: Coordinates) -> AppResult<Option<String>> {
        let Some(client) = &self.client else {
            return Ok(None);
        };
        let url = format!("{}/reverse", self.endpoint.trim_end_matches('/'));
        let response = client
            .get(&url)
            .query(&[
                ("lat", coords.latitude.to_string()),
                ("lon", coords.longitude.to_string()),
                ("format", "jsonv2".to_string()),
            ])
            .send()
            .await
            .map_err(|err| AppError::ExternalService(err.to_string()))?;

        if !response.status().is_success() {
            return Err(AppError::ExternalService(format!(
                "reverse geocoder returned {}",
                response.status()
            )));
        }

        let body: ReverseResponse = response
            .json()
            .await
            .map_err(|err| AppError::ExternalService(err.to_string()))?;
        Ok(place_name(body.address))
    }
}

/// The most specific populated place in the response, smallest first
fn place_name(address: Address) -> Option<String> {
    address
        .neighbourhood
        .or(address.suburb)
        .or(address.village)
        .or(address.town)
        .or(address.city)
        .filter(|name| !name.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_name_prefers_the_most_specific_part() {
        let address = Address {
            neighbourhood: Some("La Beatilla".into()),
            city: Some("La Piedad".into()),
            ..Default::default()
        };
        assert_eq!(place_name(address).as_deref(), Some("La Beatilla"));

        let address = Address {
            city: Some("La Piedad".into()),
            ..Default::default()
        };
        assert_eq!(place_name(address).as_deref(), Some("La Piedad"));
    }

    #[test]
    fn test_blank_place_names_are_ignored() {
        let address = Address {
            suburb: Some("   ".into()),
            ..Default::default()
        };
        assert!(place_name(address).is_none());
    }

    #[tokio::test]
    async fn test_offline_geocoder_falls_back() {
        let geocoder = ReverseGeocoder::offline();
        let label = geocoder.label_for(Coordinates::new(20.08, -102.27)).await;
        assert_eq!(label, FALLBACK_LABEL);
    }
}
