//! Device location state
//!
//! Session-only: the position is acquired on demand, never persisted, and
//! resets to the fallback label on restart. Acquisition is best effort; a
//! denied permission informs the user and leaves the previous state alone so
//! distance labels keep whatever basis they had.

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::watch;
use tracing::warn;

use shared::types::{Coordinates, LocationPatch, LocationState};

use crate::alerts::AlertSink;
use crate::config::LocationConfig;
use crate::external::ReverseGeocoder;

#[derive(Error, Debug)]
pub enum GeoError {
    #[error("location permission denied")]
    PermissionDenied,

    #[error("position unavailable: {0}")]
    Unavailable(String),
}

/// Single-shot device position source
#[async_trait]
pub trait Geolocator: Send + Sync {
    async fn current_position(&self) -> Result<Coordinates, GeoError>;
}

/// Always returns the same position. For tests and the demo binary.
pub struct FixedPosition(pub Coordinates);

#[async_trait]
impl Geolocator for FixedPosition {
    async fn current_position(&self) -> Result<Coordinates, GeoError> {
        Ok(self.0)
    }
}

/// Always reports a denied permission. For tests.
pub struct DeniedPosition;

#[async_trait]
impl Geolocator for DeniedPosition {
    async fn current_position(&self) -> Result<Coordinates, GeoError> {
        Err(GeoError::PermissionDenied)
    }
}

pub struct LocationService {
    state_tx: watch::Sender<LocationState>,
    fallback_center: Coordinates,
}

impl LocationService {
    pub fn new(config: &LocationConfig) -> Self {
        let initial = LocationState::with_label(&config.default_label);
        let (state_tx, _) = watch::channel(initial);
        Self {
            state_tx,
            fallback_center: Coordinates::new(config.fallback_latitude, config.fallback_longitude),
        }
    }

    pub fn state(&self) -> LocationState {
        self.state_tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<LocationState> {
        self.state_tx.subscribe()
    }

    /// Merge a partial update: absent fields keep their current value
    pub fn update(&self, patch: &LocationPatch) {
        self.state_tx.send_modify(|state| {
            if let Some(coords) = patch.coords {
                state.coords = Some(coords);
            }
            if let Some(label) = &patch.label {
                state.label = label.clone();
            }
        });
    }

    /// Drop the shared position, back to the fallback label
    pub fn clear(&self, config: &LocationConfig) {
        self.state_tx
            .send_replace(LocationState::with_label(&config.default_label));
    }

    /// The point the city map centers on: the shared position, else the
    /// configured fallback center
    pub fn map_center(&self) -> Coordinates {
        self.state_tx
            .borrow()
            .coords
            .unwrap_or(self.fallback_center)
    }

    /// One best-effort acquisition pass: position, then a reverse-geocoded
    /// label. A geocoding failure still keeps the coordinates; a position
    /// failure alerts and changes nothing.
    pub async fn acquire(
        &self,
        locator: &dyn Geolocator,
        geocoder: &ReverseGeocoder,
        alerts: &dyn AlertSink,
    ) {
        let coords = match locator.current_position().await {
            Ok(coords) => coords,
            Err(GeoError::PermissionDenied) => {
                alerts.alert(
                    "Permiso de ubicación",
                    "Activa el permiso de ubicación para ver restaurantes cerca de ti.",
                );
                return;
            }
            Err(err) => {
                warn!(error = %err, "could not acquire a position");
                alerts.alert("Ubicación", "No se pudo obtener tu ubicación.");
                return;
            }
        };

        let label = geocoder.label_for(coords).await;
        self.update(&LocationPatch {
            coords: Some(coords),
            label: Some(label),
        });
    }
}
