//! Common types used across the platform

use serde::{Deserialize, Serialize};

/// GPS coordinates in decimal degrees
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// The user's last known position plus a human-readable place label.
///
/// Created empty at app start, filled by geolocation or manual selection,
/// never persisted across restarts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocationState {
    /// None until the user grants location access or picks a point manually
    pub coords: Option<Coordinates>,
    /// Friendly label, e.g. "Cerca de Zona Centro"
    pub label: String,
}

impl LocationState {
    pub fn with_label(label: impl Into<String>) -> Self {
        Self {
            coords: None,
            label: label.into(),
        }
    }
}

/// Partial update applied to a [`LocationState`]; absent fields keep the
/// previous value so a label-only update never drops known coordinates.
#[derive(Debug, Clone, Default)]
pub struct LocationPatch {
    pub coords: Option<Coordinates>,
    pub label: Option<String>,
}
