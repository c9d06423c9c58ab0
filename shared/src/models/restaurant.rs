//! Restaurant, menu, and event models
//!
//! The wire representation is camelCase JSON, matching the documents held by
//! the remote store. Optional fields are omitted entirely when absent; the
//! store rejects explicit nulls.

use serde::{Deserialize, Serialize};

use crate::types::Coordinates;

/// Display defaults applied when a remote document is missing a field
pub const DEFAULT_RESTAURANT_NAME: &str = "Restaurante sin nombre";
pub const DEFAULT_CATEGORY: &str = "General";
pub const DEFAULT_RATING: f64 = 4.5;
pub const DEFAULT_STATUS: &str = "Abierto ahora";
pub const STATUS_CLOSED: &str = "Cerrado";

/// Seed values for a freshly registered restaurant
pub const SEED_RESTAURANT_NAME: &str = "Nuevo Restaurante";
pub const SEED_RATING: f64 = 5.0;

/// A restaurant is "open" when its free-text status contains this keyword,
/// case-insensitively.
pub const OPEN_KEYWORD: &str = "abierto";

fn is_false(v: &bool) -> bool {
    !*v
}

/// Named boolean capabilities advertised by a restaurant.
///
/// Absent on the wire means false.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantFeatures {
    #[serde(default, skip_serializing_if = "is_false")]
    pub wifi: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub outdoor_seating: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub parking: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub reservations: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub delivery: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub card_payment: bool,
}

impl RestaurantFeatures {
    /// True when at least one capability is advertised
    pub fn any(&self) -> bool {
        self.wifi
            || self.outdoor_seating
            || self.parking
            || self.reservations
            || self.delivery
            || self.card_payment
    }
}

/// A menu item, owned by its restaurant and unique by id within the menu
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Dish {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Absent means available; an explicit `false` is the only way to mark a
    /// dish unavailable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_available: Option<bool>,
}

impl Dish {
    pub fn available(&self) -> bool {
        self.is_available != Some(false)
    }
}

/// A promotional announcement attached to a restaurant.
///
/// `date_label` is free text ("Hoy 9pm", "Viernes de trivia"), matched by
/// keyword for the today/week calendar buckets, not parsed as a date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantEvent {
    pub id: String,
    pub title: String,
    pub date_label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// An event as submitted by the owner; the projection synthesizes the id
#[derive(Debug, Clone)]
pub struct EventDraft {
    pub title: String,
    pub date_label: String,
    pub description: Option<String>,
}

/// A dish as submitted by the owner; the projection synthesizes the id
#[derive(Debug, Clone)]
pub struct DishDraft {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub image: Option<String>,
}

/// A fully-typed restaurant listing as projected from the remote store
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub rating: f64,
    pub status: String,
    #[serde(default)]
    pub features: RestaurantFeatures,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub events: Vec<RestaurantEvent>,
    #[serde(default)]
    pub menu: Vec<Dish>,
    /// Derived: true iff the record's owner equals the current session.
    /// Never persisted; recomputed on every projection refresh.
    #[serde(skip)]
    pub is_owner_restaurant: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
}

impl Restaurant {
    /// Both coordinates, when the listing has a registered position
    pub fn coordinates(&self) -> Option<Coordinates> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some(Coordinates::new(lat, lon)),
            _ => None,
        }
    }

    /// Open-state detection by localized keyword match against the free-text
    /// status.
    pub fn is_open(&self) -> bool {
        self.status.to_lowercase().contains(OPEN_KEYWORD)
    }

    /// First image is treated as the cover photo
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// A merge patch against a restaurant document.
///
/// Every field is optional and absent fields are omitted from the serialized
/// form. This is the write-time sanitization rule: "no value" means "key not
/// sent", never an explicit null.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<RestaurantFeatures>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu: Option<Vec<Dish>>,
}
