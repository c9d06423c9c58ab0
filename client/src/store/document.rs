//! Wire-document to model mapping
//!
//! Remote documents are authored by many client versions and can miss any
//! field. Mapping never fails: absent or malformed fields fall back to the
//! display defaults, so one bad document cannot take down the whole listing.

use serde_json::Value;
use shared::models::{
    Dish, Restaurant, RestaurantEvent, RestaurantFeatures, RestaurantProfile, DEFAULT_CATEGORY,
    DEFAULT_PROFILE_NAME, DEFAULT_RATING, DEFAULT_RESTAURANT_NAME, DEFAULT_STATUS,
};

use super::Document;

/// Project one wire document into a typed [`Restaurant`].
///
/// `owner_doc_id` is the current session's restaurant document key, when an
/// owner is signed in; ownership is recomputed here on every refresh and
/// never persisted.
pub fn map_document(id: &str, doc: &Document, owner_doc_id: Option<&str>) -> Restaurant {
    let owner_id = str_field(doc, "ownerId");
    let is_owner_restaurant = match (owner_doc_id, owner_id.as_deref()) {
        (Some(session), Some(owner)) => session == owner,
        // Legacy documents are keyed by the owner id directly
        (Some(session), None) => session == id,
        _ => false,
    };

    Restaurant {
        id: id.to_string(),
        name: str_field(doc, "name").unwrap_or_else(|| DEFAULT_RESTAURANT_NAME.to_string()),
        category: str_field(doc, "category").unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
        latitude: f64_field(doc, "latitude"),
        longitude: f64_field(doc, "longitude"),
        address: str_field(doc, "address"),
        phone: str_field(doc, "phone"),
        description: str_field(doc, "description"),
        rating: f64_field(doc, "rating").unwrap_or(DEFAULT_RATING),
        status: str_field(doc, "status").unwrap_or_else(|| DEFAULT_STATUS.to_string()),
        features: typed_field::<RestaurantFeatures>(doc, "features"),
        images: typed_field::<Vec<String>>(doc, "images"),
        events: typed_field::<Vec<RestaurantEvent>>(doc, "events"),
        menu: typed_field::<Vec<Dish>>(doc, "menu"),
        is_owner_restaurant,
        owner_id,
    }
}

/// Project the profile snapshot shown in the owner header.
///
/// Same tolerance rules as [`map_document`]: a missing or partial document
/// yields the placeholder profile rather than an error.
pub fn map_profile(doc: &Document) -> RestaurantProfile {
    RestaurantProfile {
        name: str_field(doc, "name").unwrap_or_else(|| DEFAULT_PROFILE_NAME.to_string()),
        address: str_field(doc, "address"),
        phone: str_field(doc, "phone"),
        description: str_field(doc, "description"),
        latitude: f64_field(doc, "latitude"),
        longitude: f64_field(doc, "longitude"),
    }
}

fn str_field(doc: &Document, key: &str) -> Option<String> {
    doc.get(key).and_then(Value::as_str).map(str::to_string)
}

fn f64_field(doc: &Document, key: &str) -> Option<f64> {
    doc.get(key).and_then(Value::as_f64)
}

/// Deserialize a structured field, falling back to its default when the
/// field is absent or malformed
fn typed_field<T: serde::de::DeserializeOwned + Default>(doc: &Document, key: &str) -> T {
    doc.get(key)
        .cloned()
        .and_then(|v| serde_json::from_value(v).ok())
        .unwrap_or_default()
}
