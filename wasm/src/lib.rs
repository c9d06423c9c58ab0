//! WebAssembly module for the Mesa restaurant platform
//!
//! Exposes the pure computations to the JavaScript shell so the rendered
//! screens agree with the client core:
//! - Distance between coordinates and its display label
//! - Profile completeness scoring
//! - Open-status detection
//! - Offline form validation

use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

use shared::geo;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages in browser console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Straight-line distance in meters between two coordinate pairs
#[wasm_bindgen]
pub fn distance_meters(from_lat: f64, from_lon: f64, to_lat: f64, to_lon: f64) -> f64 {
    geo::haversine_meters(
        &Coordinates::new(from_lat, from_lon),
        &Coordinates::new(to_lat, to_lon),
    )
}

/// Display label for a distance in meters ("350 m", "1.2 km")
#[wasm_bindgen]
pub fn format_distance(meters: f64) -> String {
    geo::format_distance_meters(meters)
}

/// Whether a free-text status counts as open
#[wasm_bindgen]
pub fn is_open_status(status: &str) -> bool {
    status.to_lowercase().contains(OPEN_KEYWORD)
}

/// Profile completeness percentage over a restaurant document (JSON)
#[wasm_bindgen]
pub fn profile_completeness(restaurant_json: &str) -> Result<u32, JsValue> {
    let restaurant: Restaurant = serde_json::from_str(restaurant_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid restaurant JSON: {}", e)))?;
    let filled = [
        !restaurant.name.trim().is_empty(),
        filled_text(&restaurant.address),
        filled_text(&restaurant.phone),
        filled_text(&restaurant.description),
        restaurant.latitude.is_some(),
        restaurant.features.any(),
    ]
    .iter()
    .filter(|&&f| f)
    .count() as u32;
    Ok((filled * 100 + 3) / 6)
}

/// Validate an email address for the signup form
#[wasm_bindgen]
pub fn check_email(email: &str) -> bool {
    validate_email(email).is_ok()
}

/// Validate a password against the provider's minimum
#[wasm_bindgen]
pub fn check_password(password: &str) -> bool {
    validate_password(password).is_ok()
}

/// Validate a dish price entered in the menu editor
#[wasm_bindgen]
pub fn check_dish_price(price: f64) -> bool {
    validate_dish_price(price).is_ok()
}

/// Validate a latitude/longitude pair from the position picker
#[wasm_bindgen]
pub fn check_coordinates(latitude: f64, longitude: f64) -> bool {
    validate_coordinates(latitude, longitude).is_ok()
}

fn filled_text(field: &Option<String>) -> bool {
    field
        .as_deref()
        .map(|text| !text.trim().is_empty())
        .unwrap_or(false)
}
