//! Search screen derivation
//!
//! Unlike the home filter bar, an empty search query shows nothing: the
//! screen opens blank and fills as the user types.

use shared::models::Restaurant;

/// Case-insensitive containment over name and category. Empty or
/// whitespace-only queries return no results.
pub fn search_restaurants(restaurants: &[Restaurant], query: &str) -> Vec<Restaurant> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }
    restaurants
        .iter()
        .filter(|r| {
            r.name.to_lowercase().contains(&query) || r.category.to_lowercase().contains(&query)
        })
        .cloned()
        .collect()
}
