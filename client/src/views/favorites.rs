//! Favorites screen derivation

use shared::models::Restaurant;

/// The favorited subset of the listing, in listing order. Ids whose
/// restaurant has disappeared from the collection are simply not shown.
pub fn favorite_restaurants(restaurants: &[Restaurant], favorite_ids: &[String]) -> Vec<Restaurant> {
    restaurants
        .iter()
        .filter(|r| favorite_ids.iter().any(|id| id == &r.id))
        .cloned()
        .collect()
}
