//! Home screen derivations: distance-annotated cards, nearby ordering, the
//! combined filter bar, and the today's-events rail

use shared::geo::{format_distance_meters, haversine_meters};
use shared::models::{Restaurant, RestaurantEvent};
use shared::types::Coordinates;

use super::calendar::{calendar_items, CalendarItem, EventWindow};

/// What one home list row renders
#[derive(Debug, Clone)]
pub struct RestaurantCard {
    pub restaurant: Restaurant,
    /// Straight-line distance from the user's position, when both ends are
    /// known
    pub distance_meters: Option<f64>,
    /// Human form of the distance ("350 m", "1.2 km")
    pub distance_label: Option<String>,
    pub is_favorite: bool,
}

impl RestaurantCard {
    fn new(restaurant: Restaurant, origin: Option<Coordinates>, favorite_ids: &[String]) -> Self {
        let distance_meters = match (origin, restaurant.coordinates()) {
            (Some(from), Some(to)) => Some(haversine_meters(&from, &to)),
            _ => None,
        };
        let is_favorite = favorite_ids.iter().any(|id| id == &restaurant.id);
        Self {
            distance_meters,
            distance_label: distance_meters.map(format_distance_meters),
            is_favorite,
            restaurant,
        }
    }
}

/// Assemble the home cards in listing order
pub fn home_cards(
    restaurants: Vec<Restaurant>,
    origin: Option<Coordinates>,
    favorite_ids: &[String],
) -> Vec<RestaurantCard> {
    restaurants
        .into_iter()
        .map(|r| RestaurantCard::new(r, origin, favorite_ids))
        .collect()
}

/// Nearby ordering: the owner's own restaurant pins to the top, everything
/// else ascends by distance. Cards without a distance sort last, keeping
/// their relative listing order (stable sort over an infinity sentinel).
pub fn nearby_sorted(mut cards: Vec<RestaurantCard>) -> Vec<RestaurantCard> {
    cards.sort_by(|a, b| {
        b.restaurant
            .is_owner_restaurant
            .cmp(&a.restaurant.is_owner_restaurant)
            .then_with(|| {
                let da = a.distance_meters.unwrap_or(f64::INFINITY);
                let db = b.distance_meters.unwrap_or(f64::INFINITY);
                da.total_cmp(&db)
            })
    });
    cards
}

/// Combined filter bar: a text query over name and category, and an optional
/// exact category chip. Both case-insensitive; an empty query matches
/// everything.
pub fn filter_cards(
    cards: Vec<RestaurantCard>,
    query: &str,
    category: Option<&str>,
) -> Vec<RestaurantCard> {
    let query = query.trim().to_lowercase();
    cards
        .into_iter()
        .filter(|card| {
            let r = &card.restaurant;
            let text_match = query.is_empty()
                || r.name.to_lowercase().contains(&query)
                || r.category.to_lowercase().contains(&query);
            let category_match = category
                .map(|c| r.category.eq_ignore_ascii_case(c))
                .unwrap_or(true);
            text_match && category_match
        })
        .collect()
}

/// The horizontal "Hoy" rail: today's events across all restaurants, newest
/// first
pub fn today_rail(restaurants: &[Restaurant]) -> Vec<CalendarItem> {
    calendar_items(restaurants, EventWindow::Today)
}

/// The first few events of one restaurant for its dashboard preview, in
/// stored order, capped
pub fn latest_events(restaurant: &Restaurant, limit: usize) -> Vec<RestaurantEvent> {
    restaurant.events.iter().take(limit).cloned().collect()
}
