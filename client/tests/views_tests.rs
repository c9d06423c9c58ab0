//! Derived view model tests
//!
//! Property-based coverage of the screen derivations: nearby ordering,
//! search and filter behavior, the event window buckets, and the owner
//! statistics panel.

use proptest::prelude::*;

use mesa_client::views::{
    calendar_items, filter_cards, home_cards, matches_window, nearby_sorted, owner_stats,
    profile_completeness, search_restaurants, EventWindow,
};
use shared::models::{
    Restaurant, RestaurantEvent, RestaurantFeatures, DEFAULT_RATING, DEFAULT_STATUS,
};
use shared::types::Coordinates;

// ============================================================================
// Property Test Strategies
// ============================================================================

fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z ]{2,19}"
}

/// Coordinates around the default map center
fn coords_strategy() -> impl Strategy<Value = (f64, f64)> {
    (19.5f64..20.5f64, -102.8f64..-101.8f64)
}

fn restaurant_strategy() -> impl Strategy<Value = Restaurant> {
    (
        "[a-z0-9]{6}",
        name_strategy(),
        proptest::option::of(coords_strategy()),
        proptest::bool::ANY,
    )
        .prop_map(|(id, name, coords, is_owner)| Restaurant {
            id,
            name,
            category: "General".into(),
            latitude: coords.map(|(lat, _)| lat),
            longitude: coords.map(|(_, lon)| lon),
            address: None,
            phone: None,
            description: None,
            rating: DEFAULT_RATING,
            status: DEFAULT_STATUS.into(),
            features: RestaurantFeatures::default(),
            images: vec![],
            events: vec![],
            menu: vec![],
            is_owner_restaurant: is_owner,
            owner_id: None,
        })
}

/// Free-text date labels, biased toward the bucket keywords
fn date_label_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Hoy 9pm".to_string()),
        Just("hoy a las 8".to_string()),
        Just("Mañana 7pm".to_string()),
        Just("Viernes de trivia".to_string()),
        Just("Este fin de semana".to_string()),
        Just("15 de diciembre".to_string()),
        "[A-Za-z0-9 ]{1,20}",
    ]
}

// ============================================================================
// Property-Based Tests
// ============================================================================

proptest! {
    /// Every label in the today bucket is also in the week bucket, and
    /// every label at all is in the month bucket
    #[test]
    fn prop_window_buckets_nest(label in date_label_strategy()) {
        if matches_window(&label, EventWindow::Today) {
            prop_assert!(matches_window(&label, EventWindow::Week));
        }
        prop_assert!(matches_window(&label, EventWindow::Month));
    }

    /// Nearby ordering: owner cards lead, then known distances ascend, then
    /// distance-less cards
    #[test]
    fn prop_nearby_sort_orders_correctly(
        restaurants in proptest::collection::vec(restaurant_strategy(), 0..12),
    ) {
        let origin = Some(Coordinates::new(20.076186, -102.271682));
        let sorted = nearby_sorted(home_cards(restaurants, origin, &[]));

        let mut seen_non_owner = false;
        let mut last_distance = f64::NEG_INFINITY;
        for card in &sorted {
            if card.restaurant.is_owner_restaurant {
                // No owner card after a non-owner card
                prop_assert!(!seen_non_owner);
            } else {
                seen_non_owner = true;
                let d = card.distance_meters.unwrap_or(f64::INFINITY);
                prop_assert!(d >= last_distance);
                last_distance = d;
            }
        }
    }

    /// Sorting never drops or invents cards
    #[test]
    fn prop_nearby_sort_is_a_permutation(
        restaurants in proptest::collection::vec(restaurant_strategy(), 0..12),
    ) {
        let cards = home_cards(restaurants, None, &[]);
        let mut before: Vec<String> = cards.iter().map(|c| c.restaurant.id.clone()).collect();
        let mut after: Vec<String> = nearby_sorted(cards)
            .iter()
            .map(|c| c.restaurant.id.clone())
            .collect();
        before.sort();
        after.sort();
        prop_assert_eq!(before, after);
    }

    /// Search with the full lowercased name always finds the restaurant;
    /// empty queries never return anything
    #[test]
    fn prop_search_finds_by_exact_name(
        restaurants in proptest::collection::vec(restaurant_strategy(), 1..8),
    ) {
        let needle = restaurants[0].name.to_lowercase();
        let hits = search_restaurants(&restaurants, &needle);
        prop_assert!(hits.iter().any(|r| r.id == restaurants[0].id));
        prop_assert!(search_restaurants(&restaurants, "").is_empty());
        prop_assert!(search_restaurants(&restaurants, "   ").is_empty());
    }

    /// The home filter with an empty query and no category chip keeps
    /// everything
    #[test]
    fn prop_empty_home_filter_keeps_all(
        restaurants in proptest::collection::vec(restaurant_strategy(), 0..8),
    ) {
        let cards = home_cards(restaurants, None, &[]);
        let len = cards.len();
        prop_assert_eq!(filter_cards(cards, "", None).len(), len);
    }

    /// Completeness is always a percentage
    #[test]
    fn prop_completeness_is_a_percentage(restaurant in restaurant_strategy()) {
        let pct = profile_completeness(&restaurant);
        prop_assert!(pct <= 100);
    }
}

// ============================================================================
// Unit tests over assembled screens
// ============================================================================

fn restaurant_with_events(id: &str, labels: &[&str]) -> Restaurant {
    Restaurant {
        id: id.into(),
        name: format!("Restaurante {id}"),
        category: "General".into(),
        latitude: None,
        longitude: None,
        address: None,
        phone: None,
        description: None,
        rating: DEFAULT_RATING,
        status: DEFAULT_STATUS.into(),
        features: RestaurantFeatures::default(),
        images: vec![],
        events: labels
            .iter()
            .enumerate()
            .map(|(i, label)| RestaurantEvent {
                id: i.to_string(),
                title: format!("Evento {i}"),
                date_label: label.to_string(),
                description: None,
            })
            .collect(),
        menu: vec![],
        is_owner_restaurant: false,
        owner_id: None,
    }
}

#[test]
fn test_calendar_counts_match_the_windows() {
    let listing = vec![
        restaurant_with_events("a", &["Hoy 9pm", "Viernes de trivia"]),
        restaurant_with_events("b", &["15 de diciembre"]),
    ];
    assert_eq!(calendar_items(&listing, EventWindow::Today).len(), 1);
    assert_eq!(calendar_items(&listing, EventWindow::Week).len(), 2);
    assert_eq!(calendar_items(&listing, EventWindow::Month).len(), 3);
}

#[test]
fn test_stats_panel_composition() {
    let mut mine = restaurant_with_events("mine", &["Hoy 9pm", "Viernes de trivia"]);
    mine.address = Some("Av. Madero 12".into());
    mine.features.delivery = true;

    let stats = owner_stats(&mine, 4);
    assert_eq!(stats.reach, 120 + 2 * 18);
    assert_eq!(stats.saves, 4);
    assert_eq!(stats.recent_events.len(), 2);
    assert_eq!(stats.recent_events[0].title, "Evento 0");
    // name + address + feature = 3 of 6
    assert_eq!(stats.completeness_percent, 50);
}
