//! Owner statistics panel

use shared::models::{Restaurant, RestaurantEvent};

/// How many of the profile fields completeness is scored over
const COMPLETENESS_FIELDS: u32 = 6;

/// Estimated weekly reach baseline and per-event bump. Heuristic numbers
/// shown on the panel, not analytics.
const REACH_BASE: u32 = 120;
const REACH_PER_EVENT: u32 = 18;

/// How many recent events the panel previews
const RECENT_EVENTS: usize = 3;

#[derive(Debug, Clone)]
pub struct OwnerStats {
    /// Integer percentage, 0 to 100
    pub completeness_percent: u32,
    /// Estimated weekly reach
    pub reach: u32,
    /// How many guests favorited this restaurant on this device basis
    pub saves: usize,
    /// The first stored events, capped for the preview
    pub recent_events: Vec<RestaurantEvent>,
}

/// Profile completeness over six fields: name, address, phone, description,
/// a registered latitude, and at least one advertised feature. Latitude
/// alone scores the position; longitude never arrives without it.
pub fn profile_completeness(restaurant: &Restaurant) -> u32 {
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
    (filled * 100 + COMPLETENESS_FIELDS / 2) / COMPLETENESS_FIELDS
}

/// Assemble the panel for the owner's restaurant
pub fn owner_stats(restaurant: &Restaurant, saves: usize) -> OwnerStats {
    OwnerStats {
        completeness_percent: profile_completeness(restaurant),
        reach: REACH_BASE + REACH_PER_EVENT * restaurant.events.len() as u32,
        saves,
        recent_events: restaurant
            .events
            .iter()
            .take(RECENT_EVENTS)
            .cloned()
            .collect(),
    }
}

fn filled_text(field: &Option<String>) -> bool {
    field
        .as_deref()
        .map(|text| !text.trim().is_empty())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{RestaurantFeatures, DEFAULT_RATING, DEFAULT_STATUS};

    fn restaurant() -> Restaurant {
        Restaurant {
            id: "r1".into(),
            name: "La Terraza".into(),
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
            events: vec![],
            menu: vec![],
            is_owner_restaurant: true,
            owner_id: None,
        }
    }

    fn event(i: usize) -> RestaurantEvent {
        RestaurantEvent {
            id: i.to_string(),
            title: format!("Evento {i}"),
            date_label: "Hoy".into(),
            description: None,
        }
    }

    #[test]
    fn test_completeness_counts_six_fields() {
        let mut r = restaurant();
        // Only the name is filled
        assert_eq!(profile_completeness(&r), 17);

        r.address = Some("Av. Madero 12".into());
        r.phone = Some("351-123-4567".into());
        assert_eq!(profile_completeness(&r), 50);

        r.description = Some("Cocina de la región".into());
        r.latitude = Some(20.08);
        r.longitude = Some(-102.27);
        r.features.wifi = true;
        assert_eq!(profile_completeness(&r), 100);
    }

    #[test]
    fn test_blank_text_does_not_count() {
        let mut r = restaurant();
        r.address = Some("   ".into());
        assert_eq!(profile_completeness(&r), 17);
    }

    #[test]
    fn test_latitude_alone_scores_the_position() {
        let mut r = restaurant();
        r.latitude = Some(20.08);
        assert_eq!(profile_completeness(&r), 33);
    }

    #[test]
    fn test_reach_grows_with_events() {
        let mut r = restaurant();
        assert_eq!(owner_stats(&r, 0).reach, 120);
        r.events = (0..4).map(event).collect();
        assert_eq!(owner_stats(&r, 0).reach, 120 + 4 * 18);
    }

    #[test]
    fn test_event_preview_keeps_stored_order_and_caps_at_three() {
        let mut r = restaurant();
        r.events = (0..5).map(event).collect();
        let stats = owner_stats(&r, 2);
        let titles: Vec<&str> = stats
            .recent_events
            .iter()
            .map(|e| e.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Evento 0", "Evento 1", "Evento 2"]);
        assert_eq!(stats.saves, 2);
    }
}
