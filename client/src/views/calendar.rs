//! Event calendar derivations
//!
//! Event dates are free text ("Hoy 9pm", "Viernes de trivia"), so the
//! Today/Week windows are keyword buckets over the label, not parsed dates.
//! Month shows everything.

use shared::models::Restaurant;

/// Keywords placing an event in the today bucket
const TODAY_KEYWORDS: &[&str] = &["hoy"];

/// The week bucket is a strict superset of the today bucket. Weekday names
/// carry accent-less spellings too; the labels are typed by owners.
const WEEK_KEYWORDS: &[&str] = &[
    "hoy",
    "mañana",
    "semana",
    "fin de semana",
    "lunes",
    "martes",
    "miércoles",
    "miercoles",
    "jueves",
    "viernes",
    "sábado",
    "sabado",
    "domingo",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventWindow {
    Today,
    Week,
    #[default]
    Month,
}

/// One calendar row: an event tagged with the restaurant it belongs to
#[derive(Debug, Clone)]
pub struct CalendarItem {
    pub restaurant_id: String,
    pub restaurant_name: String,
    pub event: shared::models::RestaurantEvent,
}

/// Whether a free-text date label falls inside a window
pub fn matches_window(date_label: &str, window: EventWindow) -> bool {
    let label = date_label.to_lowercase();
    let keywords = match window {
        EventWindow::Today => TODAY_KEYWORDS,
        EventWindow::Week => WEEK_KEYWORDS,
        EventWindow::Month => return true,
    };
    keywords.iter().any(|keyword| label.contains(keyword))
}

/// All events across the listing that fall inside the window, flattened and
/// newest first. Within one restaurant newer events sit later in the stored
/// array, so the flattened list is reversed.
pub fn calendar_items(restaurants: &[Restaurant], window: EventWindow) -> Vec<CalendarItem> {
    let mut items: Vec<CalendarItem> = restaurants
        .iter()
        .flat_map(|restaurant| {
            restaurant
                .events
                .iter()
                .filter(|event| matches_window(&event.date_label, window))
                .map(|event| CalendarItem {
                    restaurant_id: restaurant.id.clone(),
                    restaurant_name: restaurant.name.clone(),
                    event: event.clone(),
                })
        })
        .collect();
    items.reverse();
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{RestaurantEvent, RestaurantFeatures, DEFAULT_RATING, DEFAULT_STATUS};

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
    fn test_today_matching_is_case_insensitive() {
        assert!(matches_window("Hoy 9pm", EventWindow::Today));
        assert!(matches_window("HOY mismo", EventWindow::Today));
        assert!(!matches_window("Viernes de trivia", EventWindow::Today));
    }

    #[test]
    fn test_week_is_a_superset_of_today() {
        for label in ["Hoy 9pm", "hoy a las 8"] {
            assert!(matches_window(label, EventWindow::Today));
            assert!(matches_window(label, EventWindow::Week));
        }
        assert!(matches_window("Viernes de trivia", EventWindow::Week));
        assert!(matches_window("Este fin de semana", EventWindow::Week));
        assert!(!matches_window("15 de diciembre", EventWindow::Week));
    }

    #[test]
    fn test_weekdays_match_with_or_without_accents() {
        assert!(matches_window("Miércoles de karaoke", EventWindow::Week));
        assert!(matches_window("Miercoles de karaoke", EventWindow::Week));
        assert!(matches_window("Sábado en vivo", EventWindow::Week));
        assert!(matches_window("Sabado de salsa", EventWindow::Week));
    }

    #[test]
    fn test_month_keeps_everything() {
        assert!(matches_window("15 de diciembre", EventWindow::Month));
    }

    #[test]
    fn test_items_are_flattened_and_reversed() {
        let restaurants = vec![
            restaurant_with_events("a", &["Hoy 7pm", "Hoy 9pm"]),
            restaurant_with_events("b", &["Hoy 10pm"]),
        ];
        let items = calendar_items(&restaurants, EventWindow::Today);
        let titles: Vec<&str> = items.iter().map(|i| i.event.title.as_str()).collect();
        assert_eq!(titles, vec!["Evento 0", "Evento 1", "Evento 0"]);
        assert_eq!(items[0].restaurant_id, "b");
    }

    #[test]
    fn test_window_filters_apply() {
        let restaurants = vec![restaurant_with_events(
            "a",
            &["Hoy 9pm", "Viernes de trivia", "15 de diciembre"],
        )];
        assert_eq!(calendar_items(&restaurants, EventWindow::Today).len(), 1);
        assert_eq!(calendar_items(&restaurants, EventWindow::Week).len(), 2);
        assert_eq!(calendar_items(&restaurants, EventWindow::Month).len(), 3);
    }
}
