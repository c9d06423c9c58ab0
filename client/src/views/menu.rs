//! Owner menu screen derivations

use shared::models::Dish;

/// Tri-state availability filter. A dish with no availability flag counts
/// as available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AvailabilityFilter {
    #[default]
    All,
    Available,
    Unavailable,
}

/// Availability filter plus case-insensitive text match over name and
/// description
pub fn filter_dishes(menu: &[Dish], filter: AvailabilityFilter, query: &str) -> Vec<Dish> {
    let query = query.trim().to_lowercase();
    menu.iter()
        .filter(|dish| match filter {
            AvailabilityFilter::All => true,
            AvailabilityFilter::Available => dish.available(),
            AvailabilityFilter::Unavailable => !dish.available(),
        })
        .filter(|dish| {
            query.is_empty()
                || dish.name.to_lowercase().contains(&query)
                || dish
                    .description
                    .as_deref()
                    .map(|d| d.to_lowercase().contains(&query))
                    .unwrap_or(false)
        })
        .cloned()
        .collect()
}

/// The count line under the menu header: total dishes plus how many are
/// currently available, or a prompt when the menu is still empty.
pub fn menu_subtitle(menu: &[Dish]) -> String {
    if menu.is_empty() {
        return "Aún no tienes platillos registrados.".to_string();
    }
    let total = menu.len();
    let available = menu.iter().filter(|dish| dish.available()).count();
    format!(
        "Tienes {total} platillo{} ({available} disponible{}).",
        if total == 1 { "" } else { "s" },
        if available == 1 { "" } else { "s" },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dish(id: &str, name: &str, is_available: Option<bool>) -> Dish {
        Dish {
            id: id.into(),
            name: name.into(),
            description: None,
            price: 100.0,
            image: None,
            is_available,
        }
    }

    fn menu() -> Vec<Dish> {
        vec![
            dish("1", "Aguachile", None),
            dish("2", "Pozole", Some(true)),
            dish("3", "Tostadas", Some(false)),
        ]
    }

    #[test]
    fn test_absent_flag_counts_as_available() {
        let available = filter_dishes(&menu(), AvailabilityFilter::Available, "");
        let names: Vec<&str> = available.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Aguachile", "Pozole"]);

        let unavailable = filter_dishes(&menu(), AvailabilityFilter::Unavailable, "");
        assert_eq!(unavailable.len(), 1);
        assert_eq!(unavailable[0].name, "Tostadas");
    }

    #[test]
    fn test_text_match_covers_description() {
        let mut menu = menu();
        menu[1].description = Some("Con maíz cacahuazintle".into());
        let hits = filter_dishes(&menu, AvailabilityFilter::All, "maíz");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Pozole");
    }

    #[test]
    fn test_no_filter_returns_the_full_menu() {
        let menu = menu();
        let filtered = filter_dishes(&menu, AvailabilityFilter::All, "");
        assert_eq!(filtered, menu);
    }

    #[test]
    fn test_subtitle_counts_totals_and_availability() {
        assert_eq!(
            menu_subtitle(&menu()),
            "Tienes 3 platillos (2 disponibles)."
        );
        assert_eq!(
            menu_subtitle(&[dish("1", "Aguachile", None)]),
            "Tienes 1 platillo (1 disponible)."
        );
        assert_eq!(
            menu_subtitle(&[dish("1", "Tostadas", Some(false))]),
            "Tienes 1 platillo (0 disponibles)."
        );
    }

    #[test]
    fn test_subtitle_prompts_on_an_empty_menu() {
        assert_eq!(menu_subtitle(&[]), "Aún no tienes platillos registrados.");
    }
}
