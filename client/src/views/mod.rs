//! Derived view models
//!
//! Pure, synchronous derivations from projection state to what each screen
//! renders. No I/O here; everything recomputes from the inputs it is given.

pub mod calendar;
pub mod favorites;
pub mod home;
pub mod menu;
pub mod search;
pub mod stats;

pub use calendar::{calendar_items, matches_window, CalendarItem, EventWindow};
pub use favorites::favorite_restaurants;
pub use home::{filter_cards, home_cards, latest_events, nearby_sorted, today_rail, RestaurantCard};
pub use menu::{filter_dishes, menu_subtitle, AvailabilityFilter};
pub use search::search_restaurants;
pub use stats::{owner_stats, profile_completeness, OwnerStats};
