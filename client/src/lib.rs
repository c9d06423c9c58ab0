//! Mesa client core
//!
//! The reactive data layer behind the Mesa restaurant app: typed projections
//! over a remote document collection with real-time push, an auth state
//! machine, device-local favorites, session-only location state, and the
//! pure derivations each screen renders from. The UI shell and the concrete
//! backend services stay outside; they plug in through the traits at the
//! boundaries (`DocumentStore`, `AuthBackend`, `KeyValueStorage`,
//! `Geolocator`, `AlertSink`).

pub mod alerts;
pub mod auth;
pub mod config;
pub mod error;
pub mod external;
pub mod favorites;
pub mod location;
pub mod restaurants;
pub mod store;
pub mod views;

pub use config::Config;
pub use error::{AppError, AppResult, ErrorDetail};
