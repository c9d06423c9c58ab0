//! Clients for services outside the app boundary

pub mod geocoder;
pub mod maps;

pub use geocoder::ReverseGeocoder;
pub use maps::{directions_url, MapPlatform};
