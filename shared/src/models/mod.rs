//! Domain models for the Mesa restaurant platform

mod auth;
mod restaurant;

pub use auth::*;
pub use restaurant::*;
