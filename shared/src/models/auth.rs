//! Session and auth-state models

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Placeholder shown while the owner's restaurant document is missing or
/// still loading
pub const DEFAULT_PROFILE_NAME: &str = "Mi Restaurante";

/// Role attached to the current session
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Guest,
    Owner,
}

/// Identity delivered by the authentication provider on every session change
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionIdentity {
    pub user_id: Uuid,
    pub email: String,
}

impl SessionIdentity {
    /// The restaurant document key: a restaurant is keyed by its owner's id
    pub fn document_id(&self) -> String {
        self.user_id.to_string()
    }
}

/// Denormalized restaurant snapshot kept on the auth state for header
/// display. Not a second source of truth; durable edits go through the
/// restaurant projection's write path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RestaurantProfile {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

impl Default for RestaurantProfile {
    fn default() -> Self {
        Self {
            name: DEFAULT_PROFILE_NAME.to_string(),
            address: None,
            phone: None,
            description: None,
            latitude: None,
            longitude: None,
        }
    }
}

/// Local-only optimistic update applied to the profile snapshot
#[derive(Debug, Clone, Default)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub description: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl RestaurantProfile {
    /// Merge a patch into this snapshot, keeping existing values for absent
    /// fields
    pub fn merged(&self, patch: &ProfilePatch) -> Self {
        Self {
            name: patch.name.clone().unwrap_or_else(|| self.name.clone()),
            address: patch.address.clone().or_else(|| self.address.clone()),
            phone: patch.phone.clone().or_else(|| self.phone.clone()),
            description: patch
                .description
                .clone()
                .or_else(|| self.description.clone()),
            latitude: patch.latitude.or(self.latitude),
            longitude: patch.longitude.or(self.longitude),
        }
    }
}

/// Live authentication state mirrored from the provider's session stream
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthState {
    pub is_authenticated: bool,
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restaurant: Option<RestaurantProfile>,
    /// True until the provider's first session notification arrives
    pub is_loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            is_authenticated: false,
            role: UserRole::Guest,
            email: None,
            user_id: None,
            restaurant: None,
            is_loading: true,
        }
    }
}

impl AuthState {
    /// Guest defaults after sign-out or a null session notification
    pub fn guest() -> Self {
        Self {
            is_loading: false,
            ..Self::default()
        }
    }

    /// Guest browsing chosen from the welcome screen. Authenticated as far
    /// as navigation is concerned, with no identity attached; the app shell
    /// gates the main tabs on `is_authenticated`.
    pub fn guest_session() -> Self {
        Self {
            is_authenticated: true,
            is_loading: false,
            ..Self::default()
        }
    }
}

/// Credentials for an owner login attempt
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginPayload {
    #[validate(email(message = "El correo no es válido."))]
    pub email: String,
    pub password: String,
}

/// Input for registering a new owner account with its restaurant
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterPayload {
    #[validate(email(message = "El correo no es válido."))]
    pub email: String,
    #[validate(length(min = 6, message = "La contraseña es muy débil (usa 6+ caracteres)."))]
    pub password: String,
    pub restaurant_name: Option<String>,
}
