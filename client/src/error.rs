//! Error handling for the Mesa client core
//!
//! Provides consistent user-facing error details in Spanish and English

use serde::Serialize;
use thiserror::Error;

use crate::auth::AuthError;
use crate::store::StoreError;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Authentication errors, mapped from the provider's fixed code set
    #[error(transparent)]
    Auth(#[from] AuthError),

    // Remote document store errors
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Resource not found: {0}")]
    NotFound(String),

    // Device geolocation errors
    #[error("Geolocation unavailable: {0}")]
    Geolocation(String),

    // External service errors (reverse geocoding, map hand-off)
    #[error("External service error: {0}")]
    ExternalService(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    // Internal errors
    #[error("Internal error")]
    Internal(#[from] anyhow::Error),
}

/// User-facing error detail
#[derive(Debug, Clone, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message_en: String,
    pub message_es: String,
}

impl ErrorDetail {
    fn new(code: &str, message_en: impl Into<String>, message_es: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message_en: message_en.into(),
            message_es: message_es.into(),
        }
    }
}

impl AppError {
    /// Map this error to the alert shown to the user.
    ///
    /// Unknown causes collapse into a generic message; the full error is
    /// still logged for debugging.
    pub fn detail(&self) -> ErrorDetail {
        match self {
            AppError::Auth(err) => err.detail(),
            AppError::Store(StoreError::NotFound(id)) => ErrorDetail::new(
                "NOT_FOUND",
                format!("Document {} not found", id),
                "Restaurante no encontrado".to_string(),
            ),
            AppError::Store(_) => ErrorDetail::new(
                "STORE_ERROR",
                "Could not reach the data service",
                "No se pudo conectar con el servicio de datos",
            ),
            AppError::NotFound(resource) => ErrorDetail::new(
                "NOT_FOUND",
                format!("{} not found", resource),
                format!("No se encontró {}", resource),
            ),
            AppError::Geolocation(_) => ErrorDetail::new(
                "GEOLOCATION_ERROR",
                "Could not get your location",
                "No se pudo obtener tu ubicación.",
            ),
            AppError::ExternalService(_) => ErrorDetail::new(
                "EXTERNAL_SERVICE_ERROR",
                "An external service failed",
                "Falló un servicio externo",
            ),
            AppError::Configuration(msg) => ErrorDetail::new(
                "CONFIGURATION_ERROR",
                format!("Configuration error: {}", msg),
                "Error de configuración",
            ),
            AppError::Internal(_) => ErrorDetail::new(
                "INTERNAL_ERROR",
                "An internal error occurred",
                "Ocurrió un error interno",
            ),
        }
    }
}

impl AuthError {
    /// Bilingual detail for the known provider error codes; anything outside
    /// the fixed set collapses to a generic message.
    pub fn detail(&self) -> ErrorDetail {
        match self {
            AuthError::InvalidCredential | AuthError::UserNotFound | AuthError::WrongPassword => {
                ErrorDetail::new(
                    "INVALID_CREDENTIALS",
                    "Invalid email or password",
                    "Correo o contraseña incorrectos.",
                )
            }
            AuthError::TooManyRequests => ErrorDetail::new(
                "TOO_MANY_REQUESTS",
                "Too many failed attempts. Try again later.",
                "Demasiados intentos fallidos. Intenta más tarde.",
            ),
            AuthError::EmailAlreadyInUse => ErrorDetail::new(
                "EMAIL_IN_USE",
                "That email is already registered",
                "Ese correo ya está registrado.",
            ),
            AuthError::WeakPassword => ErrorDetail::new(
                "WEAK_PASSWORD",
                "Password is too weak (use 6+ characters)",
                "La contraseña es muy débil (usa 6+ caracteres).",
            ),
            AuthError::InvalidEmail => ErrorDetail::new(
                "INVALID_EMAIL",
                "Email address is not valid",
                "El correo no es válido.",
            ),
            AuthError::Backend(_) => ErrorDetail::new(
                "AUTH_ERROR",
                "Could not sign in",
                "Error al iniciar sesión.",
            ),
        }
    }
}

/// Result type alias for the client core
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_errors_collapse_to_one_message() {
        for err in [
            AuthError::InvalidCredential,
            AuthError::UserNotFound,
            AuthError::WrongPassword,
        ] {
            let detail = err.detail();
            assert_eq!(detail.code, "INVALID_CREDENTIALS");
            assert_eq!(detail.message_es, "Correo o contraseña incorrectos.");
        }
    }

    #[test]
    fn test_unknown_auth_errors_are_generic() {
        let detail = AuthError::Backend("socket closed".into()).detail();
        assert_eq!(detail.code, "AUTH_ERROR");
    }
}
