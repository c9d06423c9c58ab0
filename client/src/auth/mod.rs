//! Authentication: provider boundary and session projection

use thiserror::Error;

pub mod backend;
pub mod projection;

pub use backend::{AuthBackend, MemoryAuthBackend};
pub use projection::AuthProjection;

/// Errors surfaced by the authentication provider.
///
/// The provider reports failures as a fixed code set; everything outside it
/// lands in [`AuthError::Backend`].
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("credential rejected")]
    InvalidCredential,

    #[error("no account for that email")]
    UserNotFound,

    #[error("wrong password")]
    WrongPassword,

    #[error("too many failed attempts")]
    TooManyRequests,

    #[error("email already registered")]
    EmailAlreadyInUse,

    #[error("password too weak")]
    WeakPassword,

    #[error("email address is not valid")]
    InvalidEmail,

    #[error("auth backend error: {0}")]
    Backend(String),
}
