//! Authentication provider boundary
//!
//! The real provider is a hosted identity service; the core only sees
//! [`AuthBackend`]. Session changes arrive over a watch channel so the
//! projection reacts to provider-initiated sign-outs (token expiry, remote
//! revocation) the same way it reacts to local calls.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::watch;
use uuid::Uuid;

use shared::models::SessionIdentity;

use super::AuthError;

#[async_trait]
pub trait AuthBackend: Send + Sync {
    /// Sign in an existing account
    async fn sign_in(&self, email: &str, password: &str) -> Result<SessionIdentity, AuthError>;

    /// Create an account and sign it in
    async fn register(&self, email: &str, password: &str) -> Result<SessionIdentity, AuthError>;

    /// End the current session
    async fn sign_out(&self) -> Result<(), AuthError>;

    /// The session stream. `None` means signed out; the receiver always
    /// holds the latest session.
    fn sessions(&self) -> watch::Receiver<Option<SessionIdentity>>;
}

struct Account {
    user_id: Uuid,
    password: String,
}

/// In-memory provider for the demo binary and tests
pub struct MemoryAuthBackend {
    accounts: Mutex<HashMap<String, Account>>,
    session_tx: watch::Sender<Option<SessionIdentity>>,
}

impl Default for MemoryAuthBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryAuthBackend {
    pub fn new() -> Self {
        let (session_tx, _) = watch::channel(None);
        Self {
            accounts: Mutex::new(HashMap::new()),
            session_tx,
        }
    }

    /// Pre-create an account without signing it in
    pub fn seed_account(&self, email: &str, password: &str) -> Result<Uuid, AuthError> {
        let mut accounts = self.lock()?;
        let user_id = Uuid::new_v4();
        accounts.insert(
            email.to_string(),
            Account {
                user_id,
                password: password.to_string(),
            },
        );
        Ok(user_id)
    }

    /// Simulate a provider-initiated session drop (token expiry)
    pub fn expire_session(&self) {
        self.session_tx.send_replace(None);
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, Account>>, AuthError> {
        self.accounts
            .lock()
            .map_err(|_| AuthError::Backend("account lock poisoned".into()))
    }
}

#[async_trait]
impl AuthBackend for MemoryAuthBackend {
    async fn sign_in(&self, email: &str, password: &str) -> Result<SessionIdentity, AuthError> {
        let identity = {
            let accounts = self.lock()?;
            let account = accounts.get(email).ok_or(AuthError::UserNotFound)?;
            if account.password != password {
                return Err(AuthError::WrongPassword);
            }
            SessionIdentity {
                user_id: account.user_id,
                email: email.to_string(),
            }
        };
        self.session_tx.send_replace(Some(identity.clone()));
        Ok(identity)
    }

    async fn register(&self, email: &str, password: &str) -> Result<SessionIdentity, AuthError> {
        if !email.contains('@') {
            return Err(AuthError::InvalidEmail);
        }
        if password.chars().count() < 6 {
            return Err(AuthError::WeakPassword);
        }
        let identity = {
            let mut accounts = self.lock()?;
            if accounts.contains_key(email) {
                return Err(AuthError::EmailAlreadyInUse);
            }
            let user_id = Uuid::new_v4();
            accounts.insert(
                email.to_string(),
                Account {
                    user_id,
                    password: password.to_string(),
                },
            );
            SessionIdentity {
                user_id,
                email: email.to_string(),
            }
        };
        self.session_tx.send_replace(Some(identity.clone()));
        Ok(identity)
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        self.session_tx.send_replace(None);
        Ok(())
    }

    fn sessions(&self) -> watch::Receiver<Option<SessionIdentity>> {
        self.session_tx.subscribe()
    }
}
