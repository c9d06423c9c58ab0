//! Auth projection
//!
//! Mirrors the provider's session stream into an [`AuthState`] the UI can
//! observe. Login and registration report success as a plain bool; the
//! failure reason reaches the user only through the alert sink, in Spanish.

use std::sync::Arc;

use chrono::Utc;
use serde_json::json;
use tracing::{info, warn};
use validator::Validate;

use shared::models::{
    AuthState, LoginPayload, ProfilePatch, RegisterPayload, SessionIdentity, UserRole,
    DEFAULT_CATEGORY, DEFAULT_STATUS, SEED_RATING, SEED_RESTAURANT_NAME,
};

use crate::alerts::AlertSink;
use crate::store::{encode_patch, map_profile, DocumentStore};
use tokio::sync::watch;

use super::{AuthBackend, AuthError};

pub struct AuthProjection {
    backend: Arc<dyn AuthBackend>,
    store: Arc<dyn DocumentStore>,
    alerts: Arc<dyn AlertSink>,
    state_tx: watch::Sender<AuthState>,
}

impl AuthProjection {
    pub fn new(
        backend: Arc<dyn AuthBackend>,
        store: Arc<dyn DocumentStore>,
        alerts: Arc<dyn AlertSink>,
    ) -> Self {
        let (state_tx, _) = watch::channel(AuthState::default());
        Self {
            backend,
            store,
            alerts,
            state_tx,
        }
    }

    /// The current auth state
    pub fn state(&self) -> AuthState {
        self.state_tx.borrow().clone()
    }

    /// Observe auth state changes
    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state_tx.subscribe()
    }

    /// Follow the provider's session stream until it closes.
    ///
    /// The first iteration consumes the stream's initial value, which ends
    /// the `is_loading` phase even when nobody is signed in. Keeps the state
    /// current across provider-initiated drops (token expiry, remote
    /// revocation), not just local calls.
    pub async fn run(&self) {
        let mut sessions = self.backend.sessions();
        loop {
            let session = sessions.borrow_and_update().clone();
            self.apply_session(session).await;
            if sessions.changed().await.is_err() {
                break;
            }
        }
    }

    /// Attempt an owner login. Returns whether it succeeded; failures are
    /// reported through the alert sink.
    pub async fn login_as_owner(&self, payload: &LoginPayload) -> bool {
        if payload.validate().is_err() {
            self.alert_auth_error(&AuthError::InvalidEmail);
            return false;
        }
        match self
            .backend
            .sign_in(&payload.email, &payload.password)
            .await
        {
            Ok(identity) => {
                // The session listener picks up the new identity and flips
                // the state; nothing is applied here.
                info!(email = %identity.email, "owner signed in");
                true
            }
            Err(err) => {
                warn!(error = %err, "login failed");
                self.alert_auth_error(&err);
                false
            }
        }
    }

    /// Register a new owner account and seed its restaurant document
    pub async fn register_owner(&self, payload: &RegisterPayload) -> bool {
        if let Err(err) = self.validated_register(payload) {
            self.alert_auth_error(&err);
            return false;
        }
        let identity = match self
            .backend
            .register(&payload.email, &payload.password)
            .await
        {
            Ok(identity) => identity,
            Err(err) => {
                warn!(error = %err, "registration failed");
                self.alert_auth_error(&err);
                return false;
            }
        };

        if let Err(err) = self.seed_restaurant(&identity, payload).await {
            // Not reconciled: the account exists, the listing document does
            // not. Downstream treats the missing document as "restaurant not
            // yet configured".
            warn!(error = %err, "could not seed restaurant document");
            self.alerts.alert(
                "Aviso",
                "Tu cuenta se creó, pero no pudimos guardar tu restaurante. Complétalo desde tu panel.",
            );
        }

        info!(email = %identity.email, "owner registered");
        true
    }

    /// Enter guest mode: authenticated for navigation, no identity.
    /// Idempotent; ends the loading phase.
    pub fn continue_as_guest(&self) {
        self.state_tx.send_if_modified(|state| {
            let guest = AuthState::guest_session();
            if *state == guest {
                false
            } else {
                *state = guest;
                true
            }
        });
    }

    /// Sign out through the provider. The session listener observes the
    /// drop and applies the guest fallback; a failed sign-out leaves the
    /// owner state untouched and raises an alert.
    pub async fn logout(&self) {
        if let Err(err) = self.backend.sign_out().await {
            warn!(error = %err, "sign-out reported an error");
            self.alerts.alert("Error", "No se pudo cerrar sesión.");
        }
    }

    /// Optimistically patch the profile snapshot shown in the owner header.
    ///
    /// Local only. The durable write goes through the restaurant
    /// projection; the next session refresh reconciles this snapshot.
    pub fn update_restaurant(&self, patch: &ProfilePatch) {
        self.state_tx.send_if_modified(|state| {
            let Some(profile) = state.restaurant.as_ref() else {
                return false;
            };
            let merged = profile.merged(patch);
            if *profile == merged {
                return false;
            }
            state.restaurant = Some(merged);
            true
        });
    }

    async fn apply_session(&self, session: Option<SessionIdentity>) {
        let state = match session {
            Some(identity) => {
                // Best effort: a store failure still signs the owner in,
                // with the placeholder profile
                let profile = match self.store.get(&identity.document_id()).await {
                    Ok(Some(doc)) => map_profile(&doc),
                    Ok(None) => Default::default(),
                    Err(err) => {
                        warn!(error = %err, "could not load the owner's restaurant document");
                        Default::default()
                    }
                };
                AuthState {
                    is_authenticated: true,
                    role: UserRole::Owner,
                    email: Some(identity.email.clone()),
                    user_id: Some(identity.user_id),
                    restaurant: Some(profile),
                    is_loading: false,
                }
            }
            None => AuthState::guest(),
        };
        self.state_tx.send_replace(state);
    }

    fn validated_register(&self, payload: &RegisterPayload) -> Result<(), AuthError> {
        let Err(errors) = payload.validate() else {
            return Ok(());
        };
        if errors.field_errors().contains_key("email") {
            Err(AuthError::InvalidEmail)
        } else {
            Err(AuthError::WeakPassword)
        }
    }

    async fn seed_restaurant(
        &self,
        identity: &SessionIdentity,
        payload: &RegisterPayload,
    ) -> crate::error::AppResult<()> {
        let name = payload
            .restaurant_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(SEED_RESTAURANT_NAME);
        let doc = encode_patch(&json!({
            "ownerId": identity.document_id(),
            "name": name,
            "email": identity.email,
            "createdAt": Utc::now().to_rfc3339(),
            "status": DEFAULT_STATUS,
            "rating": SEED_RATING,
            "category": DEFAULT_CATEGORY,
        }))
        .map_err(crate::error::AppError::from)?;
        self.store
            .create(&identity.document_id(), doc)
            .await
            .map_err(crate::error::AppError::from)?;
        Ok(())
    }

    fn alert_auth_error(&self, err: &AuthError) {
        self.alerts.alert("Error", &err.detail().message_es);
    }
}
