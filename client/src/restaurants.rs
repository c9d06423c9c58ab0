//! Restaurant projection
//!
//! The typed, always-current view over the remote restaurant collection.
//! Reads come from the latest full snapshot held by the store's watch
//! channel; every read re-maps the wire documents so defaults and ownership
//! are always computed against the current session. Writes go back through
//! the store's merge and array primitives.

use std::sync::Arc;

use chrono::Utc;
use serde_json::json;
use tokio::sync::watch;
use tracing::debug;

use shared::models::{
    AuthState, Dish, DishDraft, EventDraft, Restaurant, RestaurantEvent, RestaurantPatch,
    UserRole, STATUS_CLOSED,
};

use crate::error::{AppError, AppResult};
use crate::favorites::FavoritesStore;
use crate::store::{encode_patch, map_document, DocumentStore, StoreError};

pub struct RestaurantProjection {
    store: Arc<dyn DocumentStore>,
    favorites: Arc<FavoritesStore>,
    snapshots: watch::Receiver<crate::store::CollectionSnapshot>,
    auth_states: watch::Receiver<AuthState>,
}

impl RestaurantProjection {
    pub fn new(
        store: Arc<dyn DocumentStore>,
        favorites: Arc<FavoritesStore>,
        auth_states: watch::Receiver<AuthState>,
    ) -> Self {
        let snapshots = store.subscribe();
        Self {
            store,
            favorites,
            snapshots,
            auth_states,
        }
    }

    /// The restaurant document key of the signed-in owner, when there is one
    fn owner_doc_id(&self) -> Option<String> {
        let state = self.auth_states.borrow();
        if state.role == UserRole::Owner {
            state.user_id.map(|id| id.to_string())
        } else {
            None
        }
    }

    /// All restaurants in the latest snapshot, typed and defaulted
    pub fn restaurants(&self) -> Vec<Restaurant> {
        let owner = self.owner_doc_id();
        self.snapshots
            .borrow()
            .docs
            .iter()
            .map(|(id, doc)| map_document(id, doc, owner.as_deref()))
            .collect()
    }

    /// The signed-in owner's restaurant, when its document exists
    pub fn owner_restaurant(&self) -> Option<Restaurant> {
        self.restaurants()
            .into_iter()
            .find(|r| r.is_owner_restaurant)
    }

    /// Lookup for a detail screen. `None` when the id has left the
    /// collection (deleted elsewhere); the screen renders a not-found state
    /// instead of crashing.
    pub fn restaurant(&self, id: &str) -> Option<Restaurant> {
        self.restaurants().into_iter().find(|r| r.id == id)
    }

    /// Wait until the snapshot changes, then return the refreshed view.
    /// Returns `None` when the store has shut down.
    pub async fn changed(&mut self) -> Option<Vec<Restaurant>> {
        self.snapshots.changed().await.ok()?;
        Some(self.restaurants())
    }

    pub fn favorite_ids(&self) -> Vec<String> {
        self.favorites.ids()
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.is_favorite(id)
    }

    /// Flip a restaurant in or out of the device-local favorites set
    pub async fn toggle_favorite(&self, id: &str) -> AppResult<bool> {
        self.favorites
            .toggle(id)
            .await
            .map_err(|err| AppError::Internal(err.into()))
    }

    /// Merge-patch the owner's restaurant document.
    ///
    /// Without an owner session this is a silent no-op: guest screens share
    /// the edit components and simply have nothing to write to. The wire
    /// payload is sanitized (absent fields omitted) and always re-stamps the
    /// ownership field so older documents pick it up.
    pub async fn upsert_owner_restaurant(&self, patch: &RestaurantPatch) -> AppResult<()> {
        let Some(doc_id) = self.owner_doc_id() else {
            debug!("restaurant upsert without an owner session; ignored");
            return Ok(());
        };
        let mut payload = encode_patch(patch)?;
        payload.insert("ownerId".into(), json!(doc_id));
        self.store.merge(&doc_id, payload).await?;
        Ok(())
    }

    /// Append an event to the owner's restaurant.
    ///
    /// Additive write: concurrent appends from two devices both survive.
    /// The id is the current epoch-millisecond timestamp rendered as a
    /// string, matching the ids already present in stored documents.
    /// Without an owner session nothing is written and `None` comes back.
    pub async fn add_owner_event(&self, draft: &EventDraft) -> AppResult<Option<String>> {
        let Some(doc_id) = self.owner_doc_id() else {
            debug!("event append without an owner session; ignored");
            return Ok(None);
        };
        let event = RestaurantEvent {
            id: Utc::now().timestamp_millis().to_string(),
            title: draft.title.clone(),
            date_label: draft.date_label.clone(),
            description: draft.description.clone(),
        };
        self.store
            .array_union(&doc_id, "events", encode_value(&event)?)
            .await?;
        Ok(Some(event.id))
    }

    /// Remove an event by id.
    ///
    /// Read-modify-write over the whole array: a concurrent append between
    /// the read and the write is lost. Accepted for single-owner editing.
    pub async fn remove_owner_event(&self, event_id: &str) -> AppResult<()> {
        let Some(doc_id) = self.owner_doc_id() else {
            debug!("event removal without an owner session; ignored");
            return Ok(());
        };
        let doc = self
            .store
            .get(&doc_id)
            .await?
            .ok_or_else(|| StoreError::NotFound(doc_id.clone()))?;
        let mut events: Vec<RestaurantEvent> = doc
            .get("events")
            .cloned()
            .map(serde_json::from_value)
            .transpose()
            .map_err(StoreError::from)?
            .unwrap_or_default();
        events.retain(|e| e.id != event_id);
        self.store
            .set_field(&doc_id, "events", encode_value(&events)?)
            .await?;
        Ok(())
    }

    /// Append a dish to the owner's menu. Same id scheme, additive-write
    /// semantics, and no-session no-op as events.
    pub async fn add_dish(&self, draft: &DishDraft) -> AppResult<Option<String>> {
        let Some(doc_id) = self.owner_doc_id() else {
            debug!("dish append without an owner session; ignored");
            return Ok(None);
        };
        let dish = Dish {
            id: Utc::now().timestamp_millis().to_string(),
            name: draft.name.clone(),
            description: draft.description.clone(),
            price: draft.price,
            image: draft.image.clone(),
            is_available: None,
        };
        self.store
            .array_union(&doc_id, "menu", encode_value(&dish)?)
            .await?;
        Ok(Some(dish.id))
    }

    /// Remove a dish by id. Same lost-update caveat as event removal.
    pub async fn remove_dish(&self, dish_id: &str) -> AppResult<()> {
        let Some(doc_id) = self.owner_doc_id() else {
            debug!("dish removal without an owner session; ignored");
            return Ok(());
        };
        let mut menu = self.load_menu(&doc_id).await?;
        menu.retain(|d| d.id != dish_id);
        self.store
            .set_field(&doc_id, "menu", encode_value(&menu)?)
            .await?;
        Ok(())
    }

    /// Flip one dish between available and unavailable, rewriting the whole
    /// menu field
    pub async fn toggle_dish_availability(&self, dish_id: &str) -> AppResult<()> {
        let Some(doc_id) = self.owner_doc_id() else {
            debug!("availability toggle without an owner session; ignored");
            return Ok(());
        };
        let mut menu = self.load_menu(&doc_id).await?;
        let Some(dish) = menu.iter_mut().find(|d| d.id == dish_id) else {
            return Err(AppError::NotFound(format!("platillo {dish_id}")));
        };
        dish.is_available = Some(!dish.available());
        self.store
            .set_field(&doc_id, "menu", encode_value(&menu)?)
            .await?;
        Ok(())
    }

    /// Set the free-text status to the open default or the closed marker
    pub async fn set_open_status(&self, open: bool) -> AppResult<()> {
        let status = if open {
            shared::models::DEFAULT_STATUS
        } else {
            STATUS_CLOSED
        };
        self.upsert_owner_restaurant(&RestaurantPatch {
            status: Some(status.to_string()),
            ..Default::default()
        })
        .await
    }

    async fn load_menu(&self, doc_id: &str) -> AppResult<Vec<Dish>> {
        let doc = self
            .store
            .get(doc_id)
            .await?
            .ok_or_else(|| StoreError::NotFound(doc_id.to_string()))?;
        let menu = doc
            .get("menu")
            .cloned()
            .map(serde_json::from_value)
            .transpose()
            .map_err(StoreError::from)?
            .unwrap_or_default();
        Ok(menu)
    }
}

fn encode_value<T: serde::Serialize>(value: &T) -> AppResult<serde_json::Value> {
    serde_json::to_value(value)
        .map_err(StoreError::from)
        .map_err(AppError::from)
}
