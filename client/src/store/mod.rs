//! Remote document store boundary
//!
//! The real backend is a managed document database with real-time push; the
//! core only ever talks to it through [`DocumentStore`]. Documents cross the
//! boundary as loosely-typed JSON maps and are parsed into typed models
//! immediately by [`document::map_document`]; the loose shape never leaks
//! further in.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;
use tokio::sync::watch;

pub mod document;
pub mod memory;

pub use document::{map_document, map_profile};
pub use memory::MemoryStore;

/// The wire shape of one stored document
pub type Document = Map<String, Value>;

/// A full point-in-time copy of the collection, delivered by the real-time
/// channel. A later snapshot wholly supersedes an earlier one; there is no
/// incremental merge.
#[derive(Debug, Clone, Default)]
pub struct CollectionSnapshot {
    /// (document id, document) pairs in collection order
    pub docs: Vec<(String, Document)>,
}

#[derive(Error, Debug)]
pub enum StoreError {
    /// The store rejects explicit nulls: "no value" must mean "key omitted"
    #[error("field '{0}' carries a null value; omit the key instead")]
    NullField(String),

    #[error("document '{0}' not found")]
    NotFound(String),

    #[error("payload is not a JSON object")]
    NotAnObject,

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("store backend error: {0}")]
    Backend(String),
}

/// One keyed collection of documents with merge, additive-array, and
/// whole-field write primitives plus a real-time snapshot subscription.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch one document by id
    async fn get(&self, id: &str) -> Result<Option<Document>, StoreError>;

    /// Create or replace a whole document
    async fn create(&self, id: &str, doc: Document) -> Result<(), StoreError>;

    /// Merge-patch: update only the given fields, leaving others untouched.
    /// Creates the document when absent.
    async fn merge(&self, id: &str, patch: Document) -> Result<(), StoreError>;

    /// Additive union: append `value` to the array field without reading it
    /// first. Duplicate-safe: an element identical to an existing one is
    /// not appended again.
    async fn array_union(&self, id: &str, field: &str, value: Value) -> Result<(), StoreError>;

    /// Replace one field wholesale. Used by the read-modify-write removal
    /// paths; see the projection for the documented race.
    async fn set_field(&self, id: &str, field: &str, value: Value) -> Result<(), StoreError>;

    /// Subscribe to full-collection snapshots. The receiver always holds the
    /// latest snapshot; consumers replace local state wholesale on change.
    fn subscribe(&self) -> watch::Receiver<CollectionSnapshot>;
}

/// Encode a typed patch for the wire.
///
/// This is the single sanitization point: fields with no value are dropped
/// here so a payload never carries a null/undefined marker, per the store's
/// write contract.
pub fn encode_patch<T: Serialize>(patch: &T) -> Result<Document, StoreError> {
    let value = serde_json::to_value(patch)?;
    let mut map = match value {
        Value::Object(map) => map,
        _ => return Err(StoreError::NotAnObject),
    };
    map.retain(|_, v| !v.is_null());
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use shared::models::RestaurantPatch;

    #[test]
    fn test_encode_patch_drops_absent_fields() {
        let patch = RestaurantPatch {
            name: Some("X".into()),
            ..Default::default()
        };
        let doc = encode_patch(&patch).unwrap();
        assert!(doc.contains_key("name"));
        assert!(!doc.contains_key("phone"));
    }

    #[test]
    fn test_encode_patch_strips_explicit_nulls() {
        let raw = json!({ "name": "X", "phone": null });
        let doc = encode_patch(&raw).unwrap();
        assert!(doc.contains_key("name"));
        assert!(!doc.contains_key("phone"));
    }

    #[test]
    fn test_encode_patch_rejects_non_objects() {
        assert!(matches!(
            encode_patch(&json!([1, 2, 3])),
            Err(StoreError::NotAnObject)
        ));
    }
}
