//! In-memory document store
//!
//! Backs the demo binary and the test suite. Mirrors the remote store's
//! contract exactly: merge-patch upserts, duplicate-safe array unions, the
//! null rejection rule, and a full snapshot pushed on every mutation.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::watch;

use super::{CollectionSnapshot, Document, DocumentStore, StoreError};

pub struct MemoryStore {
    docs: Mutex<BTreeMap<String, Document>>,
    snapshot_tx: watch::Sender<CollectionSnapshot>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        let (snapshot_tx, _) = watch::channel(CollectionSnapshot::default());
        Self {
            docs: Mutex::new(BTreeMap::new()),
            snapshot_tx,
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, BTreeMap<String, Document>>, StoreError> {
        self.docs
            .lock()
            .map_err(|_| StoreError::Backend("store lock poisoned".into()))
    }

    /// Publish the current collection as one full snapshot
    fn publish(&self, docs: &BTreeMap<String, Document>) {
        let snapshot = CollectionSnapshot {
            docs: docs
                .iter()
                .map(|(id, doc)| (id.clone(), doc.clone()))
                .collect(),
        };
        self.snapshot_tx.send_replace(snapshot);
    }

    fn reject_nulls(patch: &Document) -> Result<(), StoreError> {
        if let Some((key, _)) = patch.iter().find(|(_, v)| v.is_null()) {
            return Err(StoreError::NullField(key.clone()));
        }
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn get(&self, id: &str) -> Result<Option<Document>, StoreError> {
        Ok(self.lock()?.get(id).cloned())
    }

    async fn create(&self, id: &str, doc: Document) -> Result<(), StoreError> {
        Self::reject_nulls(&doc)?;
        let mut docs = self.lock()?;
        docs.insert(id.to_string(), doc);
        self.publish(&docs);
        Ok(())
    }

    async fn merge(&self, id: &str, patch: Document) -> Result<(), StoreError> {
        Self::reject_nulls(&patch)?;
        let mut docs = self.lock()?;
        let doc = docs.entry(id.to_string()).or_default();
        for (key, value) in patch {
            doc.insert(key, value);
        }
        self.publish(&docs);
        Ok(())
    }

    async fn array_union(&self, id: &str, field: &str, value: Value) -> Result<(), StoreError> {
        if value.is_null() {
            return Err(StoreError::NullField(field.to_string()));
        }
        let mut docs = self.lock()?;
        let doc = docs
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        let array = match doc.entry(field.to_string()).or_insert_with(|| Value::Array(vec![])) {
            Value::Array(items) => items,
            other => {
                return Err(StoreError::Backend(format!(
                    "field '{}' holds {} where an array was expected",
                    field,
                    json_kind(other)
                )))
            }
        };
        if !array.contains(&value) {
            array.push(value);
        }
        self.publish(&docs);
        Ok(())
    }

    async fn set_field(&self, id: &str, field: &str, value: Value) -> Result<(), StoreError> {
        if value.is_null() {
            return Err(StoreError::NullField(field.to_string()));
        }
        let mut docs = self.lock()?;
        let doc = docs
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        doc.insert(field.to_string(), value);
        self.publish(&docs);
        Ok(())
    }

    fn subscribe(&self) -> watch::Receiver<CollectionSnapshot> {
        self.snapshot_tx.subscribe()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
