//! Durable persistence for scheduling records.
//!
//! The whole record map round-trips as one JSON document under a fixed
//! key of an injected key-value capability. Persistence is best effort:
//! a failed or unreadable load falls open to an empty store, a failed
//! save is logged and the in-memory state kept.

use std::collections::HashMap;

use async_trait::async_trait;
use tracing::{error, warn};

use crate::error::Result;
use crate::types::SchedulingRecord;

/// Storage key the scheduling document lives under.
pub const STORAGE_KEY: &str = "spaced_repetition_data";

/// Asynchronous key-value capability the store persists through.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;
    async fn set(&self, key: &str, value: &str) -> Result<()>;
}

#[async_trait]
impl<T: KeyValueStore + ?Sized> KeyValueStore for std::sync::Arc<T> {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value).await
    }
}

/// In-memory record map synced to a [`KeyValueStore`].
pub struct SchedulingStore<K> {
    kv: K,
    records: HashMap<String, SchedulingRecord>,
}

impl<K: KeyValueStore> SchedulingStore<K> {
    pub fn new(kv: K) -> Self {
        Self {
            kv,
            records: HashMap::new(),
        }
    }

    /// Load the persisted document, replacing the in-memory map.
    ///
    /// Missing, unreadable, or unreachable data all yield an empty map;
    /// the failure is logged and never propagated.
    pub async fn load(&mut self) {
        self.records = match self.kv.get(STORAGE_KEY).await {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(records) => records,
                Err(err) => {
                    warn!("discarding unreadable scheduling data: {err}");
                    HashMap::new()
                }
            },
            Ok(None) => HashMap::new(),
            Err(err) => {
                warn!("failed to load scheduling data: {err}");
                HashMap::new()
            }
        };
    }

    /// Persist the whole document. Failures are logged, not retried;
    /// the in-memory mutation stands either way.
    pub async fn save(&self) {
        let raw = match serde_json::to_string(&self.records) {
            Ok(raw) => raw,
            Err(err) => {
                error!("failed to serialize scheduling data: {err}");
                return;
            }
        };
        if let Err(err) = self.kv.set(STORAGE_KEY, &raw).await {
            error!("failed to persist scheduling data: {err}");
        }
    }

    pub fn get(&self, question_id: &str) -> Option<&SchedulingRecord> {
        self.records.get(question_id)
    }

    pub fn insert(&mut self, record: SchedulingRecord) {
        self.records.insert(record.question_id.clone(), record);
    }

    pub fn records(&self) -> &HashMap<String, SchedulingRecord> {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
