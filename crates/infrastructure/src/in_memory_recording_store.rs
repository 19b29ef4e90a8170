use std::collections::HashMap;

use async_trait::async_trait;
use orakel_application::RecordingStore;
use orakel_core::{AppError, AppResult};
use orakel_domain::{RecordingKey, WorkloadRecording};
use tokio::sync::RwLock;

/// In-memory recording store, used when no key-value store is configured.
#[derive(Default)]
pub struct InMemoryRecordingStore {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemoryRecordingStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a recording JSON-encoded under its prefixed key.
    pub async fn insert_recording(
        &self,
        key_prefix: &str,
        key: &RecordingKey,
        recording: &WorkloadRecording,
    ) -> AppResult<()> {
        let payload = serde_json::to_string(recording).map_err(|error| {
            AppError::Internal(format!("failed to encode recording '{key}': {error}"))
        })?;

        self.insert_raw(key.store_key(key_prefix).as_str(), payload)
            .await;
        Ok(())
    }

    /// Stores a raw payload under `key`.
    pub async fn insert_raw(&self, key: &str, payload: impl Into<String>) {
        self.entries
            .write()
            .await
            .insert(key.to_lowercase(), payload.into());
    }
}

#[async_trait]
impl RecordingStore for InMemoryRecordingStore {
    async fn get_entry(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.read().await.get(&key.to_lowercase()).cloned())
    }
}
