//! Best-effort lookup of recordings for workload checks.

use std::collections::BTreeMap;
use std::sync::Arc;

use futures::future::join_all;
use orakel_core::{AppError, AppResult};
use orakel_domain::{RECORDING_KEY_PREFIX, RecordingKey, WorkloadCheck, WorkloadRecording};
use tracing::warn;

use crate::recording_ports::RecordingStore;


/// Reads recordings from the key-value store.
#[derive(Clone)]
pub struct RecordingService {
    store: Arc<dyn RecordingStore>,
    key_prefix: String,
}

impl RecordingService {
    /// Creates a service using the default `recording` key prefix.
    #[must_use]
    pub fn new(store: Arc<dyn RecordingStore>) -> Self {
        Self::with_key_prefix(store, RECORDING_KEY_PREFIX)
    }

    /// Creates a service with a custom key prefix.
    #[must_use]
    pub fn with_key_prefix(store: Arc<dyn RecordingStore>, key_prefix: impl Into<String>) -> Self {
        Self {
            store,
            key_prefix: key_prefix.into(),
        }
    }

    /// Looks up the recording of one check run.
    ///
    /// Returns `Ok(None)` when nothing is stored under the key. Transport
    /// failures surface as `AppError::CacheFetch` and unparseable payloads as
    /// `AppError::Decode`.
    pub async fn get_recording(
        &self,
        namespace: &str,
        suffix: &str,
        run_name: &str,
    ) -> AppResult<Option<WorkloadRecording>> {
        let key = RecordingKey::new(namespace, suffix, run_name).store_key(&self.key_prefix);

        let payload = self.store.get_entry(key.as_str()).await?;
        let Some(payload) = payload.filter(|payload| !payload.is_empty()) else {
            return Ok(None);
        };

        serde_json::from_str::<WorkloadRecording>(payload.as_str())
            .map(Some)
            .map_err(|error| {
                AppError::Decode(format!("invalid recording payload under '{key}': {error}"))
            })
    }

    /// Collects the recordings of every run of `check`, keyed by run name.
    ///
    /// Lookups run concurrently. Runs without a recording are left out, and a
    /// failed lookup is logged and skipped without affecting the others.
    pub async fn get_recordings(
        &self,
        check: &WorkloadCheck,
    ) -> BTreeMap<String, WorkloadRecording> {
        let lookups = check.status.check_runs.iter().map(|run| async move {
            let result = self
                .get_recording(check.namespace(), check.spec.suffix.as_str(), run.name.as_str())
                .await;
            (run.name.as_str(), result)
        });

        let mut recordings = BTreeMap::new();
        for (run_name, result) in join_all(lookups).await {
            match result {
                Ok(Some(recording)) => {
                    recordings.insert(run_name.to_owned(), recording);
                }
                Ok(None) => {}
                Err(error) => {
                    warn!(
                        namespace = %check.namespace(),
                        check = %check.name(),
                        run = %run_name,
                        key = %RecordingKey::new(check.namespace(), check.spec.suffix.as_str(), run_name),
                        error = %error,
                        "skipping recording that could not be loaded"
                    );
                }
            }
        }

        recordings
    }
}
