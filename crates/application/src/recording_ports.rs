//! Port to the key-value store holding recordings.

use async_trait::async_trait;
use orakel_core::AppResult;

/// Read-only port to the key-value store holding recordings.
#[async_trait]
pub trait RecordingStore: Send + Sync {
    /// Returns the raw payload stored under `key`, or `None` when absent.
    ///
    /// Fails with `AppError::CacheFetch` on transport errors.
    async fn get_entry(&self, key: &str) -> AppResult<Option<String>>;
}
