//! Behavioral recordings captured during earlier audit runs.

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default prefix of recording keys in the key-value store.
pub const RECORDING_KEY_PREFIX: &str = "recording";

/// Composite identity of one recording.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordingKey {
    /// Namespace of the workload check.
    pub namespace: String,
    /// Suffix of the workload check.
    pub suffix: String,
    /// Name of the check run.
    pub run_name: String,
}

impl RecordingKey {
    /// Creates a recording key.
    #[must_use]
    pub fn new(
        namespace: impl Into<String>,
        suffix: impl Into<String>,
        run_name: impl Into<String>,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            suffix: suffix.into(),
            run_name: run_name.into(),
        }
    }

    /// Returns the store key `<prefix>:<namespace>:<suffix>:<runName>`.
    ///
    /// Keys are stored lowercase.
    #[must_use]
    pub fn store_key(&self, prefix: &str) -> String {
        format!("{prefix}:{self}").to_lowercase()
    }
}

impl Display for RecordingKey {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{}:{}:{}",
            self.namespace, self.suffix, self.run_name
        )
    }
}

/// Recorded behavioral profile of one check run.
///
/// Only the envelope is typed; the profile itself is kept verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkloadRecording {
    /// Recording kind, e.g. `baseline`.
    #[serde(rename = "type", default)]
    pub recording_type: String,
    /// Start of the recording window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    /// End of the recording window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    /// Error reported by the recorder, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recording_error: Option<String>,
    /// Remaining profile fields.
    #[serde(flatten)]
    pub profile: BTreeMap<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::{RECORDING_KEY_PREFIX, RecordingKey};

    #[test]
    fn store_key_is_prefixed_and_lowercase() {
        let key = RecordingKey::new("Shop", "AB12", "RunAsNonRoot");
        assert_eq!(
            key.store_key(RECORDING_KEY_PREFIX),
            "recording:shop:ab12:runasnonroot"
        );
    }

    #[test]
    fn display_omits_prefix_and_keeps_case() {
        let key = RecordingKey::new("Shop", "AB12", "baseline");
        assert_eq!(key.to_string(), "Shop:AB12:baseline");
    }
}
