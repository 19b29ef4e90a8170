//! Hardening check records published by the audit controller.
//!
//! These shapes mirror the JSON layout of the `NamespaceHardeningCheck` and
//! `WorkloadHardeningCheck` custom resources. Fields the controller may omit
//! default to empty values; unknown spec fields are preserved.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Condition type reporting whether a check has finished.
pub const CONDITION_TYPE_FINISHED: &str = "Finished";

/// Condition status value for a satisfied condition.
pub const CONDITION_STATUS_TRUE: &str = "True";

/// Kind name of the namespace-level check resource.
pub const NAMESPACE_CHECK_KIND: &str = "NamespaceHardeningCheck";

/// Kind name of the workload-level check resource.
pub const WORKLOAD_CHECK_KIND: &str = "WorkloadHardeningCheck";

/// Decodes an absent or `null` field as the type's empty value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Status flag attached to a check by the audit controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckCondition {
    /// What the condition reports, for example `Finished`.
    #[serde(rename = "type")]
    pub condition_type: String,
    /// `"True"` or `"False"`, occasionally `"Unknown"`.
    pub status: String,
    /// Machine-readable reason for the last transition.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Human-readable transition message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Time of the last status transition.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_transition_time: Option<DateTime<Utc>>,
}

impl CheckCondition {
    /// Creates a condition with only type and status set.
    #[must_use]
    pub fn new(condition_type: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            condition_type: condition_type.into(),
            status: status.into(),
            reason: None,
            message: None,
            last_transition_time: None,
        }
    }

    /// Returns whether this is a `Finished` condition.
    #[must_use]
    pub fn is_finished_type(&self) -> bool {
        self.condition_type == CONDITION_TYPE_FINISHED
    }

    /// Returns whether the status is exactly `"True"`.
    #[must_use]
    pub fn is_true(&self) -> bool {
        self.status == CONDITION_STATUS_TRUE
    }
}

/// Returns true unless some `Finished` condition reports anything but `"True"`.
///
/// Vacuously true when no `Finished` condition is present.
pub fn all_finished_true<'a>(conditions: impl IntoIterator<Item = &'a CheckCondition>) -> bool {
    !conditions
        .into_iter()
        .any(|condition| condition.is_finished_type() && !condition.is_true())
}

/// Returns true when at least one `Finished` condition reports `"True"`.
///
/// This is not the complement of [`all_finished_true`]; a set of conditions
/// may satisfy both or neither.
pub fn any_finished_true<'a>(conditions: impl IntoIterator<Item = &'a CheckCondition>) -> bool {
    conditions
        .into_iter()
        .any(|condition| condition.is_finished_type() && condition.is_true())
}

/// Back-reference from a child object to the object owning it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerReference {
    /// API version of the owner.
    #[serde(default)]
    pub api_version: String,
    /// Kind of the owner.
    #[serde(default)]
    pub kind: String,
    /// Name of the owner.
    pub name: String,
    /// UID of the owner.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    /// Whether the owner is the managing controller.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub controller: Option<bool>,
}

impl OwnerReference {
    /// Creates an owner reference with name and kind.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            api_version: String::new(),
            kind: kind.into(),
            name: name.into(),
            uid: None,
            controller: None,
        }
    }
}

/// Object identity shared by both check kinds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckMetadata {
    /// Object name.
    pub name: String,
    /// Object namespace.
    #[serde(default)]
    pub namespace: String,
    /// Object UID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    /// Creation time assigned by the control plane.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_timestamp: Option<DateTime<Utc>>,
    /// Object labels.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub labels: BTreeMap<String, String>,
    /// Ownership back-references, in declaration order.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub owner_references: Vec<OwnerReference>,
}

impl CheckMetadata {
    /// Creates metadata with name and namespace only.
    #[must_use]
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            uid: None,
            creation_timestamp: None,
            labels: BTreeMap::new(),
            owner_references: Vec::new(),
        }
    }

    /// Returns the primary owner: the first declared owner reference.
    ///
    /// Only the primary owner takes part in correlation; further references
    /// are ignored.
    #[must_use]
    pub fn primary_owner(&self) -> Option<&OwnerReference> {
        self.owner_references.first()
    }

    /// Returns whether the primary owner carries the given name.
    ///
    /// Owner kind and group are not compared.
    #[must_use]
    pub fn is_owned_by(&self, owner_name: &str) -> bool {
        self.primary_owner()
            .is_some_and(|owner| owner.name == owner_name)
    }
}

/// Audit parameters of a namespace-level check.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamespaceCheckSpec {
    /// Namespace whose workloads are audited.
    #[serde(default)]
    pub target_namespace: String,
    /// Disambiguator appended to derived object names.
    #[serde(default)]
    pub suffix: String,
    /// How long each workload is recorded, as a duration string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recording_duration: Option<String>,
    /// Spec fields without a typed counterpart.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Status block of a namespace-level check.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamespaceCheckStatus {
    /// Conditions in controller order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub conditions: Vec<CheckCondition>,
}

/// One namespace-level audit run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamespaceCheck {
    /// Object identity.
    pub metadata: CheckMetadata,
    /// Audit parameters.
    #[serde(default, deserialize_with = "null_as_default")]
    pub spec: NamespaceCheckSpec,
    /// Controller-owned status.
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: NamespaceCheckStatus,
}

impl NamespaceCheck {
    /// Returns the object name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.metadata.name.as_str()
    }
}

/// Reference to the audited workload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetReference {
    /// API version of the workload.
    #[serde(default)]
    pub api_version: String,
    /// Kind of the workload, e.g. `Deployment`.
    #[serde(default)]
    pub kind: String,
    /// Name of the workload.
    #[serde(default)]
    pub name: String,
}

/// Audit parameters of a workload-level check.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkloadCheckSpec {
    /// Audited workload.
    #[serde(default)]
    pub target_ref: TargetReference,
    /// Disambiguator shared with recordings of this check.
    #[serde(default)]
    pub suffix: String,
    /// How long each run is recorded, as a duration string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recording_duration: Option<String>,
    /// Spec fields without a typed counterpart.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// One executed variant of a workload check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckRun {
    /// Variant name, unique within the check.
    pub name: String,
    /// Security context applied for this run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_context: Option<Value>,
    /// Run-level conditions.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub conditions: Vec<CheckCondition>,
}

impl CheckRun {
    /// Creates a run with only its name set.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            security_context: None,
            conditions: Vec::new(),
        }
    }
}

/// Status block of a workload-level check.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkloadCheckStatus {
    /// Conditions in controller order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub conditions: Vec<CheckCondition>,
    /// Executed runs in controller order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub check_runs: Vec<CheckRun>,
}

/// One workload-level audit run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkloadCheck {
    /// Object identity including owner references.
    pub metadata: CheckMetadata,
    /// Audit parameters.
    #[serde(default, deserialize_with = "null_as_default")]
    pub spec: WorkloadCheckSpec,
    /// Controller-owned status.
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: WorkloadCheckStatus,
}

impl WorkloadCheck {
    /// Returns the object name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.metadata.name.as_str()
    }

    /// Returns the object namespace.
    #[must_use]
    pub fn namespace(&self) -> &str {
        self.metadata.namespace.as_str()
    }
}
