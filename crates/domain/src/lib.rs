//! Domain records for hardening check reporting.

#![forbid(unsafe_code)]

mod check;
mod recording;
mod resource;

pub use check::{
    CONDITION_STATUS_TRUE, CONDITION_TYPE_FINISHED, CheckCondition, CheckMetadata, CheckRun,
    NAMESPACE_CHECK_KIND, NamespaceCheck, NamespaceCheckSpec, NamespaceCheckStatus,
    OwnerReference, TargetReference, WORKLOAD_CHECK_KIND, WorkloadCheck, WorkloadCheckSpec,
    WorkloadCheckStatus, all_finished_true, any_finished_true,
};
pub use recording::{RECORDING_KEY_PREFIX, RecordingKey, WorkloadRecording};
pub use resource::{DiscoveredResource, GroupVersionResource};
