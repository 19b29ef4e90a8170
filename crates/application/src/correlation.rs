//! Ownership correlation of workload checks to namespace checks.

use std::collections::BTreeMap;

use orakel_domain::{
    NamespaceCheck, WorkloadCheck, WorkloadRecording, all_finished_true, any_finished_true,
};


/// Workload check prepared for reporting.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkloadCheckInfo {
    /// The check as listed from the cluster.
    pub check: WorkloadCheck,
    /// Recordings keyed by check run name; empty until enriched.
    pub recordings: BTreeMap<String, WorkloadRecording>,
}

impl WorkloadCheckInfo {
    /// Wraps a check without recordings.
    #[must_use]
    pub fn new(check: WorkloadCheck) -> Self {
        Self {
            check,
            recordings: BTreeMap::new(),
        }
    }

    /// True unless one of the check's `Finished` conditions is not `"True"`.
    #[must_use]
    pub fn successful(&self) -> bool {
        all_finished_true(&self.check.status.conditions)
    }

    /// True when one of the check's `Finished` conditions is `"True"`.
    #[must_use]
    pub fn running(&self) -> bool {
        any_finished_true(&self.check.status.conditions)
    }
}

/// Namespace check together with the workload checks it owns.
#[derive(Debug, Clone, PartialEq)]
pub struct NamespaceCheckInfo {
    /// The check as listed from the cluster.
    pub check: NamespaceCheck,
    /// Owned workload checks in listing order.
    pub workload_checks: Vec<WorkloadCheckInfo>,
}

impl NamespaceCheckInfo {
    /// Aggregate of [`WorkloadCheckInfo::successful`] over all children.
    ///
    /// The namespace check's own conditions are not consulted.
    #[must_use]
    pub fn successful(&self) -> bool {
        all_finished_true(
            self.workload_checks
                .iter()
                .flat_map(|workload| workload.check.status.conditions.iter()),
        )
    }

    /// Aggregate of [`WorkloadCheckInfo::running`] over all children.
    #[must_use]
    pub fn running(&self) -> bool {
        any_finished_true(
            self.workload_checks
                .iter()
                .flat_map(|workload| workload.check.status.conditions.iter()),
        )
    }
}

/// Namespace checks with their children, as handed to rendering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NamespaceCheckContext {
    /// One entry per namespace check, in listing order.
    pub checks: Vec<NamespaceCheckInfo>,
}

/// Flat list of all workload checks, including orphans.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkloadCheckContext {
    /// One entry per workload check, in listing order.
    pub checks: Vec<WorkloadCheckInfo>,
}

impl WorkloadCheckContext {
    /// Returns the checks that have no primary owner.
    pub fn orphans(&self) -> impl Iterator<Item = &WorkloadCheckInfo> {
        self.checks
            .iter()
            .filter(|info| info.check.metadata.primary_owner().is_none())
    }
}

/// Attaches each workload check to the namespace check named by its primary owner.
///
/// Runs in O(namespace checks × workload checks). A workload check whose
/// primary owner matches no namespace check appears in no child list.
#[must_use]
pub fn build_namespace_tree(
    namespace_checks: &[NamespaceCheck],
    workload_checks: &[WorkloadCheck],
) -> NamespaceCheckContext {
    let checks = namespace_checks
        .iter()
        .map(|namespace_check| NamespaceCheckInfo {
            check: namespace_check.clone(),
            workload_checks: workload_checks
                .iter()
                .filter(|workload| workload.metadata.is_owned_by(namespace_check.name()))
                .cloned()
                .map(WorkloadCheckInfo::new)
                .collect(),
        })
        .collect();

    NamespaceCheckContext { checks }
}

/// Wraps every workload check for flat reporting.
#[must_use]
pub fn build_workload_list(workload_checks: &[WorkloadCheck]) -> WorkloadCheckContext {
    WorkloadCheckContext {
        checks: workload_checks
            .iter()
            .cloned()
            .map(WorkloadCheckInfo::new)
            .collect(),
    }
}
