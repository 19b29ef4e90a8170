//! Builds the hardening check report for one request.

use std::collections::{BTreeMap, HashMap};

use futures::future::join_all;
use orakel_core::AppResult;
use orakel_domain::{WorkloadCheck, WorkloadRecording};
use tracing::info;

use crate::check_fetcher::CheckFetcher;
use crate::correlation::{
    NamespaceCheckContext, WorkloadCheckContext, WorkloadCheckInfo, build_namespace_tree,
    build_workload_list,
};
use crate::recording_service::RecordingService;


type CheckIdentity = (String, String);

/// Both report views built from one snapshot of the cluster.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HardeningReport {
    /// Namespace checks with their owned workload checks.
    pub namespace_checks: NamespaceCheckContext,
    /// Every workload check, including orphans.
    pub workload_checks: WorkloadCheckContext,
}

/// Application service assembling the report.
#[derive(Clone)]
pub struct ReportService {
    fetcher: CheckFetcher,
    recordings: RecordingService,
}

impl ReportService {
    /// Creates a report service.
    #[must_use]
    pub fn new(fetcher: CheckFetcher, recordings: RecordingService) -> Self {
        Self {
            fetcher,
            recordings,
        }
    }

    /// Lists both check kinds, correlates them and attaches recordings.
    ///
    /// Any listing failure aborts the report. Recording failures never do.
    pub async fn build_report(&self) -> AppResult<HardeningReport> {
        let (namespace_checks, workload_checks) = futures::try_join!(
            self.fetcher.list_namespace_checks(),
            self.fetcher.list_workload_checks()
        )?;

        let recordings = self.collect_recordings(&workload_checks).await;

        let mut namespace_tree = build_namespace_tree(&namespace_checks, &workload_checks);
        let mut workload_list = build_workload_list(&workload_checks);

        for info in namespace_tree
            .checks
            .iter_mut()
            .flat_map(|namespace_check| namespace_check.workload_checks.iter_mut())
            .chain(workload_list.checks.iter_mut())
        {
            attach_recordings(info, &recordings);
        }

        info!(
            namespace_checks = namespace_tree.checks.len(),
            workload_checks = workload_list.checks.len(),
            orphaned_workload_checks = workload_list.orphans().count(),
            recordings = recordings.values().map(BTreeMap::len).sum::<usize>(),
            "built hardening check report"
        );

        Ok(HardeningReport {
            namespace_checks: namespace_tree,
            workload_checks: workload_list,
        })
    }

    async fn collect_recordings(
        &self,
        workload_checks: &[WorkloadCheck],
    ) -> HashMap<CheckIdentity, BTreeMap<String, WorkloadRecording>> {
        let lookups = workload_checks.iter().map(|check| async move {
            (
                check_identity(check),
                self.recordings.get_recordings(check).await,
            )
        });

        join_all(lookups).await.into_iter().collect()
    }
}

fn check_identity(check: &WorkloadCheck) -> CheckIdentity {
    (check.namespace().to_owned(), check.name().to_owned())
}

fn attach_recordings(
    info: &mut WorkloadCheckInfo,
    recordings: &HashMap<CheckIdentity, BTreeMap<String, WorkloadRecording>>,
) {
    if let Some(found) = recordings.get(&check_identity(&info.check)) {
        info.recordings = found.clone();
    }
}
