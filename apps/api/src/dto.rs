use std::collections::BTreeMap;

use orakel_application::{HardeningReport, NamespaceCheckInfo, WorkloadCheckInfo};
use orakel_domain::{CheckCondition, CheckRun, TargetReference, WorkloadRecording};
use serde::Serialize;

/// Status of one dependency probed by the health endpoint.
#[derive(Debug, Serialize)]
pub struct HealthDependencyStatus {
    pub status: &'static str,
    pub detail: Option<String>,
}

/// Health response payload.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub ready: bool,
    pub recording_store: HealthDependencyStatus,
}

/// API representation of a workload check.
#[derive(Debug, Serialize)]
pub struct WorkloadCheckResponse {
    pub name: String,
    pub namespace: String,
    pub owner: Option<String>,
    pub suffix: String,
    pub target: TargetReference,
    pub conditions: Vec<CheckCondition>,
    pub check_runs: Vec<CheckRun>,
    pub successful: bool,
    pub running: bool,
    pub recordings: BTreeMap<String, WorkloadRecording>,
}

impl From<&WorkloadCheckInfo> for WorkloadCheckResponse {
    fn from(value: &WorkloadCheckInfo) -> Self {
        let check = &value.check;
        Self {
            name: check.metadata.name.clone(),
            namespace: check.metadata.namespace.clone(),
            owner: check
                .metadata
                .primary_owner()
                .map(|owner| owner.name.clone()),
            suffix: check.spec.suffix.clone(),
            target: check.spec.target_ref.clone(),
            conditions: check.status.conditions.clone(),
            check_runs: check.status.check_runs.clone(),
            successful: value.successful(),
            running: value.running(),
            recordings: value.recordings.clone(),
        }
    }
}

/// API representation of a namespace check and its workload checks.
#[derive(Debug, Serialize)]
pub struct NamespaceCheckResponse {
    pub name: String,
    pub namespace: String,
    pub target_namespace: String,
    pub suffix: String,
    pub conditions: Vec<CheckCondition>,
    pub successful: bool,
    pub running: bool,
    pub workload_checks: Vec<WorkloadCheckResponse>,
}

impl From<&NamespaceCheckInfo> for NamespaceCheckResponse {
    fn from(value: &NamespaceCheckInfo) -> Self {
        let check = &value.check;
        Self {
            name: check.metadata.name.clone(),
            namespace: check.metadata.namespace.clone(),
            target_namespace: check.spec.target_namespace.clone(),
            suffix: check.spec.suffix.clone(),
            conditions: check.status.conditions.clone(),
            successful: value.successful(),
            running: value.running(),
            workload_checks: value
                .workload_checks
                .iter()
                .map(WorkloadCheckResponse::from)
                .collect(),
        }
    }
}

/// Full report payload.
#[derive(Debug, Serialize)]
pub struct ReportResponse {
    pub namespace_checks: Vec<NamespaceCheckResponse>,
    pub workload_checks: Vec<WorkloadCheckResponse>,
}

impl From<&HardeningReport> for ReportResponse {
    fn from(value: &HardeningReport) -> Self {
        Self {
            namespace_checks: value
                .namespace_checks
                .checks
                .iter()
                .map(NamespaceCheckResponse::from)
                .collect(),
            workload_checks: value
                .workload_checks
                .checks
                .iter()
                .map(WorkloadCheckResponse::from)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use orakel_application::{HardeningReport, build_namespace_tree, build_workload_list};
    use orakel_domain::{
        CheckCondition, CheckMetadata, CheckRun, NamespaceCheck, NamespaceCheckSpec,
        NamespaceCheckStatus, OwnerReference, WorkloadCheck, WorkloadCheckSpec,
        WorkloadCheckStatus, WorkloadRecording,
    };
    use serde_json::json;

    use super::ReportResponse;

    fn report() -> HardeningReport {
        let namespace_checks = vec![NamespaceCheck {
            metadata: CheckMetadata::new("audit-1", "audits"),
            spec: NamespaceCheckSpec {
                target_namespace: "shop".to_owned(),
                suffix: "ab12".to_owned(),
                ..NamespaceCheckSpec::default()
            },
            status: NamespaceCheckStatus::default(),
        }];

        let mut metadata = CheckMetadata::new("web", "shop");
        metadata.owner_references = vec![OwnerReference::new("audit-1", "NamespaceHardeningCheck")];
        let workload_checks = vec![WorkloadCheck {
            metadata,
            spec: WorkloadCheckSpec {
                suffix: "ab12".to_owned(),
                ..WorkloadCheckSpec::default()
            },
            status: WorkloadCheckStatus {
                conditions: vec![CheckCondition::new("Finished", "True")],
                check_runs: vec![CheckRun::named("baseline")],
            },
        }];

        let mut workload_list = build_workload_list(&workload_checks);
        workload_list.checks[0].recordings = BTreeMap::from([(
            "baseline".to_owned(),
            WorkloadRecording {
                recording_type: "baseline".to_owned(),
                start_time: None,
                end_time: None,
                recording_error: None,
                profile: BTreeMap::new(),
            },
        )]);

        HardeningReport {
            namespace_checks: build_namespace_tree(&namespace_checks, &workload_checks),
            workload_checks: workload_list,
        }
    }

    #[test]
    fn report_response_serializes_flags_and_recordings() {
        let response = ReportResponse::from(&report());
        let value = serde_json::to_value(&response);
        assert!(value.is_ok());
        let value = value.unwrap_or_default();

        assert_eq!(value["namespace_checks"][0]["name"], json!("audit-1"));
        assert_eq!(value["namespace_checks"][0]["successful"], json!(true));
        assert_eq!(value["namespace_checks"][0]["running"], json!(true));
        assert_eq!(
            value["namespace_checks"][0]["workload_checks"][0]["owner"],
            json!("audit-1")
        );
        assert_eq!(
            value["workload_checks"][0]["recordings"]["baseline"]["type"],
            json!("baseline")
        );
        assert_eq!(
            value["workload_checks"][0]["conditions"][0],
            json!({"type": "Finished", "status": "True"})
        );
    }
}
