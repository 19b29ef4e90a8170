//! API coordinates of resource kinds and discovery catalog entries.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// API coordinates of a resource kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupVersionResource {
    /// API group, empty for the core group.
    pub group: String,
    /// API version within the group.
    pub version: String,
    /// Plural resource name used in request paths.
    pub resource: String,
}

impl GroupVersionResource {
    /// Creates resource coordinates.
    #[must_use]
    pub fn new(
        group: impl Into<String>,
        version: impl Into<String>,
        resource: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            version: version.into(),
            resource: resource.into(),
        }
    }

    /// Returns `group/version`, or only `version` for the core group.
    #[must_use]
    pub fn api_version(&self) -> String {
        if self.group.is_empty() {
            self.version.clone()
        } else {
            format!("{}/{}", self.group, self.version)
        }
    }
}

impl Display for GroupVersionResource {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}/{}", self.api_version(), self.resource)
    }
}

/// One entry of the cluster's discovery catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredResource {
    /// API group.
    pub group: String,
    /// API version.
    pub version: String,
    /// Kind name, e.g. `WorkloadHardeningCheck`.
    pub kind: String,
    /// Plural resource name, e.g. `workloadhardeningchecks`.
    pub plural: String,
}

impl DiscoveredResource {
    /// Returns whether the query names this resource by kind or plural name.
    ///
    /// Comparison ignores ASCII case.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        self.kind.eq_ignore_ascii_case(query) || self.plural.eq_ignore_ascii_case(query)
    }

    /// Returns the coordinates of this resource.
    #[must_use]
    pub fn to_gvr(&self) -> GroupVersionResource {
        GroupVersionResource::new(
            self.group.clone(),
            self.version.clone(),
            self.plural.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{DiscoveredResource, GroupVersionResource};

    fn workload_check_resource() -> DiscoveredResource {
        DiscoveredResource {
            group: "checks.example.io".to_owned(),
            version: "v1alpha1".to_owned(),
            kind: "WorkloadHardeningCheck".to_owned(),
            plural: "workloadhardeningchecks".to_owned(),
        }
    }

    #[test]
    fn matches_kind_and_plural_ignoring_case() {
        let resource = workload_check_resource();
        assert!(resource.matches("WorkloadHardeningCheck"));
        assert!(resource.matches("workloadhardeningcheck"));
        assert!(resource.matches("WorkloadHardeningChecks"));
        assert!(!resource.matches("NamespaceHardeningCheck"));
    }

    #[test]
    fn display_includes_group_version_and_resource() {
        let gvr = workload_check_resource().to_gvr();
        assert_eq!(
            gvr.to_string(),
            "checks.example.io/v1alpha1/workloadhardeningchecks"
        );
    }

    #[test]
    fn core_group_api_version_is_bare_version() {
        let gvr = GroupVersionResource::new("", "v1", "pods");
        assert_eq!(gvr.api_version(), "v1");
    }
}
