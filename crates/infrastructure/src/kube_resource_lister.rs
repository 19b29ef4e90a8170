//! Schema-agnostic resource listing through the `kube` dynamic API.

use async_trait::async_trait;
use kube::Client;
use kube::api::{Api, DynamicObject, GroupVersionKind, ListParams};
use kube::discovery::ApiResource;
use orakel_application::ResourceLister;
use orakel_core::{AppError, AppResult};
use orakel_domain::GroupVersionResource;
use serde_json::Value;

/// Lists resources as untyped JSON objects across all namespaces.
#[derive(Clone)]
pub struct KubeResourceLister {
    client: Client,
}

impl KubeResourceLister {
    /// Creates a lister over a configured cluster client.
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

/// Builds the dynamic API descriptor for a resolved resource.
///
/// Listing only needs the request path, so the kind stays empty.
fn api_resource_for(gvr: &GroupVersionResource) -> ApiResource {
    ApiResource::from_gvk_with_plural(
        &GroupVersionKind::gvk(gvr.group.as_str(), gvr.version.as_str(), ""),
        gvr.resource.as_str(),
    )
}

#[async_trait]
impl ResourceLister for KubeResourceLister {
    async fn list_unstructured(&self, gvr: &GroupVersionResource) -> AppResult<Vec<Value>> {
        let api: Api<DynamicObject> = Api::all_with(self.client.clone(), &api_resource_for(gvr));

        let list = api
            .list(&ListParams::default())
            .await
            .map_err(|error| AppError::Fetch(format!("failed to list {gvr}: {error}")))?;

        list.items
            .into_iter()
            .map(|object| {
                serde_json::to_value(object).map_err(|error| {
                    AppError::Conversion(format!("failed to serialize {gvr} object: {error}"))
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use orakel_domain::GroupVersionResource;

    use super::api_resource_for;

    #[test]
    fn api_resource_targets_resolved_plural() {
        let gvr =
            GroupVersionResource::new("checks.example.io", "v1alpha1", "workloadhardeningchecks");

        let resource = api_resource_for(&gvr);
        assert_eq!(resource.group, "checks.example.io");
        assert_eq!(resource.version, "v1alpha1");
        assert_eq!(resource.api_version, "checks.example.io/v1alpha1");
        assert_eq!(resource.plural, "workloadhardeningchecks");
    }

    #[test]
    fn core_group_resource_uses_bare_version() {
        let gvr = GroupVersionResource::new("", "v1", "configmaps");

        let resource = api_resource_for(&gvr);
        assert_eq!(resource.api_version, "v1");
    }
}
