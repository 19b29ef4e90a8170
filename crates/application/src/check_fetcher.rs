//! Typed listing of hardening checks through the dynamic cluster API.

use std::sync::Arc;

use orakel_core::AppResult;
use orakel_domain::{NAMESPACE_CHECK_KIND, NamespaceCheck, WORKLOAD_CHECK_KIND, WorkloadCheck};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::check_ports::ResourceLister;
use crate::resource_mapper::ResourceMapper;
use crate::typed_converter::convert_all;


/// Kind names looked up for each check level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckKinds {
    /// Kind of the namespace-level check.
    pub namespace_check: String,
    /// Kind of the workload-level check.
    pub workload_check: String,
}

impl Default for CheckKinds {
    fn default() -> Self {
        Self {
            namespace_check: NAMESPACE_CHECK_KIND.to_owned(),
            workload_check: WORKLOAD_CHECK_KIND.to_owned(),
        }
    }
}

/// Resolves, lists and converts check resources.
#[derive(Clone)]
pub struct CheckFetcher {
    mapper: ResourceMapper,
    lister: Arc<dyn ResourceLister>,
    kinds: CheckKinds,
}

impl CheckFetcher {
    /// Creates a fetcher for the given kind names.
    #[must_use]
    pub fn new(mapper: ResourceMapper, lister: Arc<dyn ResourceLister>, kinds: CheckKinds) -> Self {
        Self {
            mapper,
            lister,
            kinds,
        }
    }

    /// Lists every namespace-level check in the cluster.
    pub async fn list_namespace_checks(&self) -> AppResult<Vec<NamespaceCheck>> {
        self.list_checks(self.kinds.namespace_check.as_str()).await
    }

    /// Lists every workload-level check in the cluster.
    pub async fn list_workload_checks(&self) -> AppResult<Vec<WorkloadCheck>> {
        self.list_checks(self.kinds.workload_check.as_str()).await
    }

    /// Lists all objects of `kind` and converts them to `T`.
    pub async fn list_checks<T: DeserializeOwned>(&self, kind: &str) -> AppResult<Vec<T>> {
        let gvr = self.mapper.resolve_gvr(kind).await?;
        let items = self.lister.list_unstructured(&gvr).await?;

        debug!(kind = %kind, gvr = %gvr, items = items.len(), "listed check resources");

        convert_all(kind, items)
    }
}
