//! Ports to the cluster API used for discovery and listing.

use async_trait::async_trait;
use orakel_core::AppResult;
use orakel_domain::{DiscoveredResource, GroupVersionResource};
use serde_json::Value;

/// Port exposing the cluster's API discovery catalog.
#[async_trait]
pub trait DiscoveryCatalog: Send + Sync {
    /// Returns every served resource, preferred versions first within a group.
    ///
    /// Fails with `AppError::Discovery` when the control plane cannot be
    /// reached.
    async fn discover_resources(&self) -> AppResult<Vec<DiscoveredResource>>;
}

/// Port listing resources without a schema.
#[async_trait]
pub trait ResourceLister: Send + Sync {
    /// Lists all objects of one resource across all namespaces.
    ///
    /// Fails with `AppError::Fetch` on transport or server errors.
    async fn list_unstructured(&self, gvr: &GroupVersionResource) -> AppResult<Vec<Value>>;
}
