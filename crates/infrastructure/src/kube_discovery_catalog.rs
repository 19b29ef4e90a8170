//! Cluster discovery adapter backed by `kube`.

use async_trait::async_trait;
use kube::Client;
use kube::discovery::Discovery;
use orakel_application::DiscoveryCatalog;
use orakel_core::{AppError, AppResult};
use orakel_domain::DiscoveredResource;
use tracing::debug;

/// Discovery catalog reading the API server's group/resource listing.
#[derive(Clone)]
pub struct KubeDiscoveryCatalog {
    client: Client,
}

impl KubeDiscoveryCatalog {
    /// Creates a catalog over a configured cluster client.
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DiscoveryCatalog for KubeDiscoveryCatalog {
    async fn discover_resources(&self) -> AppResult<Vec<DiscoveredResource>> {
        let discovery = Discovery::new(self.client.clone())
            .run()
            .await
            .map_err(|error| AppError::Discovery(format!("API discovery failed: {error}")))?;

        let resources: Vec<DiscoveredResource> = discovery
            .groups_alphabetical()
            .into_iter()
            .flat_map(|group| group.recommended_resources())
            .map(|(resource, _capabilities)| DiscoveredResource {
                group: resource.group,
                version: resource.version,
                kind: resource.kind,
                plural: resource.plural,
            })
            .collect();

        debug!(resources = resources.len(), "ran cluster API discovery");
        Ok(resources)
    }
}
