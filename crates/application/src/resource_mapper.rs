//! Kind to API coordinate resolution backed by cluster discovery.

use std::collections::HashMap;
use std::sync::Arc;

use futures::lock::Mutex;
use orakel_core::{AppError, AppResult, NonEmptyString};
use orakel_domain::GroupVersionResource;
use tracing::debug;

use crate::check_ports::DiscoveryCatalog;

#[cfg(test)]
mod tests;

/// Resolved coordinates keyed by lowercase kind name.
///
/// The lock is held while a missing entry is populated, so concurrent first
/// lookups run discovery once and never interleave their writes. Misses are
/// not cached.
#[derive(Default)]
pub struct DiscoveryCache {
    entries: Mutex<HashMap<String, GroupVersionResource>>,
}

impl DiscoveryCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops every cached mapping.
    pub async fn invalidate(&self) {
        self.entries.lock().await.clear();
    }

    /// Returns the number of cached mappings.
    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    /// Returns whether no mapping is cached.
    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}

/// Resolves kind names to group/version/resource coordinates.
#[derive(Clone)]
pub struct ResourceMapper {
    catalog: Arc<dyn DiscoveryCatalog>,
    cache: Arc<DiscoveryCache>,
}

impl ResourceMapper {
    /// Creates a mapper over a discovery catalog and an injected cache.
    #[must_use]
    pub fn new(catalog: Arc<dyn DiscoveryCatalog>, cache: Arc<DiscoveryCache>) -> Self {
        Self { catalog, cache }
    }

    /// Resolves `kind` to the first matching resource in the catalog.
    ///
    /// Matching ignores case and accepts kind or plural names. A mapping is
    /// discovered once and then served from the cache until
    /// [`ResourceMapper::invalidate`] is called.
    pub async fn resolve_gvr(&self, kind: &str) -> AppResult<GroupVersionResource> {
        let kind = NonEmptyString::new(kind.trim())?;
        let cache_key = kind.as_str().to_ascii_lowercase();

        let mut entries = self.cache.entries.lock().await;
        if let Some(gvr) = entries.get(&cache_key) {
            return Ok(gvr.clone());
        }

        let resources = self.catalog.discover_resources().await?;
        let gvr = resources
            .iter()
            .find(|resource| resource.matches(kind.as_str()))
            .map(|resource| resource.to_gvr())
            .ok_or_else(|| AppError::NoMapping(kind.as_str().to_owned()))?;

        debug!(
            kind = %kind.as_str(),
            gvr = %gvr,
            discovered_resources = resources.len(),
            "resolved resource mapping"
        );

        entries.insert(cache_key, gvr.clone());
        Ok(gvr)
    }

    /// Forgets all resolved mappings so the next lookup rediscovers.
    pub async fn invalidate(&self) {
        self.cache.invalidate().await;
    }
}
