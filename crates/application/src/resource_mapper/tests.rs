use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use orakel_core::{AppError, AppResult};
use orakel_domain::{DiscoveredResource, GroupVersionResource};

use crate::check_ports::DiscoveryCatalog;

use super::{DiscoveryCache, ResourceMapper};

struct FakeDiscoveryCatalog {
    resources: Vec<DiscoveredResource>,
    unreachable: bool,
    calls: AtomicUsize,
}

impl FakeDiscoveryCatalog {
    fn with_resources(resources: Vec<DiscoveredResource>) -> Self {
        Self {
            resources,
            unreachable: false,
            calls: AtomicUsize::new(0),
        }
    }

    fn unreachable() -> Self {
        Self {
            resources: Vec::new(),
            unreachable: true,
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DiscoveryCatalog for FakeDiscoveryCatalog {
    async fn discover_resources(&self) -> AppResult<Vec<DiscoveredResource>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.unreachable {
            return Err(AppError::Discovery("connection refused".to_owned()));
        }

        Ok(self.resources.clone())
    }
}

fn resource(group: &str, version: &str, kind: &str, plural: &str) -> DiscoveredResource {
    DiscoveredResource {
        group: group.to_owned(),
        version: version.to_owned(),
        kind: kind.to_owned(),
        plural: plural.to_owned(),
    }
}

fn check_catalog() -> Arc<FakeDiscoveryCatalog> {
    Arc::new(FakeDiscoveryCatalog::with_resources(vec![
        resource("", "v1", "Pod", "pods"),
        resource(
            "checks.example.io",
            "v1alpha1",
            "NamespaceHardeningCheck",
            "namespacehardeningchecks",
        ),
        resource(
            "checks.example.io",
            "v1alpha1",
            "WorkloadHardeningCheck",
            "workloadhardeningchecks",
        ),
        resource(
            "checks.example.io",
            "v1alpha0",
            "WorkloadHardeningCheck",
            "workloadhardeningchecks",
        ),
    ]))
}

fn mapper_for(catalog: Arc<FakeDiscoveryCatalog>) -> ResourceMapper {
    ResourceMapper::new(catalog, Arc::new(DiscoveryCache::new()))
}

#[tokio::test]
async fn resolve_gvr_returns_first_match_and_caches_it() {
    let catalog = check_catalog();
    let mapper = mapper_for(catalog.clone());

    let first = mapper.resolve_gvr("WorkloadHardeningCheck").await;
    assert!(first.is_ok());
    let second = mapper.resolve_gvr("WorkloadHardeningCheck").await;
    assert!(second.is_ok());

    let expected =
        GroupVersionResource::new("checks.example.io", "v1alpha1", "workloadhardeningchecks");
    assert_eq!(first.unwrap_or_else(|_| unreachable!()), expected);
    assert_eq!(second.unwrap_or_else(|_| unreachable!()), expected);
    assert_eq!(catalog.calls(), 1);
}

#[tokio::test]
async fn resolve_gvr_ignores_case_and_shares_cache_entry() {
    let catalog = check_catalog();
    let mapper = mapper_for(catalog.clone());

    let upper = mapper.resolve_gvr("NamespaceHardeningCheck").await;
    let lower = mapper.resolve_gvr("namespacehardeningcheck").await;
    assert!(upper.is_ok());
    assert!(lower.is_ok());
    assert_eq!(
        upper.unwrap_or_else(|_| unreachable!()),
        lower.unwrap_or_else(|_| unreachable!())
    );
    assert_eq!(catalog.calls(), 1);
}

#[tokio::test]
async fn resolve_gvr_reports_no_mapping_for_unknown_kind() {
    let catalog = check_catalog();
    let mapper = mapper_for(catalog.clone());

    let result = mapper.resolve_gvr("NoSuchKind").await;
    assert!(matches!(result, Err(AppError::NoMapping(kind)) if kind == "NoSuchKind"));

    let retried = mapper.resolve_gvr("NoSuchKind").await;
    assert!(matches!(retried, Err(AppError::NoMapping(_))));
    assert_eq!(catalog.calls(), 2);
}

#[tokio::test]
async fn resolve_gvr_surfaces_discovery_failure() {
    let catalog = Arc::new(FakeDiscoveryCatalog::unreachable());
    let mapper = mapper_for(catalog);

    let result = mapper.resolve_gvr("WorkloadHardeningCheck").await;
    assert!(matches!(result, Err(AppError::Discovery(_))));
}

#[tokio::test]
async fn resolve_gvr_rejects_blank_kind_without_discovery() {
    let catalog = check_catalog();
    let mapper = mapper_for(catalog.clone());

    let result = mapper.resolve_gvr("  ").await;
    assert!(matches!(result, Err(AppError::Validation(_))));
    assert_eq!(catalog.calls(), 0);
}

#[tokio::test]
async fn concurrent_first_lookups_discover_once() {
    let catalog = check_catalog();
    let mapper = mapper_for(catalog.clone());

    let (left, right) = futures::join!(
        mapper.resolve_gvr("WorkloadHardeningCheck"),
        mapper.resolve_gvr("WorkloadHardeningCheck")
    );

    assert!(left.is_ok());
    assert!(right.is_ok());
    assert_eq!(catalog.calls(), 1);
}

#[tokio::test]
async fn invalidate_forces_rediscovery() {
    let catalog = check_catalog();
    let cache = Arc::new(DiscoveryCache::new());
    let mapper = ResourceMapper::new(catalog.clone(), cache.clone());

    assert!(mapper.resolve_gvr("WorkloadHardeningCheck").await.is_ok());
    assert_eq!(cache.len().await, 1);

    mapper.invalidate().await;
    assert!(cache.is_empty().await);

    assert!(mapper.resolve_gvr("WorkloadHardeningCheck").await.is_ok());
    assert_eq!(catalog.calls(), 2);
}
