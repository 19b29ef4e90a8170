//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

// Only depended on to enable its Kubernetes version feature for `kube`.
use k8s_openapi as _;

mod in_memory_recording_store;
mod kube_discovery_catalog;
mod kube_resource_lister;
mod redis_recording_store;

pub use in_memory_recording_store::InMemoryRecordingStore;
pub use kube_discovery_catalog::KubeDiscoveryCatalog;
pub use kube_resource_lister::KubeResourceLister;
pub use redis_recording_store::RedisRecordingStore;
