//! Application services and ports.

#![forbid(unsafe_code)]

mod check_fetcher;
mod check_ports;
mod correlation;
mod recording_ports;
mod recording_service;
mod report_service;
mod resource_mapper;
mod typed_converter;

pub use check_fetcher::{CheckFetcher, CheckKinds};
pub use check_ports::{DiscoveryCatalog, ResourceLister};
pub use correlation::{
    NamespaceCheckContext, NamespaceCheckInfo, WorkloadCheckContext, WorkloadCheckInfo,
    build_namespace_tree, build_workload_list,
};
pub use recording_ports::RecordingStore;
pub use recording_service::RecordingService;
pub use report_service::{HardeningReport, ReportService};
pub use resource_mapper::{DiscoveryCache, ResourceMapper};
pub use typed_converter::convert_all;
