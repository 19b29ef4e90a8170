use std::sync::Arc;

use orakel_application::{
    CheckFetcher, DiscoveryCache, RecordingService, RecordingStore, ReportService, ResourceMapper,
};
use orakel_core::AppError;
use orakel_infrastructure::{
    InMemoryRecordingStore, KubeDiscoveryCatalog, KubeResourceLister, RedisRecordingStore,
};
use tracing::{info, warn};

use crate::api_config::{ApiConfig, RecordingStoreConfig};
use crate::state::AppState;

use super::kube::build_kube_client;
use super::redis::build_redis_client;

pub async fn build_app_state(config: &ApiConfig) -> Result<AppState, AppError> {
    let kube_client = build_kube_client().await?;

    let mapper = ResourceMapper::new(
        Arc::new(KubeDiscoveryCatalog::new(kube_client.clone())),
        Arc::new(DiscoveryCache::new()),
    );
    let fetcher = CheckFetcher::new(
        mapper,
        Arc::new(KubeResourceLister::new(kube_client)),
        config.check_kinds.clone(),
    );

    let (recording_store, redis_store) = build_recording_store(config).await?;
    let recording_service =
        RecordingService::with_key_prefix(recording_store, config.recording_key_prefix.clone());

    Ok(AppState {
        report_service: ReportService::new(fetcher, recording_service),
        redis_store,
        report_timeout: config.report_timeout,
    })
}

async fn build_recording_store(
    config: &ApiConfig,
) -> Result<(Arc<dyn RecordingStore>, Option<RedisRecordingStore>), AppError> {
    match &config.recording_store {
        RecordingStoreConfig::Memory => {
            warn!("using in-memory recording store, reports will carry no recordings");
            Ok((Arc::new(InMemoryRecordingStore::new()), None))
        }
        RecordingStoreConfig::Valkey { url } => {
            let store = RedisRecordingStore::new(build_redis_client(url)?);
            store.ping().await.map_err(|error| {
                AppError::Internal(format!("failed to reach recording store: {error}"))
            })?;
            info!("connected to recording store");

            Ok((Arc::new(store.clone()), Some(store)))
        }
    }
}
