use std::time::Duration;

use orakel_application::ReportService;
use orakel_infrastructure::RedisRecordingStore;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub report_service: ReportService,
    pub redis_store: Option<RedisRecordingStore>,
    pub report_timeout: Duration,
}
