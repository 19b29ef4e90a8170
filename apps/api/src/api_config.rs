use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

use orakel_application::CheckKinds;
use orakel_core::AppError;
use orakel_domain::{NAMESPACE_CHECK_KIND, RECORDING_KEY_PREFIX, WORKLOAD_CHECK_KIND};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordingStoreConfig {
    Memory,
    Valkey { url: String },
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub api_host: String,
    pub api_port: u16,
    pub recording_store: RecordingStoreConfig,
    pub recording_key_prefix: String,
    pub report_timeout: Duration,
    pub check_kinds: CheckKinds,
}

impl ApiConfig {
    pub fn load() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let optional = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let api_host = optional("API_HOST").unwrap_or_else(|| "0.0.0.0".to_owned());
        let api_port = optional("API_PORT")
            .map(|value| {
                value
                    .parse::<u16>()
                    .map_err(|error| AppError::Validation(format!("invalid API_PORT: {error}")))
            })
            .transpose()?
            .unwrap_or(8000);

        let recording_store = match optional("RECORDING_STORE")
            .unwrap_or_else(|| "valkey".to_owned())
            .as_str()
        {
            "memory" => RecordingStoreConfig::Memory,
            "valkey" => {
                let url = match optional("VALKEY_URL") {
                    Some(url) => url,
                    None => {
                        let host = optional("VALKEY_HOST").unwrap_or_else(|| "valkey".to_owned());
                        let port = optional("VALKEY_PORT").unwrap_or_else(|| "6379".to_owned());
                        port.parse::<u16>().map_err(|error| {
                            AppError::Validation(format!("invalid VALKEY_PORT: {error}"))
                        })?;
                        format!("redis://{host}:{port}")
                    }
                };
                RecordingStoreConfig::Valkey { url }
            }
            other => {
                return Err(AppError::Validation(format!(
                    "RECORDING_STORE must be either 'valkey' or 'memory', got '{other}'"
                )));
            }
        };

        let recording_key_prefix =
            optional("RECORDING_KEY_PREFIX").unwrap_or_else(|| RECORDING_KEY_PREFIX.to_owned());

        let report_timeout_seconds = optional("REPORT_TIMEOUT_SECONDS")
            .map(|value| {
                value.parse::<u64>().map_err(|error| {
                    AppError::Validation(format!("invalid REPORT_TIMEOUT_SECONDS: {error}"))
                })
            })
            .transpose()?
            .unwrap_or(15);
        if report_timeout_seconds == 0 {
            return Err(AppError::Validation(
                "REPORT_TIMEOUT_SECONDS must be greater than zero".to_owned(),
            ));
        }

        let check_kinds = CheckKinds {
            namespace_check: optional("NAMESPACE_CHECK_KIND")
                .unwrap_or_else(|| NAMESPACE_CHECK_KIND.to_owned()),
            workload_check: optional("WORKLOAD_CHECK_KIND")
                .unwrap_or_else(|| WORKLOAD_CHECK_KIND.to_owned()),
        };

        Ok(Self {
            api_host,
            api_port,
            recording_store,
            recording_key_prefix,
            report_timeout: Duration::from_secs(report_timeout_seconds),
            check_kinds,
        })
    }

    pub fn socket_address(&self) -> Result<SocketAddr, AppError> {
        let host = IpAddr::from_str(&self.api_host).map_err(|error| {
            AppError::Validation(format!("invalid API_HOST '{}': {error}", self.api_host))
        })?;
        Ok(SocketAddr::from((host, self.api_port)))
    }
}

pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}
