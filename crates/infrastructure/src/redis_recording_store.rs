//! Redis-protocol recording store (Valkey compatible).

use async_trait::async_trait;
use orakel_application::RecordingStore;
use orakel_core::{AppError, AppResult};
use redis::AsyncCommands;

/// Redis implementation of the recording store port.
#[derive(Clone)]
pub struct RedisRecordingStore {
    client: redis::Client,
}

impl RedisRecordingStore {
    /// Creates a store adapter with a configured Redis client.
    #[must_use]
    pub fn new(client: redis::Client) -> Self {
        Self { client }
    }

    /// Verifies the store answers `PING`.
    pub async fn ping(&self) -> AppResult<()> {
        let mut connection = self.connection().await?;
        let response = connection
            .ping::<String>()
            .await
            .map_err(|error| AppError::CacheFetch(format!("redis ping failed: {error}")))?;

        if !response.eq_ignore_ascii_case("pong") {
            return Err(AppError::CacheFetch(format!(
                "unexpected redis ping response: {response}"
            )));
        }

        Ok(())
    }

    async fn connection(&self) -> AppResult<redis::aio::MultiplexedConnection> {
        self.client
            .get_multiplexed_async_connection()
            .await
            .map_err(|error| AppError::CacheFetch(format!("failed to connect to redis: {error}")))
    }
}

#[async_trait]
impl RecordingStore for RedisRecordingStore {
    async fn get_entry(&self, key: &str) -> AppResult<Option<String>> {
        let key = key.to_lowercase();
        let mut connection = self.connection().await?;

        let payload: Option<Vec<u8>> = connection.get(key.as_str()).await.map_err(|error| {
            AppError::CacheFetch(format!("failed to read recording entry '{key}': {error}"))
        })?;

        payload
            .map(|bytes| decode_payload(key.as_str(), bytes))
            .transpose()
    }
}

fn decode_payload(key: &str, bytes: Vec<u8>) -> AppResult<String> {
    String::from_utf8(bytes).map_err(|error| {
        AppError::Decode(format!("recording entry '{key}' is not valid UTF-8: {error}"))
    })
}

#[cfg(test)]
mod tests {
    use orakel_core::AppError;

    use super::decode_payload;

    #[test]
    fn decode_payload_accepts_utf8() {
        let decoded = decode_payload(
            "recording:shop:ab12:baseline",
            br#"{"type":"baseline"}"#.to_vec(),
        );
        assert_eq!(decoded.unwrap_or_default(), r#"{"type":"baseline"}"#);
    }

    #[test]
    fn decode_payload_rejects_invalid_utf8() {
        let decoded = decode_payload("recording:shop:ab12:baseline", vec![0xff, 0xfe, 0x00]);
        assert!(matches!(decoded, Err(AppError::Decode(_))));
    }
}
