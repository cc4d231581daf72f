use std::error::Error as _;
use std::time::Duration;

use reqwest::Client;
use tracing::{debug, info, warn};

use crate::config::SourceConfig;
use crate::directory::Record;

use super::error::LoadError;
use super::RecordSource;

/// Fetches the record collection with a single GET to a fixed endpoint.
pub struct HttpRecordSource {
    client: Client,
    endpoint: String,
    connect_timeout: Duration,
    request_timeout: Duration,
}

impl HttpRecordSource {
    pub fn new(config: &SourceConfig) -> Result<Self, LoadError> {
        let connect_timeout = config.connect_timeout();
        let request_timeout = config.request_timeout();
        let client = Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(request_timeout)
            .build()
            .map_err(|e| LoadError::Client(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            connect_timeout,
            request_timeout,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn classify(&self, err: reqwest::Error) -> LoadError {
        if err.is_timeout() {
            return self.timeout_error(err.is_connect());
        }
        if err.is_decode() {
            return LoadError::Decode(describe(&err));
        }
        LoadError::Network(format!("Network Error: {}", describe(&err)))
    }

    /// Timeout error naming the limit that actually expired.
    fn timeout_error(&self, while_connecting: bool) -> LoadError {
        if while_connecting {
            LoadError::ConnectTimeout {
                seconds: self.connect_timeout.as_secs(),
            }
        } else {
            LoadError::Timeout {
                seconds: self.request_timeout.as_secs(),
            }
        }
    }
}

impl RecordSource for HttpRecordSource {
    async fn fetch_records(&self) -> Result<Vec<Record>, LoadError> {
        debug!(endpoint = %self.endpoint, "Fetching user records");

        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            warn!(endpoint = %self.endpoint, status = status.as_u16(), "Endpoint returned error status");
            return Err(LoadError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| self.classify(e))?;
        let records: Vec<Record> =
            serde_json::from_slice(&body).map_err(|e| LoadError::Decode(e.to_string()))?;

        info!(count = records.len(), "Fetched user records");
        Ok(records)
    }
}

/// Flatten an error and its sources into one line.
fn describe(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
