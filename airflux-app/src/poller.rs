//! HTTP client for the local sensor bridge.

use airflux_schemas::report::SensorReport;

/// Errors from the bridge fetch path. A network failure and a body that
/// is not a report both land in `Request`; a reachable bridge answering
/// with a non-2xx status is kept distinct for logging.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("sensor bridge returned status {status}")]
    Status { status: u16 },
}

/// Client for a single bridge endpoint.
pub struct SensorEndpoint {
    client: reqwest::Client,
    url: String,
}

impl SensorEndpoint {
    /// Create a client for the given endpoint URL,
    /// e.g. `http://localhost:8888/api/sensors`.
    pub fn new(url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }

    /// One GET of the endpoint. No retry and no backoff; the caller
    /// decides what a failure means for the display.
    pub async fn fetch(&self) -> Result<SensorReport, FetchError> {
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }
        Ok(response.json::<SensorReport>().await?)
    }
}
