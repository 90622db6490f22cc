//! boundq Client Implementation

use crate::error::{Result, SdkError};
use crate::types::{Offered, ServiceStats};
use reqwest::{Client, StatusCode, Url};
use std::time::Duration;

const TIMEOUT: Duration = Duration::from_secs(5);

/// boundq HTTP client
///
/// # Example
///
/// ```no_run
/// use boundq_sdk::QueueClient;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = QueueClient::new("http://127.0.0.1:9527")?;
/// let stats = client.stats().await?;
/// println!("{} / {}", stats.size, stats.capacity);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct QueueClient {
    client: Client,
    base: Url,
    stats: Url,
}

impl QueueClient {
    /// Create a client for the server at `url` (e.g. `http://127.0.0.1:9527`)
    pub fn new(url: impl AsRef<str>) -> Result<Self> {
        let url = url.as_ref();
        let base = Url::parse(url).map_err(|e| SdkError::InvalidUrl(format!("{}: {}", url, e)))?;
        let stats = base
            .join("/stats")
            .map_err(|e| SdkError::InvalidUrl(format!("{}: {}", url, e)))?;

        let client = Client::builder()
            .connect_timeout(TIMEOUT)
            .timeout(TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            base,
            stats,
        })
    }

    /// Offer a value
    pub async fn offer(&self, value: i64) -> Result<Offered> {
        self.offer_raw(&value.to_string()).await
    }

    /// Offer `payload` verbatim; the server decides whether it is an integer.
    ///
    /// A payload the server cannot parse comes back as [`SdkError::Rejected`].
    pub async fn offer_raw(&self, payload: &str) -> Result<Offered> {
        let response = self
            .client
            .post(self.base.clone())
            .body(payload.to_string())
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => Ok(Offered::Accepted),
            StatusCode::SERVICE_UNAVAILABLE => Ok(Offered::Full),
            StatusCode::BAD_REQUEST => Err(SdkError::Rejected {
                status: StatusCode::BAD_REQUEST.as_u16(),
                message: response.text().await?,
            }),
            other => Err(SdkError::UnexpectedStatus(other.as_u16())),
        }
    }

    /// Take the head value, or `None` when the queue is empty
    pub async fn poll(&self) -> Result<Option<i64>> {
        let response = self.client.get(self.base.clone()).send().await?;

        match response.status() {
            StatusCode::OK => {
                let body = response.text().await?;
                body.parse::<i64>()
                    .map(Some)
                    .map_err(|_| SdkError::InvalidBody(body))
            }
            StatusCode::SERVICE_UNAVAILABLE => Ok(None),
            other => Err(SdkError::UnexpectedStatus(other.as_u16())),
        }
    }

    /// Fetch server counters
    pub async fn stats(&self) -> Result<ServiceStats> {
        let response = self.client.get(self.stats.clone()).send().await?;

        match response.status() {
            StatusCode::OK => Ok(response.json().await?),
            other => Err(SdkError::UnexpectedStatus(other.as_u16())),
        }
    }
}
