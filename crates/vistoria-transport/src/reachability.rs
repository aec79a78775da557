//! Network reachability probe.
//!
//! The result only drives the advisory offline banner; callers never skip a
//! gateway request because the probe said "offline".

use crate::error::{GatewayError, GatewayResult};
use async_trait::async_trait;
use std::time::Duration;

/// Answers "is the gateway reachable right now?".
#[async_trait]
pub trait Reachability: Send + Sync {
    async fn is_connected(&self) -> bool;
}

/// Probe that issues a `HEAD` against the gateway base URL.
///
/// Any HTTP response, whatever its status, counts as connected; only a
/// transport failure counts as offline.
#[derive(Debug, Clone)]
pub struct HttpReachability {
    probe_url: String,
    client: reqwest::Client,
}

impl HttpReachability {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);

    /// Fails when the probe URL does not parse or the HTTP client cannot be
    /// built.
    pub fn new(probe_url: impl Into<String>, timeout: Duration) -> GatewayResult<Self> {
        let probe_url = probe_url.into();
        reqwest::Url::parse(&probe_url)
            .map_err(|e| GatewayError::InvalidUrl(format!("{probe_url}: {e}")))?;
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::InvalidUrl(format!("{probe_url}: {e}")))?;
        Ok(Self { probe_url, client })
    }
}

#[async_trait]
impl Reachability for HttpReachability {
    async fn is_connected(&self) -> bool {
        match self.client.head(&self.probe_url).send().await {
            Ok(response) => {
                tracing::debug!(status = response.status().as_u16(), "reachability probe answered");
                true
            }
            Err(e) => {
                tracing::warn!(url = %self.probe_url, "reachability probe failed: {e}");
                false
            }
        }
    }
}
