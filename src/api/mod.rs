//! Backend API collaborators
//!
//! This module contains the JSON-over-HTTPS clients the core talks to:
//! plan storage, profile storage, invitations, identity verification and
//! image upload. All requests carry an explicit timeout and transport
//! failures get a bounded retry with backoff before being surfaced.

pub mod images;
pub mod invitations;
pub mod plans;
pub mod profiles;
pub mod verification;

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::config::ApiConfig;
use crate::utils::errors::{QuedadaError, Result};

pub use images::ImageApi;
pub use invitations::InvitationApi;
pub use plans::PlanApi;
pub use profiles::ProfileApi;
pub use verification::{IdentityRecord, VerificationApi};

/// Shared HTTP client for the backend store of record
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
    max_retries: u32,
    retry_backoff: Duration,
}

impl ApiClient {
    /// Create a new ApiClient from configuration
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent("Quedada-Core/0.1")
            .build()
            .map_err(QuedadaError::Transport)?;

        let base_url = Url::parse(&config.base_url)?;

        Ok(Self {
            http,
            base_url,
            max_retries: config.max_retries,
            retry_backoff: Duration::from_millis(config.retry_backoff_ms),
        })
    }

    /// Resolve an endpoint path against the configured base URL
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }

    pub fn http(&self) -> &Client {
        &self.http
    }

    /// Send a request, retrying transport failures up to the configured
    /// bound with linear backoff. Non-2xx responses are returned as-is;
    /// invariant rejections from the backend must never be retried.
    pub async fn send(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response> {
        let mut attempt = 0;
        loop {
            let prepared = request
                .try_clone()
                .ok_or_else(|| QuedadaError::Validation("request body is not retryable".to_string()))?;

            match prepared.send().await {
                Ok(response) => return Ok(response),
                Err(e) if attempt < self.max_retries => {
                    attempt += 1;
                    warn!(
                        attempt = attempt,
                        max_retries = self.max_retries,
                        error = %e,
                        "Transport failure, retrying"
                    );
                    tokio::time::sleep(self.retry_backoff * attempt).await;
                }
                Err(e) => return Err(QuedadaError::Transport(e)),
            }
        }
    }

    /// Deserialize a 2xx response body, mapping non-2xx statuses to an
    /// API error the caller can interpret
    pub async fn expect_json<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(QuedadaError::Api {
                status: status.as_u16(),
                message,
            });
        }

        debug!(status = status.as_u16(), "Backend response received");
        Ok(response.json().await?)
    }

    /// Check a 2xx response without a body of interest
    pub async fn expect_ok(&self, response: reqwest::Response) -> Result<()> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(QuedadaError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(())
    }
}
