//! Image upload collaborator
//!
//! Uploads base64-encoded image data to the CDN and returns a stable
//! public URL.

use std::time::Duration;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::Settings;
use crate::utils::errors::{QuedadaError, Result};

#[derive(Debug, Serialize)]
struct UploadRequest {
    data: String,
    content_type: String,
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    url: String,
}

/// Client for the image CDN upload endpoint
#[derive(Debug, Clone)]
pub struct ImageApi {
    client: Client,
    settings: Settings,
}

impl ImageApi {
    /// Create a new ImageApi instance
    pub fn new(settings: Settings) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.api.timeout_seconds))
            .user_agent("Quedada-Core/0.1")
            .build()
            .map_err(QuedadaError::Transport)?;

        Ok(Self { client, settings })
    }

    /// Upload raw image bytes, returning the public URL
    pub async fn upload(&self, bytes: &[u8], content_type: &str) -> Result<String> {
        if bytes.is_empty() {
            return Err(QuedadaError::Validation("image data is empty".to_string()));
        }
        if bytes.len() > self.settings.images.max_bytes {
            return Err(QuedadaError::Validation(format!(
                "image too large: {} > {} bytes",
                bytes.len(),
                self.settings.images.max_bytes
            )));
        }

        debug!(size = bytes.len(), content_type = content_type, "Uploading image");

        let body = UploadRequest {
            data: BASE64.encode(bytes),
            content_type: content_type.to_string(),
        };

        let response = self
            .client
            .post(&self.settings.images.upload_url)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(QuedadaError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let uploaded: UploadResponse = response.json().await?;
        info!(url = %uploaded.url, "Image uploaded");
        Ok(uploaded.url)
    }

    /// Check if image upload is enabled
    pub fn is_enabled(&self) -> bool {
        self.settings.features.image_upload
    }
}
