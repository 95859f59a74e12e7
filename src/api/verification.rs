//! Identity verification collaborator
//!
//! One-shot lookup of legal name data by national id, used during
//! registration. The provider's contract is consumed as-is; this module
//! only handles HTTP client setup, response parsing and error mapping.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::Settings;
use crate::utils::errors::{QuedadaError, Result, VerificationError};
use crate::utils::logging::log_verification_lookup;

/// Verification API response envelope
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VerificationResponse {
    pub ok: bool,
    pub result: Option<IdentityRecord>,
}

/// Legal identity data returned for a national id
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityRecord {
    pub first_name: String,
    pub last_name: String,
    pub birth_date: Option<String>,
    pub nationality: Option<String>,
}

/// Client for the national id verification provider
#[derive(Debug, Clone)]
pub struct VerificationApi {
    client: Client,
    settings: Settings,
}

impl VerificationApi {
    /// Create a new VerificationApi instance
    pub fn new(settings: Settings) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.verification.timeout_seconds))
            .user_agent("Quedada-Core/0.1")
            .build()
            .map_err(QuedadaError::Transport)?;

        Ok(Self { client, settings })
    }

    /// Look up legal name data by national id
    pub async fn lookup_by_national_id(&self, national_id: &str) -> Result<IdentityRecord> {
        debug!("Looking up national id");

        let url = format!("{}/lookup", self.settings.verification.api_url);
        let response = self
            .client
            .get(&url)
            .query(&[("national_id", national_id)])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    QuedadaError::Verification(VerificationError::Timeout)
                } else if e.is_connect() {
                    QuedadaError::Verification(VerificationError::ServiceUnavailable)
                } else {
                    QuedadaError::Verification(VerificationError::RequestFailed(e.to_string()))
                }
            })?;

        if response.status().as_u16() == 404 {
            log_verification_lookup(false, None);
            return Err(QuedadaError::Verification(VerificationError::NotFound));
        }

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(QuedadaError::Verification(VerificationError::RequestFailed(
                format!("HTTP {}: {}", status, error_text),
            )));
        }

        let envelope: VerificationResponse = response.json().await.map_err(|e| {
            QuedadaError::Verification(VerificationError::InvalidResponse(e.to_string()))
        })?;

        if !envelope.ok {
            return Err(QuedadaError::Verification(VerificationError::InvalidResponse(
                "Verification API returned ok: false".to_string(),
            )));
        }

        match envelope.result {
            Some(record) => {
                log_verification_lookup(true, Some(&record.first_name));
                Ok(record)
            }
            None => {
                log_verification_lookup(false, None);
                Err(QuedadaError::Verification(VerificationError::NotFound))
            }
        }
    }

    /// Check if identity verification is enabled
    pub fn is_enabled(&self) -> bool {
        self.settings.features.identity_verification
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_deserialization() {
        let json = r#"{"ok": true, "result": {"firstName": "Ana", "lastName": "García", "birthDate": "1990-04-02", "nationality": "ES"}}"#;
        let response: VerificationResponse = serde_json::from_str(json).unwrap();
        assert!(response.ok);
        assert_eq!(response.result.unwrap().first_name, "Ana");
    }

    #[test]
    fn test_response_no_result() {
        let json = r#"{"ok": true, "result": null}"#;
        let response: VerificationResponse = serde_json::from_str(json).unwrap();
        assert!(response.ok);
        assert!(response.result.is_none());
    }
}
