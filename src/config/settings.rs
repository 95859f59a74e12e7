//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};

/// Main configuration structure for the client core
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub api: ApiConfig,
    pub verification: VerificationConfig,
    pub images: ImageConfig,
    pub search: SearchConfig,
    pub logging: LoggingConfig,
    pub features: FeaturesConfig,
}

/// Backend API configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
    /// Bounded retries for transport failures; invariant errors are never retried.
    pub max_retries: u32,
    pub retry_backoff_ms: u64,
}

/// Identity verification API configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VerificationConfig {
    pub api_url: String,
    pub timeout_seconds: u64,
}

/// Image upload configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ImageConfig {
    pub upload_url: String,
    pub max_bytes: usize,
}

/// Search and discovery configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Minimum prefix length for profile username search
    pub profile_min_prefix_len: usize,
    /// Upper bound on profile search results
    pub profile_max_results: u32,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file_path: String,
    pub max_files: u32,
}

/// Feature flags configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FeaturesConfig {
    pub identity_verification: bool,
    pub image_upload: bool,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("QUEDADA"))
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::QuedadaError> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "https://api.quedada.app".to_string(),
                timeout_seconds: 10,
                max_retries: 2,
                retry_backoff_ms: 250,
            },
            verification: VerificationConfig {
                api_url: "https://id.quedada.app".to_string(),
                timeout_seconds: 5,
            },
            images: ImageConfig {
                upload_url: "https://images.quedada.app/upload".to_string(),
                max_bytes: 5 * 1024 * 1024,
            },
            search: SearchConfig {
                profile_min_prefix_len: 2,
                profile_max_results: 20,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: "/var/log/quedada".to_string(),
                max_files: 5,
            },
            features: FeaturesConfig {
                identity_verification: true,
                image_upload: true,
            },
        }
    }
}
