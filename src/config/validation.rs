//! Configuration validation module
//!
//! This module provides validation functions for the client configuration
//! to ensure all required settings are properly configured.

use super::Settings;
use crate::utils::errors::{QuedadaError, Result};

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_api_config(&settings.api)?;
    validate_verification_config(&settings.verification)?;
    validate_image_config(&settings.images)?;
    validate_search_config(&settings.search)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate backend API configuration
fn validate_api_config(config: &super::ApiConfig) -> Result<()> {
    if config.base_url.is_empty() {
        return Err(QuedadaError::Config("API base URL is required".to_string()));
    }

    url::Url::parse(&config.base_url)
        .map_err(|e| QuedadaError::Config(format!("Invalid API base URL: {}", e)))?;

    if config.timeout_seconds == 0 {
        return Err(QuedadaError::Config(
            "API timeout must be greater than 0".to_string(),
        ));
    }

    Ok(())
}

/// Validate identity verification configuration
fn validate_verification_config(config: &super::VerificationConfig) -> Result<()> {
    if config.api_url.is_empty() {
        return Err(QuedadaError::Config(
            "Verification API URL is required".to_string(),
        ));
    }

    if config.timeout_seconds == 0 {
        return Err(QuedadaError::Config(
            "Verification timeout must be greater than 0".to_string(),
        ));
    }

    Ok(())
}

/// Validate image upload configuration
fn validate_image_config(config: &super::ImageConfig) -> Result<()> {
    if config.upload_url.is_empty() {
        return Err(QuedadaError::Config(
            "Image upload URL is required".to_string(),
        ));
    }

    if config.max_bytes == 0 {
        return Err(QuedadaError::Config(
            "Image size limit must be greater than 0".to_string(),
        ));
    }

    Ok(())
}

/// Validate search configuration
fn validate_search_config(config: &super::SearchConfig) -> Result<()> {
    if config.profile_min_prefix_len == 0 {
        return Err(QuedadaError::Config(
            "Profile search prefix length must be greater than 0".to_string(),
        ));
    }

    if config.profile_max_results == 0 {
        return Err(QuedadaError::Config(
            "Profile search result limit must be greater than 0".to_string(),
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(QuedadaError::Config("Log level is required".to_string()));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(QuedadaError::Config(format!(
            "Invalid log level: {}. Valid levels: {:?}",
            config.level, valid_levels
        )));
    }

    Ok(())
}
