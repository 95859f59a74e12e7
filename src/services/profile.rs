//! Profile service implementation
//!
//! This service handles user registration (idempotent per external
//! identity), profile updates, username prefix search, and the one-shot
//! national id verification used during registration.

use tracing::{debug, info};
use uuid::Uuid;

use crate::api::{IdentityRecord, ImageApi, ProfileApi, VerificationApi};
use crate::config::Settings;
use crate::models::{CreateProfileRequest, Profile, UpdateProfileRequest};
use crate::utils::errors::{QuedadaError, Result};

/// Expected length of a phone number, digits only
const PHONE_LEN: usize = 10;

/// Profile service for managing user-facing profile data
#[derive(Debug, Clone)]
pub struct ProfileService {
    profile_api: ProfileApi,
    verification_api: VerificationApi,
    image_api: ImageApi,
    settings: Settings,
}

impl ProfileService {
    /// Create a new ProfileService instance
    pub fn new(
        profile_api: ProfileApi,
        verification_api: VerificationApi,
        image_api: ImageApi,
        settings: Settings,
    ) -> Self {
        Self {
            profile_api,
            verification_api,
            image_api,
            settings,
        }
    }

    /// Register a profile or return the existing one.
    ///
    /// At most one profile exists per `user_id`; the backend upserts on
    /// that key, so a double-submit during onboarding is harmless.
    pub async fn register_or_get_profile(&self, request: CreateProfileRequest) -> Result<Profile> {
        validate_profile_fields(&request.username, request.phone.as_deref())?;

        if let Some(existing) = self.profile_api.fetch_profile(request.user_id).await? {
            info!(user_id = %existing.user_id, "Profile already exists, returning existing profile");
            return Ok(existing);
        }

        let profile = self.profile_api.create_profile(&request).await?;
        info!(user_id = %profile.user_id, username = %profile.username, "New profile registered");
        Ok(profile)
    }

    /// Get a profile by user id
    pub async fn get_profile(&self, user_id: Uuid) -> Result<Option<Profile>> {
        debug!(user_id = %user_id, "Getting profile");
        self.profile_api.fetch_profile(user_id).await
    }

    /// Update the caller's own profile
    pub async fn update_profile(
        &self,
        user_id: Uuid,
        patch: UpdateProfileRequest,
    ) -> Result<Profile> {
        if let Some(username) = &patch.username {
            validate_profile_fields(username, patch.phone.as_deref())?;
        } else if let Some(phone) = &patch.phone {
            validate_phone(phone)?;
        }

        let profile = self.profile_api.update_profile(user_id, &patch).await?;
        info!(user_id = %user_id, "Profile updated");
        Ok(profile)
    }

    /// Search profiles by username prefix, bounded by configuration
    pub async fn search_by_username_prefix(&self, prefix: &str) -> Result<Vec<Profile>> {
        debug!(prefix = %prefix, "Searching profiles by username prefix");

        if prefix.len() < self.settings.search.profile_min_prefix_len {
            return Err(QuedadaError::Validation(format!(
                "search prefix must be at least {} characters",
                self.settings.search.profile_min_prefix_len
            )));
        }

        self.profile_api
            .search_by_username_prefix(prefix, self.settings.search.profile_max_results)
            .await
    }

    /// Look up legal identity data by national id during registration.
    /// Returns `None` when verification is disabled by configuration.
    pub async fn verify_national_id(&self, national_id: &str) -> Result<Option<IdentityRecord>> {
        if !self.verification_api.is_enabled() {
            debug!("Identity verification disabled, skipping lookup");
            return Ok(None);
        }

        if national_id.trim().is_empty() {
            return Err(QuedadaError::Validation(
                "national id must not be empty".to_string(),
            ));
        }

        let record = self
            .verification_api
            .lookup_by_national_id(national_id)
            .await?;
        Ok(Some(record))
    }

    /// Upload a profile image and return its public URL
    pub async fn upload_profile_image(&self, bytes: &[u8], content_type: &str) -> Result<String> {
        if !self.image_api.is_enabled() {
            return Err(QuedadaError::ServiceUnavailable(
                "image upload is disabled".to_string(),
            ));
        }
        self.image_api.upload(bytes, content_type).await
    }
}

/// Validate username and optional phone
fn validate_profile_fields(username: &str, phone: Option<&str>) -> Result<()> {
    if username.trim().is_empty() {
        return Err(QuedadaError::Validation(
            "username must not be empty".to_string(),
        ));
    }
    if let Some(phone) = phone {
        validate_phone(phone)?;
    }
    Ok(())
}

/// Phone numbers are fixed-length and numeric when present
fn validate_phone(phone: &str) -> Result<()> {
    if phone.len() != PHONE_LEN || !phone.chars().all(|c| c.is_ascii_digit()) {
        return Err(QuedadaError::Validation(format!(
            "phone must be exactly {} digits",
            PHONE_LEN
        )));
    }
    Ok(())
}
