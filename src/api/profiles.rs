//! Profile storage collaborator

use tracing::debug;
use uuid::Uuid;

use super::ApiClient;
use crate::models::{CreateProfileRequest, Profile, UpdateProfileRequest};
use crate::utils::errors::{QuedadaError, Result};

#[derive(Debug, Clone)]
pub struct ProfileApi {
    client: ApiClient,
}

impl ProfileApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Fetch a profile by its user id
    pub async fn fetch_profile(&self, user_id: Uuid) -> Result<Option<Profile>> {
        debug!(user_id = %user_id, "Fetching profile");
        let url = self.client.endpoint(&format!("profiles/{}", user_id))?;
        let response = self.client.send(self.client.http().get(url)).await?;

        if response.status().as_u16() == 404 {
            return Ok(None);
        }
        Ok(Some(self.client.expect_json(response).await?))
    }

    /// Create a profile. The backend upserts on `user_id`, so repeated
    /// calls for the same identity return the existing profile.
    pub async fn create_profile(&self, request: &CreateProfileRequest) -> Result<Profile> {
        debug!(user_id = %request.user_id, "Creating profile");
        let url = self.client.endpoint("profiles")?;
        let response = self
            .client
            .send(self.client.http().post(url).json(request))
            .await?;
        self.client.expect_json(response).await
    }

    /// Apply a partial update to a profile
    pub async fn update_profile(
        &self,
        user_id: Uuid,
        patch: &UpdateProfileRequest,
    ) -> Result<Profile> {
        debug!(user_id = %user_id, "Updating profile");
        let url = self.client.endpoint(&format!("profiles/{}", user_id))?;
        let response = self
            .client
            .send(self.client.http().patch(url).json(patch))
            .await?;

        match self.client.expect_json(response).await {
            Err(QuedadaError::Api { status: 404, .. }) => {
                Err(QuedadaError::ProfileNotFound { user_id })
            }
            other => other,
        }
    }

    /// Search profiles whose username starts with the given prefix,
    /// bounded to `limit` results
    pub async fn search_by_username_prefix(
        &self,
        prefix: &str,
        limit: u32,
    ) -> Result<Vec<Profile>> {
        debug!(prefix = %prefix, limit = limit, "Searching profiles by username prefix");
        let url = self.client.endpoint("profiles")?;
        let limit = limit.to_string();
        let response = self
            .client
            .send(
                self.client
                    .http()
                    .get(url)
                    .query(&[("username_prefix", prefix), ("limit", limit.as_str())]),
            )
            .await?;
        self.client.expect_json(response).await
    }
}
