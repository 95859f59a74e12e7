//! Invitation storage collaborator

use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use super::ApiClient;
use crate::models::{CreateInvitationRequest, Invitation, InvitationStatus};
use crate::utils::errors::{QuedadaError, Result};

#[derive(Debug, Serialize)]
struct SetStatusRequest {
    status: InvitationStatus,
}

#[derive(Debug, Clone)]
pub struct InvitationApi {
    client: ApiClient,
}

impl InvitationApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// List pending invitations addressed to the user
    pub async fn list_pending_for_user(&self, user_id: Uuid) -> Result<Vec<Invitation>> {
        debug!(user_id = %user_id, "Listing pending invitations");
        let url = self
            .client
            .endpoint(&format!("users/{}/invitations", user_id))?;
        let response = self
            .client
            .send(self.client.http().get(url).query(&[("status", "pending")]))
            .await?;
        self.client.expect_json(response).await
    }

    /// Fetch a single invitation by id
    pub async fn fetch_invitation(&self, id: i64) -> Result<Invitation> {
        debug!(invitation_id = id, "Fetching invitation");
        let url = self.client.endpoint(&format!("invitations/{}", id))?;
        let response = self.client.send(self.client.http().get(url)).await?;

        match self.client.expect_json(response).await {
            Err(QuedadaError::Api { status: 404, .. }) => {
                Err(QuedadaError::InvitationNotFound { invitation_id: id })
            }
            other => other,
        }
    }

    /// Create a pending invitation
    pub async fn create_invitation(&self, request: &CreateInvitationRequest) -> Result<Invitation> {
        debug!(
            plan_id = request.plan_id,
            receiver_id = %request.receiver_id,
            "Creating invitation"
        );
        let url = self.client.endpoint("invitations")?;
        let response = self
            .client
            .send(self.client.http().post(url).json(request))
            .await?;
        self.client.expect_json(response).await
    }

    /// Set an invitation's status
    pub async fn set_status(&self, id: i64, status: InvitationStatus) -> Result<()> {
        debug!(invitation_id = id, status = %status, "Setting invitation status");
        let url = self.client.endpoint(&format!("invitations/{}/status", id))?;
        let response = self
            .client
            .send(
                self.client
                    .http()
                    .put(url)
                    .json(&SetStatusRequest { status }),
            )
            .await?;

        match self.client.expect_ok(response).await {
            Err(QuedadaError::Api { status: 404, .. }) => {
                Err(QuedadaError::InvitationNotFound { invitation_id: id })
            }
            other => other,
        }
    }
}
