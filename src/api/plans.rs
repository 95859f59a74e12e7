//! Plan storage collaborator
//!
//! CRUD wrapper over the hosted plan store. The backend is the
//! authoritative enforcement point for membership invariants: participant
//! updates are conditional on the expected prior count, and a conflict
//! rejection is final.

use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use super::ApiClient;
use crate::models::{CreatePlanRequest, Plan, UpdatePlanRequest};
use crate::utils::errors::{QuedadaError, Result};

/// Conditional participant update payload
#[derive(Debug, Serialize)]
struct SetParticipantsRequest<'a> {
    participants: &'a [Uuid],
    /// Participant count the client observed; the backend rejects the
    /// update with HTTP 409 when its own count differs.
    expected_count: usize,
}

#[derive(Debug, Clone)]
pub struct PlanApi {
    client: ApiClient,
}

impl PlanApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Fetch all active plans
    pub async fn fetch_active_plans(&self) -> Result<Vec<Plan>> {
        debug!("Fetching active plans");
        let url = self.client.endpoint("plans")?;
        let response = self
            .client
            .send(self.client.http().get(url).query(&[("status", "active")]))
            .await?;
        self.client.expect_json(response).await
    }

    /// Fetch a single plan by id
    pub async fn fetch_plan(&self, id: i64) -> Result<Plan> {
        debug!(plan_id = id, "Fetching plan");
        let url = self.client.endpoint(&format!("plans/{}", id))?;
        let response = self.client.send(self.client.http().get(url)).await?;
        self.map_plan_response(id, response).await
    }

    /// Fetch plans the user created or participates in
    pub async fn fetch_plans_for_user(&self, user_id: Uuid) -> Result<Vec<Plan>> {
        debug!(user_id = %user_id, "Fetching plans for user");
        let url = self.client.endpoint(&format!("users/{}/plans", user_id))?;
        let response = self.client.send(self.client.http().get(url)).await?;
        self.client.expect_json(response).await
    }

    /// Create a plan. The backend assigns the id and forces status to
    /// active with an empty participant set.
    pub async fn create_plan(&self, draft: &CreatePlanRequest) -> Result<Plan> {
        debug!(title = %draft.title, "Creating plan");
        let url = self.client.endpoint("plans")?;
        let response = self
            .client
            .send(self.client.http().post(url).json(draft))
            .await?;
        self.client.expect_json(response).await
    }

    /// Apply a partial update to a plan
    pub async fn update_plan(&self, id: i64, patch: &UpdatePlanRequest) -> Result<Plan> {
        debug!(plan_id = id, "Updating plan");
        let url = self.client.endpoint(&format!("plans/{}", id))?;
        let response = self
            .client
            .send(self.client.http().patch(url).json(patch))
            .await?;
        self.map_plan_response(id, response).await
    }

    /// Delete a plan
    pub async fn delete_plan(&self, id: i64) -> Result<()> {
        debug!(plan_id = id, "Deleting plan");
        let url = self.client.endpoint(&format!("plans/{}", id))?;
        let response = self.client.send(self.client.http().delete(url)).await?;

        match self.client.expect_ok(response).await {
            Err(QuedadaError::Api { status: 404, .. }) => {
                Err(QuedadaError::PlanNotFound { plan_id: id })
            }
            other => other,
        }
    }

    /// Replace a plan's participant set, conditional on the count the
    /// client last observed. Returns the updated record as the backend
    /// committed it.
    pub async fn set_participants(
        &self,
        id: i64,
        participants: &[Uuid],
        expected_count: usize,
    ) -> Result<Plan> {
        debug!(
            plan_id = id,
            count = participants.len(),
            expected_count = expected_count,
            "Setting plan participants"
        );
        let url = self.client.endpoint(&format!("plans/{}/participants", id))?;
        let body = SetParticipantsRequest {
            participants,
            expected_count,
        };
        let response = self
            .client
            .send(self.client.http().put(url).json(&body))
            .await?;
        self.map_plan_response(id, response).await
    }

    async fn map_plan_response(&self, id: i64, response: reqwest::Response) -> Result<Plan> {
        match self.client.expect_json(response).await {
            Err(QuedadaError::Api { status: 404, .. }) => {
                Err(QuedadaError::PlanNotFound { plan_id: id })
            }
            other => other,
        }
    }
}
