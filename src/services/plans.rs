//! Plan service implementation
//!
//! This service handles plan creation, creator-only updates and deletion,
//! input validation, and refreshing the in-memory snapshot from the
//! backend.

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::api::PlanApi;
use crate::models::{CreatePlanRequest, Plan, UpdatePlanRequest};
use crate::store::SharedPlanStore;
use crate::utils::errors::{QuedadaError, Result};
use crate::utils::logging::log_plan_action;

/// Plan service for lifecycle operations
#[derive(Debug, Clone)]
pub struct PlanService {
    plan_api: PlanApi,
    store: SharedPlanStore,
}

impl PlanService {
    /// Create a new PlanService instance
    pub fn new(plan_api: PlanApi, store: SharedPlanStore) -> Self {
        Self { plan_api, store }
    }

    /// Fetch all active plans and replace the local snapshot
    pub async fn refresh(&self) -> Result<usize> {
        debug!("Refreshing plan snapshot");
        let plans = self.plan_api.fetch_active_plans().await?;
        let count = plans.len();

        let mut store = self.store.write().await;
        store.replace_all(plans);
        info!(count = count, "Plan snapshot refreshed");
        Ok(count)
    }

    /// Fetch the plans a user created or participates in; does not touch
    /// the discovery snapshot
    pub async fn plans_for_user(&self, user_id: Uuid) -> Result<Vec<Plan>> {
        debug!(user_id = %user_id, "Fetching plans for user");
        self.plan_api.fetch_plans_for_user(user_id).await
    }

    /// Create a plan after validating the draft. The backend assigns the
    /// id and forces status/participants; the returned record is added to
    /// the local snapshot.
    pub async fn create_plan(&self, draft: CreatePlanRequest) -> Result<Plan> {
        validate_draft(&draft)?;

        let plan = self.plan_api.create_plan(&draft).await?;
        log_plan_action(plan.id, "create", plan.creator_id, None);

        let mut store = self.store.write().await;
        store.insert(plan.clone());
        Ok(plan)
    }

    /// Update a plan. Only the creator may update; the check is advisory
    /// here and enforced again by the backend.
    pub async fn update_plan(
        &self,
        plan_id: i64,
        user_id: Uuid,
        patch: UpdatePlanRequest,
    ) -> Result<Plan> {
        validate_patch(&patch)?;

        {
            let store = self.store.read().await;
            if let Some(plan) = store.get(plan_id) {
                if !plan.is_creator(user_id) {
                    return Err(QuedadaError::PermissionDenied(format!(
                        "only the creator may update plan {}",
                        plan_id
                    )));
                }
            }
        }

        let updated = self.plan_api.update_plan(plan_id, &patch).await?;
        log_plan_action(plan_id, "update", user_id, None);

        let mut store = self.store.write().await;
        match store.patch_one(plan_id, |_| updated.clone()) {
            Ok(_) => {}
            // Not in the discovery snapshot (e.g. a cancelled plan edited
            // from the owner's list); nothing to sync.
            Err(QuedadaError::PlanNotFound { .. }) => {}
            Err(e) => return Err(e),
        }
        Ok(updated)
    }

    /// Delete a plan. Creator-only, advisory check as for updates.
    pub async fn delete_plan(&self, plan_id: i64, user_id: Uuid) -> Result<()> {
        {
            let store = self.store.read().await;
            if let Some(plan) = store.get(plan_id) {
                if !plan.is_creator(user_id) {
                    return Err(QuedadaError::PermissionDenied(format!(
                        "only the creator may delete plan {}",
                        plan_id
                    )));
                }
            }
        }

        self.plan_api.delete_plan(plan_id).await?;
        log_plan_action(plan_id, "delete", user_id, None);

        let mut store = self.store.write().await;
        store.remove(plan_id);
        Ok(())
    }
}

/// Validate a creation draft: non-empty text fields, future date, at least
/// one category, capacity of at least two
fn validate_draft(draft: &CreatePlanRequest) -> Result<()> {
    if draft.title.trim().is_empty() {
        return Err(QuedadaError::Validation("title must not be empty".to_string()));
    }
    if draft.description.trim().is_empty() {
        return Err(QuedadaError::Validation(
            "description must not be empty".to_string(),
        ));
    }
    if draft.location.trim().is_empty() {
        return Err(QuedadaError::Validation(
            "location must not be empty".to_string(),
        ));
    }
    if draft.date <= Utc::now() {
        return Err(QuedadaError::Validation(
            "plan date must be in the future".to_string(),
        ));
    }
    if draft.categories.is_empty() || draft.categories.iter().any(|c| c.trim().is_empty()) {
        return Err(QuedadaError::Validation(
            "at least one non-empty category is required".to_string(),
        ));
    }
    if draft.max_participants < 2 {
        return Err(QuedadaError::Validation(
            "max_participants must be at least 2".to_string(),
        ));
    }
    Ok(())
}

/// Validate an update patch; only set fields are checked
fn validate_patch(patch: &UpdatePlanRequest) -> Result<()> {
    if let Some(title) = &patch.title {
        if title.trim().is_empty() {
            return Err(QuedadaError::Validation("title must not be empty".to_string()));
        }
    }
    if let Some(description) = &patch.description {
        if description.trim().is_empty() {
            return Err(QuedadaError::Validation(
                "description must not be empty".to_string(),
            ));
        }
    }
    if let Some(location) = &patch.location {
        if location.trim().is_empty() {
            return Err(QuedadaError::Validation(
                "location must not be empty".to_string(),
            ));
        }
    }
    if let Some(categories) = &patch.categories {
        if categories.is_empty() || categories.iter().any(|c| c.trim().is_empty()) {
            return Err(QuedadaError::Validation(
                "at least one non-empty category is required".to_string(),
            ));
        }
    }
    if let Some(max) = patch.max_participants {
        if max < 2 {
            return Err(QuedadaError::Validation(
                "max_participants must be at least 2".to_string(),
            ));
        }
    }
    Ok(())
}
