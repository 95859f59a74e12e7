//! Membership service implementation
//!
//! This service mutates a single plan's participant set under the
//! capacity and duplicate-membership invariants. The in-memory check is
//! an optimistic fast-path only: the backend re-validates the update
//! conditionally and its rejection is authoritative. The local store is
//! never patched before the backend confirms.

use tracing::{info, warn};
use uuid::Uuid;

use crate::api::PlanApi;
use crate::models::Plan;
use crate::store::SharedPlanStore;
use crate::utils::errors::{QuedadaError, Result};
use crate::utils::logging::log_membership_change;

/// Membership service for join/leave operations
#[derive(Debug, Clone)]
pub struct MembershipService {
    plan_api: PlanApi,
    store: SharedPlanStore,
}

impl MembershipService {
    /// Create a new MembershipService instance
    pub fn new(plan_api: PlanApi, store: SharedPlanStore) -> Self {
        Self { plan_api, store }
    }

    /// Join a plan.
    ///
    /// Fails with `PlanNotFound`, `OwnPlan`, `AlreadyJoined` or `PlanFull`
    /// against the current snapshot, then persists through the backend's
    /// conditional update. On any failure the store is left unchanged.
    pub async fn join(&self, plan_id: i64, user_id: Uuid) -> Result<Plan> {
        let (participants, expected_count) = {
            let store = self.store.read().await;
            let plan = store
                .get(plan_id)
                .ok_or(QuedadaError::PlanNotFound { plan_id })?;
            Self::check_joinable(plan, user_id)?;

            let mut next = plan.participants.clone();
            next.push(user_id);
            (next, plan.participants.len())
        };

        let updated = match self
            .plan_api
            .set_participants(plan_id, &participants, expected_count)
            .await
        {
            Ok(plan) => plan,
            Err(QuedadaError::Api { status: 409, .. }) => {
                return Err(self.resolve_join_conflict(plan_id, user_id).await?)
            }
            Err(e) => return Err(e),
        };

        self.commit(updated.clone()).await;
        log_membership_change(plan_id, user_id, true, updated.participants.len());
        Ok(updated)
    }

    /// Leave a plan.
    ///
    /// Fails with `PlanNotFound`, `OwnPlan` or `NotMember`; otherwise
    /// removes the user, persists, and returns the updated record.
    pub async fn leave(&self, plan_id: i64, user_id: Uuid) -> Result<Plan> {
        let (participants, expected_count) = {
            let store = self.store.read().await;
            let plan = store
                .get(plan_id)
                .ok_or(QuedadaError::PlanNotFound { plan_id })?;
            Self::check_leavable(plan, user_id)?;

            let next: Vec<Uuid> = plan
                .participants
                .iter()
                .copied()
                .filter(|p| *p != user_id)
                .collect();
            (next, plan.participants.len())
        };

        let updated = match self
            .plan_api
            .set_participants(plan_id, &participants, expected_count)
            .await
        {
            Ok(plan) => plan,
            Err(QuedadaError::Api { status: 409, .. }) => {
                return Err(self.resolve_leave_conflict(plan_id, user_id).await?)
            }
            Err(e) => return Err(e),
        };

        self.commit(updated.clone()).await;
        log_membership_change(plan_id, user_id, false, updated.participants.len());
        Ok(updated)
    }

    /// Invariant checks for joining, computed against one snapshot
    fn check_joinable(plan: &Plan, user_id: Uuid) -> Result<()> {
        if plan.is_creator(user_id) {
            return Err(QuedadaError::OwnPlan { plan_id: plan.id });
        }
        if !plan.is_active() {
            return Err(QuedadaError::Validation(format!(
                "plan {} is {}, only active plans can be joined",
                plan.id, plan.status
            )));
        }
        if plan.is_participant(user_id) {
            return Err(QuedadaError::AlreadyJoined {
                plan_id: plan.id,
                user_id,
            });
        }
        if !plan.has_capacity() {
            return Err(QuedadaError::PlanFull {
                plan_id: plan.id,
                max_participants: plan.max_participants,
            });
        }
        Ok(())
    }

    /// Invariant checks for leaving
    fn check_leavable(plan: &Plan, user_id: Uuid) -> Result<()> {
        if plan.is_creator(user_id) {
            return Err(QuedadaError::OwnPlan { plan_id: plan.id });
        }
        if !plan.is_participant(user_id) {
            return Err(QuedadaError::NotMember {
                plan_id: plan.id,
                user_id,
            });
        }
        Ok(())
    }

    /// The backend rejected the conditional update: another mutation won
    /// the race. Resync the authoritative record and report the invariant
    /// that actually failed.
    async fn resolve_join_conflict(&self, plan_id: i64, user_id: Uuid) -> Result<QuedadaError> {
        warn!(plan_id = plan_id, user_id = %user_id, "Join rejected by backend, resyncing");
        let fresh = self.plan_api.fetch_plan(plan_id).await?;
        let error = if fresh.is_participant(user_id) {
            QuedadaError::AlreadyJoined { plan_id, user_id }
        } else {
            QuedadaError::PlanFull {
                plan_id,
                max_participants: fresh.max_participants,
            }
        };
        self.commit(fresh).await;
        Ok(error)
    }

    async fn resolve_leave_conflict(&self, plan_id: i64, user_id: Uuid) -> Result<QuedadaError> {
        warn!(plan_id = plan_id, user_id = %user_id, "Leave rejected by backend, resyncing");
        let fresh = self.plan_api.fetch_plan(plan_id).await?;
        let error = if fresh.is_participant(user_id) {
            QuedadaError::ServiceUnavailable(format!(
                "leave of plan {} lost a concurrent update, retry",
                plan_id
            ))
        } else {
            QuedadaError::NotMember { plan_id, user_id }
        };
        self.commit(fresh).await;
        Ok(error)
    }

    /// Commit a backend-confirmed record into the local snapshot
    async fn commit(&self, plan: Plan) {
        let mut store = self.store.write().await;
        store.insert(plan);
        info!(count = store.len(), "Plan snapshot updated after membership change");
    }
}
