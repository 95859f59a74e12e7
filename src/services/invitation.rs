//! Invitation service implementation
//!
//! This service handles plan invitations: creating them, listing pending
//! ones, and resolving them. An invitation is sent by a user who belongs
//! to the plan; accepting it appends the sender into the target plan's
//! participant set, so the membership invariants are enforced through the
//! same join path as a direct join.

use tracing::{debug, info};
use uuid::Uuid;

use crate::api::InvitationApi;
use crate::models::{CreateInvitationRequest, Invitation, InvitationStatus};
use crate::services::membership::MembershipService;
use crate::store::SharedPlanStore;
use crate::utils::errors::{QuedadaError, Result};

/// Invitation service for directed join requests
#[derive(Debug, Clone)]
pub struct InvitationService {
    invitation_api: InvitationApi,
    membership: MembershipService,
    store: SharedPlanStore,
}

impl InvitationService {
    /// Create a new InvitationService instance
    pub fn new(
        invitation_api: InvitationApi,
        membership: MembershipService,
        store: SharedPlanStore,
    ) -> Self {
        Self {
            invitation_api,
            membership,
            store,
        }
    }

    /// List pending invitations addressed to the user
    pub async fn list_pending(&self, user_id: Uuid) -> Result<Vec<Invitation>> {
        debug!(user_id = %user_id, "Listing pending invitations");
        self.invitation_api.list_pending_for_user(user_id).await
    }

    /// Invite a user to a plan the sender belongs to
    pub async fn invite(
        &self,
        plan_id: i64,
        sender_id: Uuid,
        receiver_id: Uuid,
        message: String,
    ) -> Result<Invitation> {
        if sender_id == receiver_id {
            return Err(QuedadaError::Validation(
                "cannot invite yourself".to_string(),
            ));
        }

        {
            let store = self.store.read().await;
            let plan = store
                .get(plan_id)
                .ok_or(QuedadaError::PlanNotFound { plan_id })?;

            if !plan.is_creator(sender_id) && !plan.is_participant(sender_id) {
                return Err(QuedadaError::PermissionDenied(format!(
                    "user {} does not belong to plan {}",
                    sender_id, plan_id
                )));
            }
        }

        let invitation = self
            .invitation_api
            .create_invitation(&CreateInvitationRequest {
                plan_id,
                sender_id,
                receiver_id,
                message,
            })
            .await?;

        info!(
            invitation_id = invitation.id,
            plan_id = plan_id,
            receiver_id = %receiver_id,
            "Invitation sent"
        );
        Ok(invitation)
    }

    /// Accept a pending invitation.
    ///
    /// Only the receiver may resolve it, and only from `pending`. The
    /// sender is appended to the plan's participants before the status
    /// flips, so a full plan leaves the invitation pending.
    pub async fn accept(&self, invitation_id: i64, acting_user: Uuid) -> Result<Invitation> {
        let invitation = self.resolvable(invitation_id, acting_user, InvitationStatus::Accepted).await?;

        match self
            .membership
            .join(invitation.plan_id, invitation.sender_id)
            .await
        {
            Ok(_) => {}
            // The sender got into the plan some other way in the meantime;
            // the invitation can still be resolved.
            Err(QuedadaError::AlreadyJoined { .. }) => {}
            Err(e) => return Err(e),
        }

        self.invitation_api
            .set_status(invitation_id, InvitationStatus::Accepted)
            .await?;

        info!(invitation_id = invitation_id, plan_id = invitation.plan_id, "Invitation accepted");
        Ok(Invitation {
            status: InvitationStatus::Accepted,
            ..invitation
        })
    }

    /// Reject a pending invitation
    pub async fn reject(&self, invitation_id: i64, acting_user: Uuid) -> Result<Invitation> {
        let invitation = self.resolvable(invitation_id, acting_user, InvitationStatus::Rejected).await?;

        self.invitation_api
            .set_status(invitation_id, InvitationStatus::Rejected)
            .await?;

        info!(invitation_id = invitation_id, "Invitation rejected");
        Ok(Invitation {
            status: InvitationStatus::Rejected,
            ..invitation
        })
    }

    /// Fetch the invitation and check that `acting_user` may move it to
    /// `target`
    async fn resolvable(
        &self,
        invitation_id: i64,
        acting_user: Uuid,
        target: InvitationStatus,
    ) -> Result<Invitation> {
        let invitation = self.invitation_api.fetch_invitation(invitation_id).await?;

        if invitation.receiver_id != acting_user {
            return Err(QuedadaError::PermissionDenied(format!(
                "user {} is not the receiver of invitation {}",
                acting_user, invitation_id
            )));
        }

        if !invitation.status.can_transition_to(target) {
            return Err(QuedadaError::InvalidStateTransition {
                from: invitation.status.to_string(),
                to: target.to_string(),
            });
        }

        Ok(invitation)
    }
}
