//! Invitation model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A directed, stateful request for one user to join another's plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invitation {
    pub id: i64,
    pub plan_id: i64,
    pub sender_id: Uuid,
    pub receiver_id: Uuid,
    pub message: String,
    pub status: InvitationStatus,
    pub created_at: DateTime<Utc>,
}

/// Invitation lifecycle; `Pending` is the only non-terminal state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvitationStatus {
    Pending,
    Accepted,
    Rejected,
}

impl std::fmt::Display for InvitationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvitationStatus::Pending => write!(f, "pending"),
            InvitationStatus::Accepted => write!(f, "accepted"),
            InvitationStatus::Rejected => write!(f, "rejected"),
        }
    }
}

impl InvitationStatus {
    /// Only `pending -> accepted` and `pending -> rejected` are legal
    pub fn can_transition_to(&self, target: InvitationStatus) -> bool {
        matches!(
            (self, target),
            (
                InvitationStatus::Pending,
                InvitationStatus::Accepted | InvitationStatus::Rejected
            )
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateInvitationRequest {
    pub plan_id: i64,
    pub sender_id: Uuid,
    pub receiver_id: Uuid,
    pub message: String,
}
