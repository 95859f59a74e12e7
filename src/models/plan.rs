//! Plan model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A proposed social gathering with capacity, schedule and category tags
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub location: String,
    pub date: DateTime<Utc>,
    /// Free-text tags; insertion order is preserved for display.
    pub categories: Vec<String>,
    pub max_participants: u32,
    pub creator_id: Uuid,
    /// Logically a set; the creator is never listed here.
    pub participants: Vec<Uuid>,
    pub status: PlanStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanStatus {
    Active,
    Cancelled,
    Completed,
}

impl std::fmt::Display for PlanStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlanStatus::Active => write!(f, "active"),
            PlanStatus::Cancelled => write!(f, "cancelled"),
            PlanStatus::Completed => write!(f, "completed"),
        }
    }
}

impl Plan {
    /// Only active plans are eligible for discovery and join/leave
    pub fn is_active(&self) -> bool {
        self.status == PlanStatus::Active
    }

    pub fn is_participant(&self, user_id: Uuid) -> bool {
        self.participants.contains(&user_id)
    }

    pub fn is_creator(&self, user_id: Uuid) -> bool {
        self.creator_id == user_id
    }

    /// The creator does not count against capacity
    pub fn has_capacity(&self) -> bool {
        (self.participants.len() as u32) < self.max_participants
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlanRequest {
    pub title: String,
    pub description: String,
    pub location: String,
    pub date: DateTime<Utc>,
    pub categories: Vec<String>,
    pub max_participants: u32,
    pub creator_id: Uuid,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePlanRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub categories: Option<Vec<String>>,
    pub max_participants: Option<u32>,
    pub status: Option<PlanStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn sample_plan() -> Plan {
        let now = Utc::now();
        Plan {
            id: 1,
            title: "Concierto en el parque".to_string(),
            description: "Música en vivo".to_string(),
            location: "Madrid".to_string(),
            date: now + Duration::days(7),
            categories: vec!["Música".to_string()],
            max_participants: 4,
            creator_id: Uuid::new_v4(),
            participants: vec![],
            status: PlanStatus::Active,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_status_serde_roundtrip() {
        let json = serde_json::to_string(&PlanStatus::Active).unwrap();
        assert_eq!(json, "\"active\"");
        let status: PlanStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(status, PlanStatus::Cancelled);
    }

    #[test]
    fn test_capacity_excludes_creator() {
        let mut plan = sample_plan();
        assert!(plan.has_capacity());

        plan.participants = (0..4).map(|_| Uuid::new_v4()).collect();
        assert!(!plan.has_capacity());
    }

    #[test]
    fn test_participant_checks() {
        let mut plan = sample_plan();
        let user = Uuid::new_v4();
        assert!(!plan.is_participant(user));

        plan.participants.push(user);
        assert!(plan.is_participant(user));
        assert!(plan.is_creator(plan.creator_id));
        assert!(!plan.is_creator(user));
    }
}
