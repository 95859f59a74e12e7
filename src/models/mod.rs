//! Data models module
//!
//! This module contains all data structures used throughout the library

pub mod invitation;
pub mod plan;
pub mod profile;

// Re-export commonly used models
pub use invitation::{CreateInvitationRequest, Invitation, InvitationStatus};
pub use plan::{CreatePlanRequest, Plan, PlanStatus, UpdatePlanRequest};
pub use profile::{CreateProfileRequest, Profile, UpdateProfileRequest};
