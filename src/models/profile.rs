//! Profile model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user's social-facing data, 1:1 with an external identity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub user_id: Uuid,
    pub username: String,
    pub bio: Option<String>,
    pub hobbies: Vec<String>,
    pub languages: Vec<String>,
    pub country: Option<String>,
    pub gender: Option<String>,
    /// Fixed-length numeric string when present
    pub phone: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProfileRequest {
    pub user_id: Uuid,
    pub username: String,
    pub bio: Option<String>,
    pub hobbies: Vec<String>,
    pub languages: Vec<String>,
    pub country: Option<String>,
    pub gender: Option<String>,
    pub phone: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    pub username: Option<String>,
    pub bio: Option<String>,
    pub hobbies: Option<Vec<String>>,
    pub languages: Option<Vec<String>>,
    pub country: Option<String>,
    pub gender: Option<String>,
    pub phone: Option<String>,
    pub image_url: Option<String>,
}
