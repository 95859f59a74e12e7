//! Test data builders for backend wire shapes

use serde_json::{json, Value};
use uuid::Uuid;

/// Wire representation of a plan record
pub fn plan_value(
    id: i64,
    title: &str,
    categories: &[&str],
    creator_id: Uuid,
    participants: &[Uuid],
    max_participants: u32,
) -> Value {
    json!({
        "id": id,
        "title": title,
        "description": format!("{} - descripción", title),
        "location": "Madrid",
        "date": "2030-06-01T18:00:00Z",
        "categories": categories,
        "max_participants": max_participants,
        "creator_id": creator_id,
        "participants": participants,
        "status": "active",
        "created_at": "2026-01-01T10:00:00Z",
        "updated_at": "2026-01-01T10:00:00Z"
    })
}

/// Wire representation of an invitation
pub fn invitation_value(
    id: i64,
    plan_id: i64,
    sender_id: Uuid,
    receiver_id: Uuid,
    status: &str,
) -> Value {
    json!({
        "id": id,
        "plan_id": plan_id,
        "sender_id": sender_id,
        "receiver_id": receiver_id,
        "message": "¿Te apuntas?",
        "status": status,
        "created_at": "2026-01-02T09:00:00Z"
    })
}

/// Wire representation of a profile
pub fn profile_value(user_id: Uuid, username: &str) -> Value {
    json!({
        "user_id": user_id,
        "username": username,
        "bio": "Hola",
        "hobbies": ["senderismo"],
        "languages": ["es", "en"],
        "country": "ES",
        "gender": null,
        "phone": null,
        "image_url": null,
        "created_at": "2026-01-01T10:00:00Z",
        "updated_at": "2026-01-01T10:00:00Z"
    })
}
