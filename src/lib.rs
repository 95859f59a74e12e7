//! Quedada client core
//!
//! Client-side core of the Quedada social planning app: the plan
//! directory with category and relevance-ranked free-text search, and
//! membership management under capacity and duplicate-participation
//! invariants. The backend store of record stays authoritative; this
//! library holds a per-session snapshot and talks to the backend over
//! JSON/HTTPS.

pub mod api;
pub mod config;
pub mod models;
pub mod search;
pub mod services;
pub mod store;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{QuedadaError, Result};

// Re-export main components for easy access
pub use models::{Invitation, InvitationStatus, Plan, PlanStatus, Profile};
pub use services::ServiceFactory;
pub use store::{FilterMode, PlanStore, QueryController};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
