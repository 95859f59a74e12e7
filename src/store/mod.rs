//! Client-side state management
//!
//! This module holds the in-memory plan snapshot and the discovery filter
//! state. One store instance exists per app session; services share it
//! through `SharedPlanStore`.

pub mod query;
pub mod records;

use std::sync::Arc;

use tokio::sync::RwLock;

pub use query::{FilterMode, QueryController};
pub use records::PlanStore;

/// Shared handle to the session's plan store.
///
/// Locks are never held across backend calls: services compute against a
/// snapshot, await the backend, then re-acquire to commit the confirmed
/// record.
pub type SharedPlanStore = Arc<RwLock<PlanStore>>;

/// Create a fresh shared store for a new app session
pub fn shared_store() -> SharedPlanStore {
    Arc::new(RwLock::new(PlanStore::new()))
}
