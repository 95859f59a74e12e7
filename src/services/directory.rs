//! Directory service implementation
//!
//! This service owns the discovery filter state and derives the visible
//! plan subset from the shared snapshot. Category and free-text modes are
//! mutually exclusive; with no mode selected nothing is visible, and the
//! unfiltered snapshot is only available through the explicit
//! `all_plans` call.

use tracing::debug;

use crate::models::Plan;
use crate::store::{FilterMode, QueryController, SharedPlanStore};

/// Directory service for plan discovery
#[derive(Debug)]
pub struct DirectoryService {
    store: SharedPlanStore,
    controller: QueryController,
}

impl DirectoryService {
    /// Create a new DirectoryService instance
    pub fn new(store: SharedPlanStore) -> Self {
        Self {
            store,
            controller: QueryController::new(),
        }
    }

    /// Currently active filter mode
    pub fn mode(&self) -> &FilterMode {
        self.controller.mode()
    }

    /// Select a category filter; clears any free-text query
    pub fn set_category(&mut self, label: impl Into<String>) {
        self.controller.set_category(label);
    }

    /// Select a free-text query; clears any category. An empty query
    /// resets to no filter.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.controller.set_query(text);
    }

    /// Drop any active filter
    pub fn clear_filter(&mut self) {
        self.controller.clear();
    }

    /// The visible ordered subset for the active mode, derived from the
    /// current snapshot. Re-run after any refresh or membership change.
    pub async fn visible_plans(&self) -> Vec<Plan> {
        let store = self.store.read().await;
        let visible: Vec<Plan> = self
            .controller
            .visible(store.all())
            .into_iter()
            .cloned()
            .collect();
        debug!(mode = ?self.controller.mode(), count = visible.len(), "Derived visible plans");
        visible
    }

    /// The full unfiltered snapshot, for callers that explicitly want
    /// everything
    pub async fn all_plans(&self) -> Vec<Plan> {
        let store = self.store.read().await;
        store.all().to_vec()
    }

    /// Look up a single plan in the snapshot
    pub async fn plan(&self, plan_id: i64) -> Option<Plan> {
        let store = self.store.read().await;
        store.get(plan_id).cloned()
    }
}
