//! Discovery filter mode management
//!
//! The query controller owns which discovery filter is active. Category and
//! free-text filtering are mutually exclusive by construction: the mode is
//! a single tagged value, so both can never be set at once.

use tracing::debug;

use crate::models::Plan;
use crate::search;

/// Active discovery filter
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FilterMode {
    /// No filter selected; the visible set is empty until a mode is picked.
    /// Callers wanting everything must ask for the unfiltered snapshot
    /// explicitly.
    #[default]
    None,
    Category(String),
    FreeText(String),
}

/// Owns the active filter mode and derives the visible subset on demand
#[derive(Debug, Default)]
pub struct QueryController {
    mode: FilterMode,
}

impl QueryController {
    pub fn new() -> Self {
        Self {
            mode: FilterMode::None,
        }
    }

    pub fn mode(&self) -> &FilterMode {
        &self.mode
    }

    /// Select a category filter, clearing any active free-text query
    pub fn set_category(&mut self, label: impl Into<String>) {
        let label = label.into();
        debug!(category = %label, "Category filter selected");
        self.mode = FilterMode::Category(label);
    }

    /// Select a free-text query, clearing any active category.
    ///
    /// An empty query resets the mode to `None`; the previous category does
    /// not silently resume.
    pub fn set_query(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text.is_empty() {
            debug!("Free-text query cleared, resetting filter");
            self.mode = FilterMode::None;
        } else {
            debug!(query = %text, "Free-text filter selected");
            self.mode = FilterMode::FreeText(text);
        }
    }

    /// Drop any active filter
    pub fn clear(&mut self) {
        self.mode = FilterMode::None;
    }

    /// Derive the visible ordered subset from the given snapshot.
    ///
    /// Re-invoked by callers whenever the record set changes; the result is
    /// always computed from the snapshot passed in, never cached.
    pub fn visible<'a>(&self, plans: &'a [Plan]) -> Vec<&'a Plan> {
        match &self.mode {
            FilterMode::None => Vec::new(),
            FilterMode::Category(label) => search::filter_by_category(plans, label),
            FilterMode::FreeText(query) => search::search_plans(plans, query),
        }
    }
}
