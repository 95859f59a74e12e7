//! In-memory plan record store
//!
//! The store holds the latest known snapshot of plan records fetched from
//! the backend. It is a cache, not a source of truth: the backend remains
//! authoritative and the snapshot is refreshed by explicit fetch calls.
//! Record ids are unique within the store at all times.

use tracing::{debug, warn};

use crate::models::Plan;
use crate::utils::errors::{QuedadaError, Result};

/// Snapshot cache of plan records, keyed by plan id
#[derive(Debug, Default)]
pub struct PlanStore {
    records: Vec<Plan>,
}

impl PlanStore {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Replace the entire known set after a full fetch.
    ///
    /// The input is assumed authoritative; if the backend ever returns a
    /// duplicated id the later record wins.
    pub fn replace_all(&mut self, records: Vec<Plan>) {
        let mut deduped: Vec<Plan> = Vec::with_capacity(records.len());
        for record in records {
            if let Some(existing) = deduped.iter_mut().find(|p| p.id == record.id) {
                warn!(plan_id = record.id, "Duplicate plan id in fetch result, keeping latest");
                *existing = record;
            } else {
                deduped.push(record);
            }
        }

        debug!(count = deduped.len(), "Replaced plan snapshot");
        self.records = deduped;
    }

    /// Replace exactly one record with the result of applying `updater`
    /// to the previous value.
    ///
    /// A missing id surfaces as `PlanNotFound` rather than a silent no-op,
    /// so mutations against a stale or removed id cannot go unnoticed.
    /// The store is left unchanged in that case.
    pub fn patch_one<F>(&mut self, id: i64, updater: F) -> Result<&Plan>
    where
        F: FnOnce(&Plan) -> Plan,
    {
        let slot = self
            .records
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(QuedadaError::PlanNotFound { plan_id: id })?;

        let mut updated = updater(slot);
        // Identity is immutable; a misbehaving updater must not be able to
        // break the unique-id invariant.
        updated.id = slot.id;
        *slot = updated;

        debug!(plan_id = id, "Patched plan record");
        Ok(slot)
    }

    /// Insert a newly created record, replacing any stale copy with the same id
    pub fn insert(&mut self, record: Plan) {
        if let Some(existing) = self.records.iter_mut().find(|p| p.id == record.id) {
            *existing = record;
        } else {
            self.records.push(record);
        }
    }

    /// Remove a record after a backend delete; missing ids are tolerated
    pub fn remove(&mut self, id: i64) {
        self.records.retain(|p| p.id != id);
    }

    pub fn get(&self, id: i64) -> Option<&Plan> {
        self.records.iter().find(|p| p.id == id)
    }

    /// The full unfiltered snapshot, in fetch order
    pub fn all(&self) -> &[Plan] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
