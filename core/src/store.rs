//! In-memory record store and its active set.
//!
//! RULE: Only store.rs touches `CountyRecord::active`.
//! Records are never added or removed after load, and a cleared flag is
//! never set again, so the active set only shrinks within a run.

use crate::{
    command::Comparison,
    field::NumericField,
    record::CountyRecord,
    types::PopulationSum,
};

pub struct RecordStore {
    records: Vec<CountyRecord>,
}

impl RecordStore {
    pub fn new(records: Vec<CountyRecord>) -> Self {
        Self { records }
    }

    /// Number of loaded records, active or not.
    pub fn loaded_count(&self) -> usize {
        self.records.len()
    }

    pub fn active(&self) -> impl Iterator<Item = &CountyRecord> {
        self.records.iter().filter(|r| r.active)
    }

    pub fn active_count(&self) -> usize {
        self.active().count()
    }

    // ── Filters ────────────────────────────────────────────────

    /// Keep only active records whose state equals `state` exactly.
    /// Returns the number still active.
    pub fn retain_state(&mut self, state: &str) -> usize {
        self.retain(|r| r.state == state)
    }

    /// Keep only active records whose `field` passes `cmp` against
    /// `threshold`. Returns the number still active.
    pub fn retain_numeric(&mut self, field: NumericField, cmp: Comparison, threshold: f64) -> usize {
        self.retain(|r| cmp.keeps(field.value(r), threshold))
    }

    fn retain(&mut self, mut keep: impl FnMut(&CountyRecord) -> bool) -> usize {
        let mut remaining = 0;
        for record in self.records.iter_mut().filter(|r| r.active) {
            if keep(&*record) {
                remaining += 1;
            } else {
                record.active = false;
            }
        }
        remaining
    }

    // ── Aggregates ─────────────────────────────────────────────

    pub fn population_total(&self) -> PopulationSum {
        self.active().map(|r| PopulationSum::from(r.pop_2014)).sum()
    }

    /// Sum of `pop_2014 * field / 100` over the active set.
    pub fn sub_population(&self, field: NumericField) -> f64 {
        self.active().map(|r| r.weighted(field.value(r))).sum()
    }

    /// Share of the active population covered by `field`, in percent.
    /// `None` when the active population is zero.
    pub fn percentage(&self, field: NumericField) -> Option<f64> {
        let total = self.population_total();
        if total == 0 {
            return None;
        }
        Some(100.0 * self.sub_population(field) / total as f64)
    }
}
