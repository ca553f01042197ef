//! One county row as loaded from the demographics file.

use serde::{Deserialize, Serialize};

use crate::types::StateCode;

/// A fully converted data row. Rows that fail any numeric conversion never
/// become a `CountyRecord`.
///
/// `active` starts true and is only ever cleared, by `RecordStore` filters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountyRecord {
    pub county: String,
    pub state:  StateCode,

    // ── Education (percent) ──────────────────────
    pub edu_bachelors: f64,
    pub edu_hs:        f64,

    // ── Ethnicity (percent) ──────────────────────
    pub eth_ai:             f64,
    pub eth_asian:          f64,
    pub eth_black:          f64,
    pub eth_hisp:           f64,
    pub eth_nhpi:           f64,
    pub eth_2more:          f64,
    pub eth_white:          f64,
    pub eth_white_non_hisp: f64,

    // ── Income ───────────────────────────────────
    pub income_median:  i32,
    pub income_percap:  i32,
    pub income_poverty: f64,

    // ── Population ───────────────────────────────
    pub pop_2014: i32,

    #[serde(skip_serializing)]
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool { true }

impl CountyRecord {
    /// Estimated head count for a percentage field of this county.
    pub fn weighted(&self, percent: f64) -> f64 {
        f64::from(self.pop_2014) * (percent / 100.0)
    }
}
