//! Query events: the result of every applied command.
//!
//! Handlers return events; rendering is the caller's choice. `Display`
//! gives the human-readable text, serde gives one JSON object per event.

use std::fmt;

use serde::Serialize;

use crate::{
    command::Comparison,
    field::NumericField,
    record::CountyRecord,
    types::{PopulationSum, StateCode},
};

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QueryEvent {
    // ── Load ───────────────────────────────────────
    Loaded {
        records: usize,
        skipped: usize,
    },

    // ── Display ────────────────────────────────────
    Displayed {
        records: Vec<CountyRecord>,
    },

    // ── Filters ────────────────────────────────────
    StateFiltered {
        state:     StateCode,
        remaining: usize,
    },
    NumericFiltered {
        field:     NumericField,
        cmp:       Comparison,
        threshold: f64,
        remaining: usize,
    },

    // ── Aggregates ─────────────────────────────────
    PopulationTotal {
        total: PopulationSum,
    },
    SubPopulation {
        field:      NumericField,
        population: f64,
    },
    /// `percent` is `None` when the active population is zero.
    Percentage {
        field:   NumericField,
        percent: Option<f64>,
    },
}

impl QueryEvent {
    /// Stable name of the variant, matching the serde tag.
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::Loaded { .. }          => "loaded",
            Self::Displayed { .. }       => "displayed",
            Self::StateFiltered { .. }   => "state_filtered",
            Self::NumericFiltered { .. } => "numeric_filtered",
            Self::PopulationTotal { .. } => "population_total",
            Self::SubPopulation { .. }   => "sub_population",
            Self::Percentage { .. }      => "percentage",
        }
    }
}

impl fmt::Display for QueryEvent {
    /// Every line written ends in a newline; an empty display writes nothing.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loaded { records, .. } => writeln!(f, "{records} records loaded"),
            Self::Displayed { records } => {
                for record in records {
                    write_block(f, record)?;
                }
                Ok(())
            }
            Self::StateFiltered { state, remaining } => {
                writeln!(f, "Filter: state == {state} ({remaining} entries)")
            }
            Self::NumericFiltered { field, cmp, threshold, remaining } => writeln!(
                f,
                "Filter: {} {} {threshold:.6} ({remaining} entries)",
                field.name(),
                cmp.as_str()
            ),
            Self::PopulationTotal { total } => writeln!(f, "2014 population: {total}"),
            Self::SubPopulation { field, population } => {
                writeln!(f, "2014 {} population: {population:.6}", field.name())
            }
            Self::Percentage { field, percent: Some(p) } => {
                writeln!(f, "2014 {} percentage: {p:.6}", field.name())
            }
            Self::Percentage { field, percent: None } => {
                writeln!(f, "2014 {} percentage: 0", field.name())
            }
        }
    }
}

const SECTION: &str = "        ";
const ITEM: &str = "                ";

fn write_block(f: &mut fmt::Formatter<'_>, r: &CountyRecord) -> fmt::Result {
    writeln!(f, "{}, {}", r.county, r.state)?;
    writeln!(f, "{SECTION}Population: {}", r.pop_2014)?;
    writeln!(f, "{SECTION}Education")?;
    writeln!(f, "{ITEM}>= High School: {:.6}%", r.edu_hs)?;
    writeln!(f, "{ITEM}>= Bachelor's: {:.6}%", r.edu_bachelors)?;
    writeln!(f, "{SECTION}Ethnicity Percentages")?;
    writeln!(f, "{ITEM}American Indian and Alaska Native: {:.6}%", r.eth_ai)?;
    writeln!(f, "{ITEM}Asian Alone: {:.6}%", r.eth_asian)?;
    writeln!(f, "{ITEM}Black Alone: {:.6}%", r.eth_black)?;
    writeln!(f, "{ITEM}Hispanic or Latino: {:.6}%", r.eth_hisp)?;
    writeln!(f, "{ITEM}Native Hawaiian and Other Pacific Islander Alone: {:.6}%", r.eth_nhpi)?;
    writeln!(f, "{ITEM}Two or More Races: {:.6}%", r.eth_2more)?;
    writeln!(f, "{ITEM}White Alone: {:.6}%", r.eth_white)?;
    writeln!(f, "{ITEM}White Alone, not Hispanic or Latino: {:.6}%", r.eth_white_non_hisp)?;
    writeln!(f, "{SECTION}Income")?;
    writeln!(f, "{ITEM}Median Household: {}", r.income_median)?;
    writeln!(f, "{ITEM}Per Capita: {}", r.income_percap)?;
    writeln!(f, "{ITEM}Below Poverty Level: {:.6}%", r.income_poverty)?;
    writeln!(f)
}
