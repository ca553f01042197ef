//! The numeric field catalogue.
//!
//! Every numeric column the loader converts, the `filter` command compares,
//! and the `population` / `percent` commands weight is listed here exactly
//! once. Handlers never match on field names themselves.

use serde::{Deserialize, Serialize};

use crate::record::CountyRecord;

pub const COUNTY_COLUMN: &str = "County";
pub const STATE_COLUMN:  &str = "State";

pub const NUMERIC_FIELD_COUNT: usize = 14;

/// How the raw text of a column is converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Percent,
    Integer,
}

/// The 14 numeric columns of a county row.
/// NEVER reorder: `ALL` order is the schema resolution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericField {
    EduBachelors,
    EduHighSchool,
    EthAmericanIndian,
    EthAsian,
    EthBlack,
    EthHispanic,
    EthPacificIslander,
    EthTwoOrMore,
    EthWhite,
    EthWhiteNonHispanic,
    IncomeMedian,
    IncomePerCapita,
    IncomePoverty,
    Population2014,
}

impl NumericField {
    pub const ALL: [NumericField; NUMERIC_FIELD_COUNT] = [
        Self::EduBachelors,
        Self::EduHighSchool,
        Self::EthAmericanIndian,
        Self::EthAsian,
        Self::EthBlack,
        Self::EthHispanic,
        Self::EthPacificIslander,
        Self::EthTwoOrMore,
        Self::EthWhite,
        Self::EthWhiteNonHispanic,
        Self::IncomeMedian,
        Self::IncomePerCapita,
        Self::IncomePoverty,
        Self::Population2014,
    ];

    /// Canonical logical name, as it appears in a dataset header.
    pub fn name(&self) -> &'static str {
        self.names()[0]
    }

    /// Every spelling accepted for this field, canonical first.
    pub fn names(&self) -> &'static [&'static str] {
        match self {
            Self::EduBachelors        => &["Education.Bachelor's Degree or Higher"],
            Self::EduHighSchool       => &["Education.High School or Higher"],
            Self::EthAmericanIndian   => &["Ethnicities.American Indian and Alaska Native Alone"],
            Self::EthAsian            => &["Ethnicities.Asian Alone"],
            Self::EthBlack            => &["Ethnicities.Black Alone"],
            Self::EthHispanic         => &["Ethnicities.Hispanic or Latino"],
            Self::EthPacificIslander  => &["Ethnicities.Native Hawaiian and Other Pacific Islander Alone"],
            Self::EthTwoOrMore        => &["Ethnicities.Two or More Races"],
            Self::EthWhite            => &["Ethnicities.White Alone"],
            // A comma-delimited header can only carry the second spelling.
            Self::EthWhiteNonHispanic => &[
                "Ethnicities.White Alone, not Hispanic or Latino",
                "Ethnicities.White Alone not Hispanic or Latino",
            ],
            Self::IncomeMedian        => &["Income.Median Household Income"],
            Self::IncomePerCapita     => &["Income.Per Capita Income"],
            Self::IncomePoverty       => &["Income.Persons Below Poverty Level"],
            Self::Population2014      => &["Population.2014 Population"],
        }
    }

    /// Look a field up by any of its accepted names. Case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|f| f.names().iter().any(|n| *n == name))
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Self::IncomeMedian | Self::IncomePerCapita | Self::Population2014 => FieldKind::Integer,
            _ => FieldKind::Percent,
        }
    }

    /// Percentage fields that can be weighted by population: education,
    /// ethnicity and poverty. Income amounts and population itself are not.
    pub fn is_population_subfield(&self) -> bool {
        !matches!(
            self,
            Self::IncomeMedian | Self::IncomePerCapita | Self::Population2014
        )
    }

    /// Read this field from a record, integers widened to f64.
    pub fn value(&self, record: &CountyRecord) -> f64 {
        match self {
            Self::EduBachelors        => record.edu_bachelors,
            Self::EduHighSchool       => record.edu_hs,
            Self::EthAmericanIndian   => record.eth_ai,
            Self::EthAsian            => record.eth_asian,
            Self::EthBlack            => record.eth_black,
            Self::EthHispanic         => record.eth_hisp,
            Self::EthPacificIslander  => record.eth_nhpi,
            Self::EthTwoOrMore        => record.eth_2more,
            Self::EthWhite            => record.eth_white,
            Self::EthWhiteNonHispanic => record.eth_white_non_hisp,
            Self::IncomeMedian        => f64::from(record.income_median),
            Self::IncomePerCapita     => f64::from(record.income_percap),
            Self::IncomePoverty       => record.income_poverty,
            Self::Population2014      => f64::from(record.pop_2014),
        }
    }
}
