//! Header resolution: logical column names to positions.
//!
//! Resolution happens once per load. A header missing any of the 16
//! required columns fails the whole load; there is no partial schema.

use crate::{
    error::{CountyError, CountyResult},
    field::{NumericField, COUNTY_COLUMN, NUMERIC_FIELD_COUNT, STATE_COLUMN},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    pub county: usize,
    pub state:  usize,
    /// Indexed by `NumericField as usize`.
    numeric:   [usize; NUMERIC_FIELD_COUNT],
    min_width: usize,
}

impl Schema {
    /// Resolve every required column against a parsed header row.
    /// First match wins when a name appears more than once.
    pub fn resolve(headers: &[String]) -> CountyResult<Self> {
        let county = find(headers, &[COUNTY_COLUMN])
            .ok_or(CountyError::MissingColumn { name: COUNTY_COLUMN })?;
        let state = find(headers, &[STATE_COLUMN])
            .ok_or(CountyError::MissingColumn { name: STATE_COLUMN })?;

        let mut numeric = [0; NUMERIC_FIELD_COUNT];
        for field in NumericField::ALL {
            numeric[field as usize] = find(headers, field.names())
                .ok_or(CountyError::MissingColumn { name: field.name() })?;
        }

        let min_width = numeric.iter().chain([&county, &state]).max().map_or(0, |idx| idx + 1);
        Ok(Self { county, state, numeric, min_width })
    }

    pub fn index_of(&self, field: NumericField) -> usize {
        self.numeric[field as usize]
    }

    /// All 16 resolved (column name, position) pairs.
    pub fn columns(&self) -> Vec<(&'static str, usize)> {
        let mut cols = vec![(COUNTY_COLUMN, self.county), (STATE_COLUMN, self.state)];
        cols.extend(NumericField::ALL.iter().map(|f| (f.name(), self.index_of(*f))));
        cols
    }

    /// A row needs at least this many fields to cover every column.
    pub fn min_width(&self) -> usize {
        self.min_width
    }
}

/// Position of the first header equal to any of `names`.
fn find(headers: &[String], names: &[&str]) -> Option<usize> {
    headers.iter().position(|h| names.contains(&h.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn full_header() -> Vec<&'static str> {
        let mut names = vec![COUNTY_COLUMN, STATE_COLUMN];
        names.extend(NumericField::ALL.iter().map(|f| f.name()));
        names
    }

    #[test]
    fn min_width_covers_the_rightmost_required_column() {
        let schema = Schema::resolve(&header(&full_header())).unwrap();
        assert_eq!(schema.min_width(), 16);

        let mut names = full_header();
        names.retain(|n| *n != COUNTY_COLUMN);
        names.push("Extra");
        names.push(COUNTY_COLUMN);
        let schema = Schema::resolve(&header(&names)).unwrap();
        assert_eq!(schema.county, 16);
        assert_eq!(schema.min_width(), 17);
    }
}
