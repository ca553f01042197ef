//! Demographics loader.
//!
//! Reads the header, resolves the schema, then converts every data line.
//! A line that fails conversion is dropped whole and its line number is
//! reported; it never reaches the record set with default values.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::{
    config::RunConfig,
    error::{CountyError, CountyResult},
    field::{FieldKind, NumericField},
    parser::{parse_float_prefix, parse_int_prefix, read_line, split_fields},
    record::CountyRecord,
    schema::Schema,
    types::LineNo,
};

/// Result of a completed load.
#[derive(Debug, Clone)]
pub struct LoadReport {
    pub records: Vec<CountyRecord>,
    /// Line numbers (header is line 1) of rows that were dropped.
    pub skipped: Vec<LineNo>,
}

pub fn load_demographics(path: impl AsRef<Path>, config: &RunConfig) -> CountyResult<LoadReport> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        log::debug!("open {} failed: {e}", path.display());
        CountyError::CannotOpen { what: "demographics", path: path.display().to_string() }
    })?;
    load_from_reader(BufReader::new(file), config)
}

pub fn load_from_reader<R: BufRead>(mut reader: R, config: &RunConfig) -> CountyResult<LoadReport> {
    let mut buf = Vec::new();

    let header = match read_line(&mut reader, &mut buf)? {
        Some(line) => line,
        None => return Err(CountyError::EmptyDataset),
    };
    let headers = split_fields(&header, config.data_delimiter);
    let schema = Schema::resolve(&headers)?;
    log::debug!("schema resolved: {:?}", schema.columns());

    let mut records = Vec::with_capacity(config.capacity_hint);
    let mut skipped = Vec::new();
    let mut line_no: LineNo = 1;

    while let Some(line) = read_line(&mut reader, &mut buf)? {
        line_no += 1;
        match parse_row(&line, line_no, &schema, config.data_delimiter) {
            Ok(record) => records.push(record),
            Err(e) => {
                log::debug!("{e}");
                skipped.push(line_no);
            }
        }
    }

    log::info!("{} records loaded, {} rows skipped", records.len(), skipped.len());
    Ok(LoadReport { records, skipped })
}

/// Convert one data line. Any missing column or failed conversion is a
/// `MalformedRow` for the whole line.
pub fn parse_row(
    line:      &str,
    line_no:   LineNo,
    schema:    &Schema,
    delimiter: char,
) -> CountyResult<CountyRecord> {
    let malformed = || CountyError::MalformedRow { line: line_no };

    let fields = split_fields(line, delimiter);
    if fields.len() < schema.min_width() {
        return Err(malformed());
    }

    let raw = |field: NumericField| fields[schema.index_of(field)].as_str();
    let pct = |field: NumericField| {
        debug_assert_eq!(field.kind(), FieldKind::Percent);
        parse_float_prefix(raw(field)).ok_or_else(malformed)
    };
    let int = |field: NumericField| {
        debug_assert_eq!(field.kind(), FieldKind::Integer);
        parse_int_prefix(raw(field)).ok_or_else(malformed)
    };

    Ok(CountyRecord {
        county:             fields[schema.county].clone(),
        state:              fields[schema.state].clone(),
        edu_bachelors:      pct(NumericField::EduBachelors)?,
        edu_hs:             pct(NumericField::EduHighSchool)?,
        eth_ai:             pct(NumericField::EthAmericanIndian)?,
        eth_asian:          pct(NumericField::EthAsian)?,
        eth_black:          pct(NumericField::EthBlack)?,
        eth_hisp:           pct(NumericField::EthHispanic)?,
        eth_nhpi:           pct(NumericField::EthPacificIslander)?,
        eth_2more:          pct(NumericField::EthTwoOrMore)?,
        eth_white:          pct(NumericField::EthWhite)?,
        eth_white_non_hisp: pct(NumericField::EthWhiteNonHispanic)?,
        income_median:      int(NumericField::IncomeMedian)?,
        income_percap:      int(NumericField::IncomePerCapita)?,
        income_poverty:     pct(NumericField::IncomePoverty)?,
        pop_2014:           int(NumericField::Population2014)?,
        active:             true,
    })
}
