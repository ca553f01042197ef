//! A whole run: load the demographics file, then execute the operations file.

use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

use serde::Serialize;

use crate::{
    config::RunConfig,
    engine::{emit, QueryEngine},
    error::{CountyError, CountyResult},
    event::QueryEvent,
    loader::load_demographics,
    store::RecordStore,
};

/// End-of-run counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub loaded:       usize,
    pub skipped_rows: usize,
    pub executed:     usize,
    pub rejected:     usize,
}

/// Execute one full run against the given writers.
///
/// Errors returned from here are fatal: a missing file, an empty dataset,
/// or a missing schema column. Skipped rows and rejected instructions are
/// reported on `err` and counted in the summary instead.
pub fn run_session<O: Write, E: Write>(
    config:       &RunConfig,
    demographics: impl AsRef<Path>,
    operations:   impl AsRef<Path>,
    out:          &mut O,
    err:          &mut E,
) -> CountyResult<RunSummary> {
    let demographics = demographics.as_ref();
    let operations = operations.as_ref();

    // Both inputs must open before any work starts.
    check_readable("demographics", demographics)?;
    check_readable("operations", operations)?;

    let report = load_demographics(demographics, config)?;
    for line in &report.skipped {
        writeln!(err, "Error: {}", CountyError::MalformedRow { line: *line })?;
    }
    let loaded = QueryEvent::Loaded {
        records: report.records.len(),
        skipped: report.skipped.len(),
    };
    emit(out, &loaded, config.output)?;
    out.flush()?;

    let mut summary = RunSummary {
        loaded:       report.records.len(),
        skipped_rows: report.skipped.len(),
        ..RunSummary::default()
    };

    let mut engine = QueryEngine::new(RecordStore::new(report.records), config.clone());
    let ops_file = open("operations", operations)?;
    let script = engine.run_script(BufReader::new(ops_file), out, err)?;
    summary.executed = script.executed;
    summary.rejected = script.rejected;

    out.flush()?;
    Ok(summary)
}

fn open(what: &'static str, path: &Path) -> CountyResult<File> {
    File::open(path).map_err(|e| {
        log::debug!("open {} failed: {e}", path.display());
        CountyError::CannotOpen { what, path: path.display().to_string() }
    })
}

fn check_readable(what: &'static str, path: &Path) -> CountyResult<()> {
    open(what, path).map(drop)
}
