//! The query engine: applies commands to the record store, one at a time.
//!
//! EXECUTION RULES:
//!   - Commands run strictly in file order.
//!   - Each command finishes, output included, before the next starts.
//!   - A bad instruction is reported and skipped; it never ends the run.
//!   - Filters only ever narrow the active set.

use std::io::{BufRead, Write};

use serde::Serialize;

use crate::{
    command::{parse_command, Command},
    config::{OutputFormat, RunConfig},
    error::{CountyError, CountyResult},
    event::QueryEvent,
    field::NumericField,
    parser::read_line,
    store::RecordStore,
    types::LineNo,
};

/// One applied command, kept for the run summary.
#[derive(Debug, Clone, Serialize)]
pub struct CommandLogEntry {
    pub line:       LineNo,
    pub verb:       &'static str,
    pub event_type: &'static str,
}

/// Counts for one processed operations file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScriptSummary {
    pub executed: usize,
    pub rejected: usize,
}

pub struct QueryEngine {
    config: RunConfig,
    store:  RecordStore,
    log:    Vec<CommandLogEntry>,
}

impl QueryEngine {
    pub fn new(store: RecordStore, config: RunConfig) -> Self {
        Self { config, store, log: Vec::new() }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn command_log(&self) -> &[CommandLogEntry] {
        &self.log
    }

    /// Apply one parsed command to the active set.
    pub fn apply(&mut self, command: &Command) -> CountyResult<QueryEvent> {
        log::debug!("apply {command:?}");
        let event = match command {
            Command::Display => QueryEvent::Displayed {
                records: self.store.active().cloned().collect(),
            },
            Command::FilterState { state } => QueryEvent::StateFiltered {
                remaining: self.store.retain_state(state),
                state:     state.clone(),
            },
            Command::Filter { field, cmp, threshold } => QueryEvent::NumericFiltered {
                remaining: self.store.retain_numeric(*field, *cmp, *threshold),
                field:     *field,
                cmp:       *cmp,
                threshold: *threshold,
            },
            Command::PopulationTotal => QueryEvent::PopulationTotal {
                total: self.store.population_total(),
            },
            Command::Population { field } => QueryEvent::SubPopulation {
                field:      *field,
                population: self.store.sub_population(subfield("population", *field)?),
            },
            Command::Percent { field } => QueryEvent::Percentage {
                field:   *field,
                percent: self.store.percentage(subfield("percent", *field)?),
            },
        };
        Ok(event)
    }

    /// Parse and apply one instruction line. Blank lines yield `Ok(None)`.
    pub fn execute_line(&mut self, line_no: LineNo, line: &str) -> CountyResult<Option<QueryEvent>> {
        let Some(command) = parse_command(line, line_no, self.config.command_delimiter)? else {
            return Ok(None);
        };
        let event = self.apply(&command)?;
        self.log.push(CommandLogEntry {
            line:       line_no,
            verb:       command.verb(),
            event_type: event.event_type(),
        });
        Ok(Some(event))
    }

    /// Run every line of an operations file. Results go to `out`, one
    /// diagnostic line per rejected instruction goes to `err`. `out` is
    /// flushed before each diagnostic so the two streams stay in line order.
    pub fn run_script<R: BufRead, O: Write, E: Write>(
        &mut self,
        mut reader: R,
        out:        &mut O,
        err:        &mut E,
    ) -> CountyResult<ScriptSummary> {
        let mut summary = ScriptSummary::default();
        let mut buf = Vec::new();
        let mut line_no: LineNo = 0;
        while let Some(line) = read_line(&mut reader, &mut buf)? {
            line_no += 1;
            match self.execute_line(line_no, &line) {
                Ok(Some(event)) => {
                    emit(out, &event, self.config.output)?;
                    summary.executed += 1;
                }
                Ok(None) => {}
                Err(e) if e.is_recoverable() => {
                    log::debug!("line {line_no} rejected: {e}");
                    out.flush()?;
                    writeln!(err, "Error: {e}")?;
                    summary.rejected += 1;
                }
                Err(e) => return Err(e),
            }
        }
        log::info!(
            "operations done: {} executed, {} rejected, {} of {} records active",
            summary.executed,
            summary.rejected,
            self.store.active_count(),
            self.store.loaded_count()
        );
        Ok(summary)
    }
}

/// Write one event in the configured format.
pub fn emit<W: Write>(out: &mut W, event: &QueryEvent, format: OutputFormat) -> CountyResult<()> {
    match format {
        OutputFormat::Text => write!(out, "{event}")?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, event)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Only population subfields can be weighted. The parser already enforces
/// this; commands built in code are checked here.
fn subfield(verb: &'static str, field: NumericField) -> CountyResult<NumericField> {
    if field.is_population_subfield() {
        Ok(field)
    } else {
        log::warn!("{verb}: field '{}' is not a population subfield", field.name());
        Err(CountyError::NotPopulationSubfield { verb, field: field.name() })
    }
}
