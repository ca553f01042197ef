//! county-ops: run an operations file against a county demographics file.
//!
//! Usage:
//!   county-ops <demographics_file> <operations_file>
//!   county-ops data.csv ops.txt --json
//!   county-ops data.csv ops.txt --config run.json

use anyhow::{bail, Result};
use county_core::{
    config::{OutputFormat, RunConfig},
    session::run_session,
};
use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

const USAGE: &str = "Call with 2 arguments: <demographics_file> <operations_file>";

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    // StdoutLock is line-buffered, so results and diagnostics interleave in order.
    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();

    match run(&args, &mut out, &mut err) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let _ = out.flush();
            let _ = writeln!(err, "Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Parsed command line.
#[derive(Debug, PartialEq, Eq)]
struct Invocation<'a> {
    demographics: &'a str,
    operations:   &'a str,
    config:       Option<&'a str>,
    json:         bool,
}

fn parse_args(args: &[String]) -> Result<Invocation<'_>> {
    let mut positional = Vec::new();
    let mut config = None;
    let mut json = false;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => match iter.next() {
                Some(path) => config = Some(path.as_str()),
                None => bail!("--config requires a path"),
            },
            "--json" => json = true,
            flag if flag.starts_with("--") => bail!("Unknown flag '{flag}'. {USAGE}"),
            other => positional.push(other),
        }
    }

    let [demographics, operations] = positional.as_slice() else {
        bail!(USAGE);
    };
    Ok(Invocation { demographics, operations, config, json })
}

/// Everything after argument collection. Any `Err` is a fatal run error
/// and maps to a failure exit status.
fn run<O: Write, E: Write>(args: &[String], out: &mut O, err: &mut E) -> Result<()> {
    let invocation = parse_args(args)?;

    let mut config = match invocation.config {
        Some(path) => RunConfig::load(path)?,
        None => RunConfig::default(),
    };
    if invocation.json {
        config = config.with_output(OutputFormat::Json);
    }
    log::debug!("config: {config:?}");

    let summary = run_session(&config, invocation.demographics, invocation.operations, out, err)?;
    log::info!(
        "run complete: {} loaded, {} rows skipped, {} commands executed, {} rejected",
        summary.loaded,
        summary.skipped_rows,
        summary.executed,
        summary.rejected
    );
    Ok(())
}
