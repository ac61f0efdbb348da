use std::io::BufRead;

use crate::cli::Cli;
use crate::error::Result;
use crate::ingest::{DiagnosticSink, IngestReport, Ingestor, ingest_parallel};
use crate::output::{ErrorOutput, ViolationPrinter};
use crate::validator::Validator;
use crate::{EXIT_ERROR, EXIT_SUCCESS};

use super::context::{
    apply_cli_overrides, color_choice_to_mode, load_config, open_input, write_output,
};

#[must_use]
pub fn run_tally(cli: &Cli) -> i32 {
    match run_tally_impl(cli) {
        Ok(_) => EXIT_SUCCESS,
        Err(e) => {
            ErrorOutput::new(color_choice_to_mode(cli.color)).print(&e);
            EXIT_ERROR
        }
    }
}

/// Validate the input and write the per-extension report.
///
/// Nothing is written if the input cannot be read to the end.
///
/// # Errors
/// Returns an error for unreadable input, invalid configuration, or a report
/// that cannot be written.
pub fn run_tally_impl(cli: &Cli) -> Result<IngestReport> {
    // 1. Load configuration
    let mut config = load_config(cli.config.as_deref(), cli.no_config)?;

    // 2. Apply CLI argument overrides
    apply_cli_overrides(&mut config, cli);
    config.validate()?;

    // 3. Compile the validator once for the whole run
    let validator = Validator::with_max_uuid_version(config.validation.max_uuid_version)?;

    // 4. Open the input
    let reader = open_input(&cli.input)?;
    let source = cli.input.display().to_string();

    // 5. Validate and aggregate
    let mut sink = ViolationPrinter::stderr(
        cli.verbose > 0,
        cli.quiet,
        color_choice_to_mode(cli.color),
    );
    let report = ingest(reader, &source, validator, config.ingest.jobs, &mut sink)?;
    tracing::info!(
        lines = report.summary.lines,
        accepted = report.summary.accepted,
        rejected = report.summary.rejected,
        unloadable = report.summary.unloadable,
        extensions = report.aggregate.len(),
        "input processed"
    );

    // 6. Format and write the report
    let output = config
        .output
        .format
        .formatter(config.output.sort)
        .format(&report)?;
    write_output(cli.output.as_deref(), &output)?;

    Ok(report)
}

/// Run the driver sequentially (`jobs == 1`) or on a rayon pool.
///
/// # Errors
/// Returns an error if the reader fails or the thread pool cannot be built.
pub fn ingest<R: BufRead, S: DiagnosticSink + ?Sized>(
    reader: R,
    source: &str,
    validator: Validator,
    jobs: usize,
    sink: &mut S,
) -> Result<IngestReport> {
    if jobs == 1 {
        let mut ingestor = Ingestor::new(validator);
        ingestor.ingest_reader(reader, source, sink)?;
        return Ok(ingestor.finish());
    }

    let pool = rayon::ThreadPoolBuilder::new().num_threads(jobs).build()?;
    ingest_parallel(reader, source, &validator, &pool, sink)
}

#[cfg(test)]
#[path = "tally_tests.rs"]
mod tests;
