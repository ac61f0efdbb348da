use std::io::BufRead;

use rayon::prelude::*;

use crate::error::Result;
use crate::validator::Validator;

use super::{
    Aggregate, DiagnosticSink, IngestReport, IngestSummary, LineOutcome, LineReader, RawLine,
    emit, process_line,
};

/// Partial result of one rayon fold.
#[derive(Default)]
struct Shard {
    aggregate: Aggregate,
    summary: IngestSummary,
    diagnostics: Vec<LineOutcome>,
}

impl Shard {
    fn absorb(mut self, outcome: LineOutcome) -> Self {
        self.summary.record(&outcome);
        match outcome {
            LineOutcome::Accepted(file_name) => {
                self.aggregate.insert(file_name);
            }
            diagnostic => self.diagnostics.push(diagnostic),
        }
        self
    }

    fn merge(mut self, other: Self) -> Self {
        self.aggregate.merge(other.aggregate);
        self.summary.merge(&other.summary);
        self.diagnostics.extend(other.diagnostics);
        self
    }
}

/// Validate lines in parallel on `pool`.
///
/// The whole input is read first; a read failure aborts before any line is
/// validated. Each worker folds into its own aggregate and the shards are
/// merged by set union, so the report equals the sequential one. Diagnostics
/// are emitted to `sink` afterwards, ordered by line number.
///
/// # Errors
/// Returns an error if the reader fails.
pub fn ingest_parallel<R: BufRead, S: DiagnosticSink + ?Sized>(
    reader: R,
    source: &str,
    validator: &Validator,
    pool: &rayon::ThreadPool,
    sink: &mut S,
) -> Result<IngestReport> {
    let lines = LineReader::new(reader, source).collect::<Result<Vec<RawLine>>>()?;
    tracing::debug!(
        lines = lines.len(),
        threads = pool.current_num_threads(),
        "validating in parallel"
    );

    let shard = pool.install(|| {
        lines
            .par_iter()
            .map(|raw| process_line(validator, raw.number, &raw.bytes))
            .fold(Shard::default, Shard::absorb)
            .reduce(Shard::default, Shard::merge)
    });

    let mut diagnostics = shard.diagnostics;
    diagnostics.sort_by_key(LineOutcome::diagnostic_line);
    for outcome in &diagnostics {
        emit(outcome, sink);
    }

    Ok(IngestReport {
        aggregate: shard.aggregate,
        summary: shard.summary,
    })
}
