mod aggregate;
mod lines;
mod parallel;

pub use aggregate::Aggregate;
pub use lines::{LineReader, RawLine};
pub use parallel::ingest_parallel;

use std::io::BufRead;

use serde::Serialize;

use crate::error::Result;
use crate::validator::{FileName, Record, ValidationOutcome, Validator};

/// What happened to a single input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    Accepted(FileName),
    Rejected {
        line: usize,
        violations: Vec<String>,
    },
    /// The line could not be decoded into a record. Never reaches the validator.
    Unloadable { line: usize, reason: String },
}

impl LineOutcome {
    /// Line number for outcomes that carry diagnostics.
    #[must_use]
    pub const fn diagnostic_line(&self) -> Option<usize> {
        match self {
            Self::Rejected { line, .. } | Self::Unloadable { line, .. } => Some(*line),
            Self::Accepted(_) => None,
        }
    }
}

/// Receives per-line diagnostics as the driver produces them.
pub trait DiagnosticSink {
    /// A decoded record failed one or more rules.
    fn rejected(&mut self, line: usize, violations: &[String]);

    /// A line could not be decoded.
    fn unloadable(&mut self, line: usize, reason: &str);
}

/// Discards all diagnostics.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn rejected(&mut self, _line: usize, _violations: &[String]) {}

    fn unloadable(&mut self, _line: usize, _reason: &str) {}
}

/// Per-run line counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IngestSummary {
    /// Lines read.
    pub lines: usize,
    pub accepted: usize,
    pub rejected: usize,
    pub unloadable: usize,
}

impl IngestSummary {
    pub fn record(&mut self, outcome: &LineOutcome) {
        match outcome {
            LineOutcome::Accepted(_) => self.accepted += 1,
            LineOutcome::Rejected { .. } => self.rejected += 1,
            LineOutcome::Unloadable { .. } => self.unloadable += 1,
        }
        self.lines += 1;
    }

    pub fn merge(&mut self, other: &Self) {
        self.lines += other.lines;
        self.accepted += other.accepted;
        self.rejected += other.rejected;
        self.unloadable += other.unloadable;
    }
}

/// Final state of a run: the aggregate plus line counters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestReport {
    pub aggregate: Aggregate,
    pub summary: IngestSummary,
}

/// Decode and validate one line.
#[must_use]
pub fn process_line(validator: &Validator, line: usize, bytes: &[u8]) -> LineOutcome {
    let text = match std::str::from_utf8(bytes) {
        Ok(text) => text.trim(),
        Err(e) => {
            return LineOutcome::Unloadable {
                line,
                reason: format!("invalid UTF-8: {e}"),
            };
        }
    };
    if text.is_empty() {
        return LineOutcome::Unloadable {
            line,
            reason: "empty line".to_string(),
        };
    }

    match Record::from_json_line(text) {
        Ok(record) => match validator.validate(&record, line) {
            ValidationOutcome::Accepted(file_name) => LineOutcome::Accepted(file_name),
            ValidationOutcome::Rejected(violations) => LineOutcome::Rejected { line, violations },
        },
        Err(e) => LineOutcome::Unloadable {
            line,
            reason: e.to_string(),
        },
    }
}

/// Forward an outcome's diagnostics, if any, to `sink`.
pub fn emit<S: DiagnosticSink + ?Sized>(outcome: &LineOutcome, sink: &mut S) {
    match outcome {
        LineOutcome::Rejected { line, violations } => {
            tracing::debug!(line, count = violations.len(), "record rejected");
            sink.rejected(*line, violations);
        }
        LineOutcome::Unloadable { line, reason } => {
            tracing::debug!(line, %reason, "line could not be decoded");
            sink.unloadable(*line, reason);
        }
        LineOutcome::Accepted(_) => {}
    }
}

/// Sequential driver: folds accepted records into an [`Aggregate`].
#[derive(Debug, Default)]
pub struct Ingestor {
    validator: Validator,
    report: IngestReport,
}

impl Ingestor {
    #[must_use]
    pub fn new(validator: Validator) -> Self {
        Self {
            validator,
            report: IngestReport::default(),
        }
    }

    /// Process one line and fold its outcome into the running totals.
    pub fn ingest_line(&mut self, line: usize, bytes: &[u8]) -> LineOutcome {
        let outcome = process_line(&self.validator, line, bytes);
        self.report.summary.record(&outcome);
        if let LineOutcome::Accepted(file_name) = &outcome {
            self.report.aggregate.insert(file_name.clone());
        }
        outcome
    }

    /// Drain `reader`, reporting diagnostics to `sink` in line order.
    ///
    /// # Errors
    /// Returns an error if the reader fails; lines already processed stay in
    /// the running totals but the run should be treated as failed.
    pub fn ingest_reader<R: BufRead, S: DiagnosticSink + ?Sized>(
        &mut self,
        reader: R,
        source: &str,
        sink: &mut S,
    ) -> Result<()> {
        for raw in LineReader::new(reader, source) {
            let raw = raw?;
            let outcome = self.ingest_line(raw.number, &raw.bytes);
            emit(&outcome, sink);
        }
        Ok(())
    }

    #[must_use]
    pub const fn summary(&self) -> &IngestSummary {
        &self.report.summary
    }

    #[must_use]
    pub fn finish(self) -> IngestReport {
        self.report
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
