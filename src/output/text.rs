use std::fmt::Write;

use crate::error::Result;
use crate::ingest::IngestReport;

use super::{ReportFormatter, ordered_counts};

/// Plain `<extension>: <count>` lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFormatter {
    sort: bool,
}

impl TextFormatter {
    #[must_use]
    pub const fn new() -> Self {
        Self { sort: false }
    }

    #[must_use]
    pub const fn sorted(mut self, sort: bool) -> Self {
        self.sort = sort;
        self
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &IngestReport) -> Result<String> {
        let mut output = String::new();
        for (extension, count) in ordered_counts(report, self.sort) {
            writeln!(output, "{extension}: {count}").ok();
        }
        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
