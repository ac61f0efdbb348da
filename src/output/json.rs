use serde::Serialize;

use crate::error::Result;
use crate::ingest::{IngestReport, IngestSummary};

use super::{ReportFormatter, ordered_counts};

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter {
    sort: bool,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    extensions: Vec<ExtensionCount<'a>>,
    summary: IngestSummary,
}

#[derive(Serialize)]
struct ExtensionCount<'a> {
    extension: &'a str,
    count: usize,
}

impl JsonFormatter {
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

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &IngestReport) -> Result<String> {
        let output = JsonOutput {
            extensions: ordered_counts(report, self.sort)
                .into_iter()
                .map(|(extension, count)| ExtensionCount { extension, count })
                .collect(),
            summary: report.summary,
        };

        let mut rendered = serde_json::to_string_pretty(&output)?;
        rendered.push('\n');
        Ok(rendered)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
