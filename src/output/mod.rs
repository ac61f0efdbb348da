mod diagnostics;
mod error_output;
mod json;
mod text;

pub use diagnostics::ViolationPrinter;
pub use error_output::ErrorOutput;
pub use json::JsonFormatter;
pub use text::TextFormatter;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::ingest::IngestReport;

/// Trait for rendering the final report.
pub trait ReportFormatter {
    /// Format the report into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, report: &IngestReport) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

impl OutputFormat {
    #[must_use]
    pub fn formatter(self, sort: bool) -> Box<dyn ReportFormatter> {
        match self {
            Self::Text => Box::new(TextFormatter::new().sorted(sort)),
            Self::Json => Box::new(JsonFormatter::new().sorted(sort)),
        }
    }
}

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if the stream is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    Always,
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RESET: &str = "\x1b[0m";
}

/// `(extension, count)` pairs in aggregate order, or sorted by extension.
fn ordered_counts(report: &IngestReport, sort: bool) -> Vec<(&str, usize)> {
    let mut counts: Vec<_> = report.aggregate.counts().collect();
    if sort {
        counts.sort_unstable_by(|a, b| a.0.cmp(b.0));
    }
    counts
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
