use std::io::{Stderr, Write};

use crate::ingest::DiagnosticSink;

use super::error_output::stderr_uses_colors;
use super::{ColorMode, ansi};

/// Prints per-line diagnostics.
///
/// Rejected records are listed with every violation only when verbose;
/// undecodable lines are reported unless quiet.
pub struct ViolationPrinter<W: Write> {
    writer: W,
    show_violations: bool,
    show_unloadable: bool,
    use_colors: bool,
}

impl ViolationPrinter<Stderr> {
    #[must_use]
    pub fn stderr(verbose: bool, quiet: bool, mode: ColorMode) -> Self {
        Self::new(std::io::stderr(), verbose && !quiet, !quiet)
            .with_colors(stderr_uses_colors(mode))
    }
}

impl<W: Write> ViolationPrinter<W> {
    pub const fn new(writer: W, show_violations: bool, show_unloadable: bool) -> Self {
        Self {
            writer,
            show_violations,
            show_unloadable,
            use_colors: false,
        }
    }

    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn paint(&self, color: &str, text: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }
}

impl<W: Write> DiagnosticSink for ViolationPrinter<W> {
    fn rejected(&mut self, line: usize, violations: &[String]) {
        if !self.show_violations {
            return;
        }
        let heading = self.paint(ansi::YELLOW, &format!("Line {line}:"));
        writeln!(self.writer, "{heading}").ok();
        for violation in violations {
            writeln!(self.writer, "\t{violation}").ok();
        }
    }

    fn unloadable(&mut self, line: usize, reason: &str) {
        if !self.show_unloadable {
            return;
        }
        let heading = self.paint(ansi::RED, &format!("Could not load line {line}:"));
        writeln!(self.writer, "{heading} {reason}").ok();
    }
}

#[cfg(test)]
#[path = "diagnostics_tests.rs"]
mod tests;
