use serde::Serialize;

/// Base name and extension split from a record's `nm` field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FileName {
    pub name: String,
    /// Extension including the leading dot, e.g. `.txt`.
    pub extension: String,
}

/// Violation messages collected while checking one record.
///
/// A fresh accumulator is created for every validation pass; rules only ever
/// append to it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Violations {
    messages: Vec<String>,
}

impl Violations {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    pub fn push(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.messages
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.messages
    }
}

/// Result of validating one record.
///
/// `Accepted` is produced exactly when no rule recorded a violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Accepted(FileName),
    Rejected(Vec<String>),
}

impl ValidationOutcome {
    /// Assemble the outcome from the accumulated violations and the file name
    /// split, if any.
    #[must_use]
    pub fn from_parts(violations: Violations, file_name: Option<FileName>) -> Self {
        match file_name {
            Some(file_name) if violations.is_empty() => Self::Accepted(file_name),
            _ => Self::Rejected(violations.into_vec()),
        }
    }

    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    #[must_use]
    pub const fn file_name(&self) -> Option<&FileName> {
        match self {
            Self::Accepted(file_name) => Some(file_name),
            Self::Rejected(_) => None,
        }
    }

    /// Violations for a rejected record; empty for an accepted one.
    #[must_use]
    pub fn violations(&self) -> &[String] {
        match self {
            Self::Accepted(_) => &[],
            Self::Rejected(violations) => violations,
        }
    }
}
