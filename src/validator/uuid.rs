use regex::Regex;

use crate::error::{LogTallyError, Result};

/// Highest UUID version nibble accepted by default (versions 0 through 5).
pub const DEFAULT_MAX_UUID_VERSION: u8 = 5;

/// Number of characters in a hyphenated UUID.
pub const UUID_LENGTH: usize = 36;

/// Compiled 8-4-4-4-12 identifier pattern.
///
/// The version nibble (first character of the third group) is accepted in the
/// range `0..=max_version`; the variant nibble must be one of `8`, `9`, `a`, `b`.
/// Matching is case-insensitive.
#[derive(Debug, Clone)]
pub struct UuidPattern {
    regex: Regex,
    max_version: u8,
}

impl Default for UuidPattern {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_UUID_VERSION).expect("Invalid regex")
    }
}

impl UuidPattern {
    /// Compile the pattern for versions `0..=max_version`.
    ///
    /// # Errors
    /// Returns a configuration error if `max_version` is not a single hex digit.
    pub fn new(max_version: u8) -> Result<Self> {
        let class = version_class(max_version).ok_or_else(|| {
            LogTallyError::Config(format!(
                "max_uuid_version must be between 0 and 15, got {max_version}"
            ))
        })?;
        let pattern = format!(
            "(?i)^[0-9a-f]{{8}}-[0-9a-f]{{4}}-{class}[0-9a-f]{{3}}-[89ab][0-9a-f]{{3}}-[0-9a-f]{{12}}$"
        );
        let regex = Regex::new(&pattern).map_err(|e| {
            LogTallyError::Config(format!("Invalid UUID pattern '{pattern}': {e}"))
        })?;
        Ok(Self { regex, max_version })
    }

    #[must_use]
    pub const fn max_version(&self) -> u8 {
        self.max_version
    }

    #[must_use]
    pub fn is_match(&self, candidate: &str) -> bool {
        self.regex.is_match(candidate)
    }
}

/// Character class for the version nibble, e.g. `[0-5]` or `[0-9a-c]`.
fn version_class(max_version: u8) -> Option<String> {
    match max_version {
        0..=9 => Some(format!("[0-{max_version}]")),
        10..=15 => {
            let upper = char::from_digit(u32::from(max_version), 16)?;
            Some(format!("[0-9a-{upper}]"))
        }
        _ => None,
    }
}

#[cfg(test)]
#[path = "uuid_tests.rs"]
mod tests;
