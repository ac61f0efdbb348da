//! Field-level rules.
//!
//! Every rule takes the raw field value and the accumulator for the current
//! validation pass, and appends at most one message per field. No rule returns
//! early on behalf of another rule.

use chrono::DateTime;

use super::outcome::{FileName, Violations};
use super::record::FieldValue;
use super::uuid::{UUID_LENGTH, UuidPattern};

/// Number of hex characters in a SHA-256 digest.
pub const SHA256_LENGTH: usize = 64;

/// Classification attached to an observed file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    Malicious = 1,
    Clean = 2,
    Unknown = 3,
}

impl Disposition {
    #[must_use]
    pub const fn from_code(code: i128) -> Option<Self> {
        match code {
            1 => Some(Self::Malicious),
            2 => Some(Self::Clean),
            3 => Some(Self::Unknown),
            _ => None,
        }
    }
}

/// `ts` must be an integer number of seconds that maps to a calendar date.
pub fn check_timestamp(value: &FieldValue, violations: &mut Violations) {
    let representable = value
        .as_integer()
        .and_then(|secs| i64::try_from(secs).ok())
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .is_some();
    if !representable {
        violations.push(format!("Invalid timestamp ({value})"));
    }
}

/// `pt` must be an integer `>= 0`.
pub fn check_elapsed_time(value: &FieldValue, violations: &mut Violations) {
    if !value.as_integer().is_some_and(|t| t >= 0) {
        violations.push(format!("Invalid time value ({value})"));
    }
}

/// `sha` must be 64 hex characters. Content is only inspected once the length
/// is right.
pub fn check_sha256(sha: &str, violations: &mut Violations) {
    if sha.chars().count() != SHA256_LENGTH {
        violations.push(format!("Invalid length for sha256 ({sha})"));
    } else if !sha.chars().all(|c| c.is_ascii_hexdigit()) {
        violations.push(format!("Invalid sha256 value ({sha})"));
    }
}

/// The last component of `path` must equal `name` exactly.
///
/// Both `/` and `\` act as separators, and empty components are ignored so
/// leading or trailing separators do not matter.
pub fn check_path(path: &str, name: &str, violations: &mut Violations) {
    if last_component(path) != Some(name) {
        violations.push(format!(
            "Path '{path}' does not match the given filename '{name}'"
        ));
    }
}

#[must_use]
pub fn last_component(path: &str) -> Option<&str> {
    path.rsplit(['/', '\\']).find(|s| !s.is_empty())
}

/// `dp` must be exactly 1, 2 or 3 as an integer.
pub fn check_disposition(value: &FieldValue, violations: &mut Violations) {
    if value.as_integer().and_then(Disposition::from_code).is_none() {
        violations.push(format!("Disposition is invalid ({value})"));
    }
}

/// A wrong length is reported instead of, never alongside, a format failure.
pub fn check_uuid(candidate: &str, pattern: &UuidPattern, violations: &mut Violations) {
    if candidate.chars().count() != UUID_LENGTH {
        violations.push(format!("Invalid UUID length ({candidate})"));
    } else if !pattern.is_match(candidate) {
        violations.push(format!("Invalid UUID format ({candidate})"));
    }
}

/// Split `nm` and record a violation when it carries no extension.
pub fn check_file_name(file_name: &str, violations: &mut Violations) -> Option<FileName> {
    let split = split_file_name(file_name);
    if split.is_none() {
        violations.push(format!("Filename has no extension ({file_name})"));
    }
    split
}

/// Split a file name at its last dot.
///
/// Dots leading the base name do not start an extension (`.bashrc` has none),
/// and a bare trailing dot is not an extension either.
#[must_use]
pub fn split_file_name(file_name: &str) -> Option<FileName> {
    let dot = file_name.rfind('.')?;
    let stem_start = file_name.rfind(['/', '\\']).map_or(0, |i| i + 1);
    if dot < stem_start || file_name[stem_start..dot].bytes().all(|b| b == b'.') {
        return None;
    }

    let extension = &file_name[dot..];
    if extension.len() == 1 {
        return None;
    }

    Some(FileName {
        name: file_name[..dot].to_string(),
        extension: extension.to_string(),
    })
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;
