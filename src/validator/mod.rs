mod outcome;
mod record;
mod rules;
mod uuid;

pub use outcome::{FileName, ValidationOutcome, Violations};
pub use record::{FieldValue, Record};
pub use rules::{
    Disposition, SHA256_LENGTH, check_disposition, check_elapsed_time, check_file_name,
    check_path, check_sha256, check_timestamp, check_uuid, last_component, split_file_name,
};
pub use uuid::{DEFAULT_MAX_UUID_VERSION, UUID_LENGTH, UuidPattern};

use crate::error::Result;

/// Checks decoded records against the field rules.
///
/// The validator holds only the compiled identifier pattern. Violations are
/// collected in an accumulator local to each [`Validator::validate`] call, so a
/// single instance can be shared freely, including across threads.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    uuid_pattern: UuidPattern,
}

impl Validator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a validator accepting identifier versions `0..=max_uuid_version`.
    ///
    /// # Errors
    /// Returns a configuration error if the version is not a single hex digit.
    pub fn with_max_uuid_version(max_uuid_version: u8) -> Result<Self> {
        Ok(Self {
            uuid_pattern: UuidPattern::new(max_uuid_version)?,
        })
    }

    /// Run every rule against `record` and report all failures.
    ///
    /// Rules run in a fixed order and none is skipped because an earlier one
    /// failed; the violation list preserves that order. `line_number` is only
    /// used for diagnostics.
    #[must_use]
    pub fn validate(&self, record: &Record, line_number: usize) -> ValidationOutcome {
        let mut violations = Violations::new();

        check_timestamp(&record.ts, &mut violations);
        check_elapsed_time(&record.pt, &mut violations);
        check_sha256(&record.sha, &mut violations);
        check_path(&record.ph, &record.nm, &mut violations);
        check_disposition(&record.dp, &mut violations);
        for identifier in [&record.si, &record.uu, &record.bg] {
            check_uuid(identifier, &self.uuid_pattern, &mut violations);
        }
        let file_name = check_file_name(&record.nm, &mut violations);

        tracing::trace!(
            line = line_number,
            violations = violations.len(),
            "record validated"
        );

        ValidationOutcome::from_parts(violations, file_name)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
