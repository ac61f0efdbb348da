use serde::{Deserialize, Serialize};

use crate::error::{LogTallyError, Result};
use crate::output::OutputFormat;
use crate::validator::DEFAULT_MAX_UUID_VERSION;

/// Supported config version.
pub const CONFIG_VERSION: &str = "1";

/// Highest value a UUID version nibble can take.
const MAX_VERSION_NIBBLE: u8 = 15;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default)]
    pub validation: ValidationConfig,

    #[serde(default)]
    pub ingest: IngestConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Record validation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationConfig {
    /// Highest accepted UUID version nibble (0-15).
    #[serde(default = "default_max_uuid_version")]
    pub max_uuid_version: u8,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_uuid_version: default_max_uuid_version(),
        }
    }
}

/// Driver settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IngestConfig {
    /// Worker threads. 1 runs sequentially; 0 uses every available core.
    #[serde(default = "default_jobs")]
    pub jobs: usize,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            jobs: default_jobs(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,

    /// Sort report lines by extension instead of first-seen order.
    #[serde(default)]
    pub sort: bool,
}

const fn default_max_uuid_version() -> u8 {
    DEFAULT_MAX_UUID_VERSION
}

const fn default_jobs() -> usize {
    1
}

impl Config {
    /// Check values serde cannot constrain on its own.
    ///
    /// # Errors
    /// Returns a configuration error for an unsupported version or an
    /// out-of-range `max_uuid_version`.
    pub fn validate(&self) -> Result<()> {
        if let Some(version) = &self.version
            && version != CONFIG_VERSION
        {
            return Err(LogTallyError::Config(format!(
                "Unsupported config version '{version}'. Only version '{CONFIG_VERSION}' is supported."
            )));
        }

        if self.validation.max_uuid_version > MAX_VERSION_NIBBLE {
            return Err(LogTallyError::Config(format!(
                "validation.max_uuid_version must be between 0 and {MAX_VERSION_NIBBLE}, got {}",
                self.validation.max_uuid_version
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
