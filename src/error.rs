use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LogTallyError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to access file: {path}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read line {line} of {input}")]
    LineRead {
        input: String,
        line: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error("Thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

impl LogTallyError {
    /// Short category name used as the heading of rendered errors.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::TomlParse(_) => "Config",
            Self::FileAccess { .. } => "FileAccess",
            Self::LineRead { .. } | Self::Io(_) => "IO",
            Self::JsonSerialize(_) => "JSON",
            Self::ThreadPool(_) => "ThreadPool",
        }
    }

    /// The primary message, without the category prefix from `Display`.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Config(msg) => msg.clone(),
            Self::FileAccess { path, .. } => path.display().to_string(),
            Self::LineRead { input, line, .. } => format!("{input}, line {line}"),
            Self::Io(e) => e.to_string(),
            Self::TomlParse(e) => e.to_string(),
            Self::JsonSerialize(e) => e.to_string(),
            Self::ThreadPool(e) => e.to_string(),
        }
    }

    /// Underlying cause, if the variant wraps one.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::FileAccess { source, .. } | Self::LineRead { source, .. } => {
                Some(source.to_string())
            }
            _ => None,
        }
    }

    #[must_use]
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::FileAccess { source, .. } => match source.kind() {
                std::io::ErrorKind::NotFound => Some("Check that the input path exists"),
                std::io::ErrorKind::PermissionDenied => {
                    Some("Check that the input file is readable")
                }
                _ => None,
            },
            Self::TomlParse(_) => Some("Fix the TOML syntax or pass --no-config"),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, LogTallyError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
