//! Filesystem access used by the config loader.

use std::path::{Path, PathBuf};

/// The few filesystem queries config discovery needs, so tests can stub them.
pub trait FileSystem {
    /// # Errors
    /// Returns the underlying I/O error.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    fn exists(&self, path: &Path) -> bool;

    /// Directory searched for `.logtally.toml`.
    ///
    /// # Errors
    /// Returns the underlying I/O error.
    fn current_dir(&self) -> std::io::Result<PathBuf>;

    /// Per-user config directory, e.g. `~/.config/logtally` on Linux.
    fn config_dir(&self) -> Option<PathBuf>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        std::env::current_dir()
    }

    fn config_dir(&self) -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "logtally")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }
}
