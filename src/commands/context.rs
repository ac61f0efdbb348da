use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::cli::{Cli, ColorChoice};
use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::error::{LogTallyError, Result};
use crate::output::ColorMode;

/// Input path that selects stdin.
const STDIN_PATH: &str = "-";

#[must_use]
pub const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

/// Load configuration from an explicit path or the default locations.
///
/// # Errors
/// Returns an error if a configuration file cannot be read, parsed or validated.
pub fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

/// CLI flags take precedence over configuration values.
pub fn apply_cli_overrides(config: &mut Config, cli: &Cli) {
    if let Some(format) = cli.format {
        config.output.format = format;
    }
    if cli.sort {
        config.output.sort = true;
    }
    if let Some(jobs) = cli.jobs {
        config.ingest.jobs = jobs;
    }
}

/// Open the input stream; `-` selects stdin.
///
/// # Errors
/// Returns `FileAccess` if the file cannot be opened.
pub fn open_input(path: &Path) -> Result<Box<dyn BufRead>> {
    if path.as_os_str() == STDIN_PATH {
        return Ok(Box::new(std::io::stdin().lock()));
    }

    let file = File::open(path).map_err(|source| LogTallyError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Box::new(BufReader::new(file)))
}

/// Write the report to `output_path`, or stdout when none is given.
///
/// # Errors
/// Returns an error if the output file cannot be written.
pub fn write_output(output_path: Option<&Path>, content: &str) -> Result<()> {
    if let Some(path) = output_path {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content).map_err(|source| LogTallyError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;
    } else {
        print!("{content}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
