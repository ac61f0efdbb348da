#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the logtally binary.
#[macro_export]
macro_rules! logtally {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("logtally"))
    };
}

pub const VALID_SHA: &str = "682bf8c6b34650fd70339679de1b0ea8b908aeb65b44cc829c7126444229dae6";

/// A record that passes every rule.
pub fn valid_record(nm: &str) -> Value {
    json!({
        "ts": 1_551_140_352,
        "pt": 30,
        "sha": VALID_SHA,
        "ph": format!("/var/scan/{nm}"),
        "nm": nm,
        "dp": 2,
        "si": "36b2355d-1eda-4a02-82c9-e0ee1fcea334",
        "uu": "36b2355d-1eda-4a02-82c9-e0ee1fcea335",
        "bg": "36b2355d-1eda-4a02-82c9-e0ee1fcea336"
    })
}

/// A valid record with one field replaced.
pub fn record_with(nm: &str, field: &str, value: Value) -> Value {
    let mut record = valid_record(nm);
    record[field] = value;
    record
}

/// Creates a temporary directory with input files for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes `lines` as a log file, one per line, and returns its path.
    pub fn create_log(&self, name: &str, lines: &[String]) -> PathBuf {
        let path = self.dir.path().join(name);
        let mut content = lines.join("\n");
        content.push('\n');
        fs::write(&path, content).expect("Failed to write log file");
        path
    }

    /// Writes JSON records as a log file.
    pub fn create_records(&self, name: &str, records: &[Value]) -> PathBuf {
        let lines: Vec<String> = records.iter().map(Value::to_string).collect();
        self.create_log(name, &lines)
    }

    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }
}
