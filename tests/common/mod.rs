//! Shared utilities for config loading tests.

use std::io::Write;

use tempfile::NamedTempFile;

/// Write `text` to a temporary config file that lives as long as the handle.
pub fn write_config(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
