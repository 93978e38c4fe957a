//! Document acquisition.
//!
//! # Responsibilities
//! - Produce the raw bytes of a config document from a named source
//! - Distinguish "does not exist" from "exists but could not be read"
//!
//! # Design Decisions
//! - Single attempt, no retries; transient I/O errors surface as-is
//! - Empty paths are rejected before touching the filesystem

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::error::ConfigError;

/// A place config bytes can be read from.
pub trait DocumentSource {
    /// Human-readable name used in logs.
    fn describe(&self) -> String;

    fn read_bytes(&self) -> Result<Vec<u8>, ConfigError>;
}

/// Config document stored on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        if path.as_os_str().is_empty() {
            return Err(ConfigError::EmptyPath);
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DocumentSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn read_bytes(&self) -> Result<Vec<u8>, ConfigError> {
        fs::metadata(&self.path).map_err(|source| ConfigError::NotFound {
            path: self.path.clone(),
            source,
        })?;

        let bytes = fs::read(&self.path).map_err(|source| ConfigError::Read {
            path: self.path.clone(),
            source,
        })?;

        tracing::debug!(path = %self.path.display(), bytes = bytes.len(), "Config file read");
        Ok(bytes)
    }
}

/// Config document compiled into the binary.
#[derive(Debug, Clone, Copy)]
pub struct StaticSource {
    name: &'static str,
    text: &'static str,
}

impl StaticSource {
    pub const fn new(name: &'static str, text: &'static str) -> Self {
        Self { name, text }
    }
}

impl DocumentSource for StaticSource {
    fn describe(&self) -> String {
        self.name.to_string()
    }

    fn read_bytes(&self) -> Result<Vec<u8>, ConfigError> {
        Ok(self.text.as_bytes().to_vec())
    }
}
