//! Error and diagnostic types for configuration loading.
//!
//! # Design Decisions
//! - Two tiers: `ConfigError` aborts the load, `Diagnostic` rides along
//!   with a valid configuration
//! - Underlying I/O and parse causes are kept as `source()` so callers
//!   can walk the chain

use std::collections::BTreeSet;
use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::document::ValueKind;

/// How a loading outcome should be treated by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// No usable configuration was produced.
    Fatal,
    /// The configuration is valid; the caller is only informed.
    NonFatal,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Fatal => f.write_str("fatal"),
            Severity::NonFatal => f.write_str("non-fatal"),
        }
    }
}

/// Fatal configuration construction error.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file path can not be empty")]
    EmptyPath,

    #[error("config file {} not found: {source}", .path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config document: {source}")]
    Parse {
        #[source]
        source: serde_json::Error,
    },

    #[error("{field} must be of type {expected} in the config document, found {found}")]
    TypeMismatch {
        field: &'static str,
        expected: &'static str,
        found: Found,
    },
}

impl ConfigError {
    pub fn severity(&self) -> Severity {
        Severity::Fatal
    }

    /// Name of the offending field, for type mismatches.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ConfigError::TypeMismatch { field, .. } => Some(*field),
            _ => None,
        }
    }
}

/// What the binder actually saw when a coercion failed.
#[derive(Debug, Clone, PartialEq)]
pub enum Found {
    /// Value of the wrong dynamic kind.
    Kind(ValueKind),
    /// Number that is negative or does not fit.
    OutOfRange(f64),
    /// Offending element inside a sequence field.
    Element { index: usize, kind: ValueKind },
    /// Empty string inside a sequence field.
    EmptyElement { index: usize },
}

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Found::Kind(kind) => write!(f, "{kind}"),
            Found::OutOfRange(n) => write!(f, "out-of-range number {n}"),
            Found::Element { index, kind } => write!(f, "{kind} at index {index}"),
            Found::EmptyElement { index } => write!(f, "empty string at index {index}"),
        }
    }
}

/// Non-fatal diagnostic returned alongside a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    #[error("non-fatal: unknown fields in config document: {}", join(.0))]
    UnknownFields(BTreeSet<String>),
}

impl Diagnostic {
    pub fn severity(&self) -> Severity {
        Severity::NonFatal
    }

    /// Names of the unrecognized keys.
    pub fn unknown_fields(&self) -> impl Iterator<Item = &str> {
        match self {
            Diagnostic::UnknownFields(keys) => keys.iter().map(String::as_str),
        }
    }
}

fn join(keys: &BTreeSet<String>) -> String {
    keys.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
}
