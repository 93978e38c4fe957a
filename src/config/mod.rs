//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! default template (schema.rs)
//!     → binder.rs seeds BalancerConfig
//!
//! config file
//!     → source.rs (acquire bytes)
//!     → document.rs (decode to RawDocument)
//!     → binder.rs (type-check, bind, tally unknown keys)
//!     → LoadedConfig { BalancerConfig, Option<Diagnostic> }
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - Absent fields keep their template value
//! - Type mismatches are fatal; unknown fields are only reported

pub mod binder;
pub mod document;
pub mod error;
pub mod loader;
pub mod schema;
pub mod source;

pub use document::{RawDocument, ValueKind};
pub use error::{ConfigError, Diagnostic, Found, Severity};
pub use loader::{load_config, LoadedConfig};
pub use schema::{BalancerConfig, DEFAULT_TEMPLATE};
pub use source::{DocumentSource, FileSource, StaticSource};
