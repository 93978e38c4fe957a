//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! config loader
//!     → tracing events (debug: acquire/decode, info: loaded, warn: unknown fields)
//!     → logging.rs subscriber (stderr)
//! ```

pub mod logging;
