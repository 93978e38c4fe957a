//! Load balancer configuration loader.
//!
//! Turns a JSON config document into a validated, immutable
//! [`BalancerConfig`]. Type mismatches abort the load; unknown fields are
//! reported alongside an otherwise valid configuration.

pub mod config;
pub mod observability;

pub use config::{load_config, BalancerConfig, ConfigError, Diagnostic, LoadedConfig};
