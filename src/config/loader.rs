//! Configuration loading entry points.
//!
//! Every path runs the same pipeline: seed from the default template,
//! then acquire, decode and bind the caller's document on top.

use std::path::Path;

use crate::config::binder::bind_document;
use crate::config::document::RawDocument;
use crate::config::error::{ConfigError, Diagnostic};
use crate::config::schema::{BalancerConfig, DEFAULT_TEMPLATE};
use crate::config::source::{DocumentSource, FileSource, StaticSource};

/// Built-in source for the default template.
pub const DEFAULT_SOURCE: StaticSource =
    StaticSource::new("<default template>", DEFAULT_TEMPLATE);

/// A validated configuration plus any non-fatal diagnostic.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedConfig {
    pub config: BalancerConfig,
    pub diagnostic: Option<Diagnostic>,
}

impl LoadedConfig {
    pub fn into_parts(self) -> (BalancerConfig, Option<Diagnostic>) {
        (self.config, self.diagnostic)
    }
}

impl BalancerConfig {
    /// Configuration built entirely from the default template.
    pub fn from_defaults() -> Self {
        match seed_from(&DEFAULT_SOURCE) {
            Ok(config) => config,
            // The template is a checked-in constant covered by tests.
            Err(e) => unreachable!("default template is invalid: {e}"),
        }
    }

    /// Load a document from `source` over the defaults.
    pub fn from_source(source: &dyn DocumentSource) -> Result<LoadedConfig, ConfigError> {
        let mut config = Self::from_defaults();

        let bytes = source.read_bytes()?;
        let doc = RawDocument::decode(&bytes)?;
        let diagnostic = bind_document(&mut config, doc)?;

        tracing::info!(
            source = %source.describe(),
            servers = config.server_urls.len(),
            algorithm = %config.balancing_algorithm_name,
            server_timeout_secs = config.server_timeout_seconds,
            failed_health_checks = config.failed_health_checks_till_timeout,
            slow_start = config.slow_start,
            slow_start_secs = config.slow_start_seconds,
            sticky_session = config.sticky_session,
            "Configuration loaded"
        );
        if let Some(diag) = &diagnostic {
            tracing::warn!(source = %source.describe(), "{}", diag);
        }

        Ok(LoadedConfig { config, diagnostic })
    }
}

impl Default for BalancerConfig {
    fn default() -> Self {
        Self::from_defaults()
    }
}

/// Load and validate configuration from a file.
pub fn load_config(path: impl AsRef<Path>) -> Result<LoadedConfig, ConfigError> {
    let source = FileSource::new(path.as_ref())?;
    BalancerConfig::from_source(&source)
}

fn seed_from(source: &dyn DocumentSource) -> Result<BalancerConfig, ConfigError> {
    let mut config = BalancerConfig::empty();
    let doc = RawDocument::decode(&source.read_bytes()?)?;
    bind_document(&mut config, doc)?;
    Ok(config)
}
