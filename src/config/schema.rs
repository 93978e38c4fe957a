//! Configuration schema definitions.
//!
//! This module defines the validated configuration handed to the load
//! balancer, plus the default template every load starts from.

use std::fmt;
use std::time::Duration;

use serde::Serialize;
use serde_json::Value;

/// Default config document. Every load binds this first.
pub const DEFAULT_TEMPLATE: &str = r#"{
	"serverURLs": [],
	"balancingAlgorithmName": "round_robin",
	"serverTimeoutSeconds": 60,
	"failedHealthChecksTillTimeout": 3,
	"slowStart": false,
	"slowStartSeconds": 120,
	"stickySession": false
}"#;

/// Root configuration for the load balancer.
///
/// Immutable once returned from a loader; share it by reference or `Arc`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BalancerConfig {
    /// Backend server URLs, in document order.
    #[serde(rename = "serverURLs")]
    pub server_urls: Vec<String>,

    /// Balancing algorithm identifier (e.g., "round_robin").
    /// Interpreted by the balancing engine, not here.
    pub balancing_algorithm_name: String,

    /// Backend response timeout in seconds.
    pub server_timeout_seconds: u64,

    /// Consecutive failed health checks before a server is timed out.
    pub failed_health_checks_till_timeout: u64,

    /// Ramp traffic up gradually to newly healthy servers.
    pub slow_start: bool,

    /// Length of the slow-start ramp in seconds.
    pub slow_start_seconds: u64,

    /// Pin clients to the server that handled their first request.
    pub sticky_session: bool,
}

impl BalancerConfig {
    /// Unbound configuration. Only the binder should ever see this.
    pub(crate) fn empty() -> Self {
        Self {
            server_urls: Vec::new(),
            balancing_algorithm_name: String::new(),
            server_timeout_seconds: 0,
            failed_health_checks_till_timeout: 0,
            slow_start: false,
            slow_start_seconds: 0,
            sticky_session: false,
        }
    }

    pub fn server_timeout(&self) -> Duration {
        Duration::from_secs(self.server_timeout_seconds)
    }

    pub fn slow_start_duration(&self) -> Duration {
        Duration::from_secs(self.slow_start_seconds)
    }

    /// Render back into the config document format.
    pub fn to_document(&self) -> Value {
        serde_json::json!({
            "serverURLs": self.server_urls,
            "balancingAlgorithmName": self.balancing_algorithm_name,
            "serverTimeoutSeconds": self.server_timeout_seconds,
            "failedHealthChecksTillTimeout": self.failed_health_checks_till_timeout,
            "slowStart": self.slow_start,
            "slowStartSeconds": self.slow_start_seconds,
            "stickySession": self.sticky_session,
        })
    }
}

impl fmt::Display for BalancerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "serverURLs: [{}]", self.server_urls.join(", "))?;
        writeln!(f, "balancingAlgorithmName: {}", self.balancing_algorithm_name)?;
        writeln!(f, "serverTimeoutSeconds: {}", self.server_timeout_seconds)?;
        writeln!(
            f,
            "failedHealthChecksTillTimeout: {}",
            self.failed_health_checks_till_timeout
        )?;
        writeln!(f, "slowStart: {}", self.slow_start)?;
        writeln!(f, "slowStartSeconds: {}", self.slow_start_seconds)?;
        write!(f, "stickySession: {}", self.sticky_session)
    }
}
