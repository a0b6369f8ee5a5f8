//! Dispatcher configuration

use std::time::Duration;

/// Default TCP port of the infrared daemon
pub const DEFAULT_PORT: u16 = 8765;

/// Configuration for one controlled device.
///
/// Built once at device setup and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct DispatcherConfig {
    /// Network address of the infrared daemon
    pub host: String,
    /// TCP port of the infrared daemon
    pub port: u16,
    /// Remote-control profile registered with the daemon; every send token
    /// is transmitted against this profile
    pub remote: String,
    /// Settle delay applied after each successfully transmitted send token
    pub inter_command_delay: Duration,
    /// Optional bound on connection establishment. `None` preserves the
    /// unbounded behavior: a daemon that accepts but never completes the
    /// handshake stalls the run.
    pub connect_timeout: Option<Duration>,
}

impl DispatcherConfig {
    /// Create a config for the given daemon host and remote profile, with
    /// defaults for everything else
    pub fn new(host: impl Into<String>, remote: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            remote: remote.into(),
            ..Default::default()
        }
    }

    /// The `host:port` address to dial
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: DEFAULT_PORT,
            remote: String::new(),
            inter_command_delay: Duration::ZERO,
            connect_timeout: None,
        }
    }
}
