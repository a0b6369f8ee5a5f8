//! Error types for the dispatch engine

use std::io;
use std::time::Duration;
use thiserror::Error;

/// A transport-level failure while transmitting one request
#[derive(Debug, Error)]
pub enum TransportError {
    /// Could not establish a connection to the daemon
    #[error("failed to connect to {addr}: {source}")]
    Connect {
        addr: String,
        #[source]
        source: io::Error,
    },

    /// Connected, but the request could not be fully transmitted
    #[error("failed to write request: {source}")]
    Write {
        #[source]
        source: io::Error,
    },

    /// Connection establishment exceeded the configured bound
    #[error("connecting to {addr} timed out after {after:?}")]
    Timeout { addr: String, after: Duration },
}

/// Terminal outcome of a failed dispatch run, naming the token that failed.
///
/// Tokens earlier in the sequence may already have reached the device;
/// tokens after the failing one were never attempted.
#[derive(Debug, Error)]
#[error("command {key:?} failed: {source}")]
pub struct DispatchError {
    /// Key code of the send token that triggered the failure
    pub key: String,
    #[source]
    pub source: TransportError,
}
