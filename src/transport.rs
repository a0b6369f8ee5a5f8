//! Transport abstraction and the one-shot TCP transport

use crate::config::DispatcherConfig;
use crate::error::TransportError;
use async_trait::async_trait;
use std::future::Future;
use std::io;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::debug;

/// Carries one request to the infrared daemon.
///
/// Each call stands alone: implementations must not reuse connections
/// across calls.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Deliver a single pre-formatted request, connect to close
    async fn send_once(&self, request: &[u8]) -> Result<(), TransportError>;
}

/// TCP transport that dials a brand-new connection per request, writes the
/// request, and closes without reading the daemon's reply
pub struct TcpTransport {
    addr: String,
    connect_timeout: Option<Duration>,
}

impl TcpTransport {
    pub fn new(addr: impl Into<String>) -> Self {
        Self {
            addr: addr.into(),
            connect_timeout: None,
        }
    }

    /// Build a transport from a device configuration
    pub fn from_config(config: &DispatcherConfig) -> Self {
        Self {
            addr: config.address(),
            connect_timeout: config.connect_timeout,
        }
    }

    /// Bound connection establishment; unbounded by default
    pub fn with_connect_timeout(mut self, bound: Duration) -> Self {
        self.connect_timeout = Some(bound);
        self
    }

    async fn connect(&self) -> Result<TcpStream, TransportError> {
        let result = self.bounded(TcpStream::connect(&self.addr)).await?;

        result.map_err(|source| TransportError::Connect {
            addr: self.addr.clone(),
            source,
        })
    }

    /// Apply the configured connect bound, if any, to a dial attempt
    async fn bounded<F>(&self, attempt: F) -> Result<io::Result<TcpStream>, TransportError>
    where
        F: Future<Output = io::Result<TcpStream>>,
    {
        match self.connect_timeout {
            Some(bound) => {
                timeout(bound, attempt)
                    .await
                    .map_err(|_| TransportError::Timeout {
                        addr: self.addr.clone(),
                        after: bound,
                    })
            }
            None => Ok(attempt.await),
        }
    }
}

#[async_trait]
impl Transport for TcpTransport {
    async fn send_once(&self, request: &[u8]) -> Result<(), TransportError> {
        let mut stream = self.connect().await?;

        stream
            .write_all(request)
            .await
            .map_err(|source| TransportError::Write { source })?;

        // The request is fully written at this point; a failure while
        // closing the write side cannot un-send it.
        if let Err(e) = stream.shutdown().await {
            debug!("shutdown after write failed: {}", e);
        }

        Ok(())
    }
}
