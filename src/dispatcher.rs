//! Command dispatcher - runs token sequences against the infrared daemon

use crate::config::DispatcherConfig;
use crate::error::DispatchError;
use crate::protocol;
use crate::token::CommandToken;
use crate::transport::{TcpTransport, Transport};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};

/// Executes command sequences for one controlled device, strictly in order.
///
/// Each run is all-or-nothing from the caller's perspective: the first
/// transport failure aborts the remaining tokens and surfaces as the
/// terminal result. The dispatcher does not serialize overlapping `run`
/// calls; callers issuing concurrent runs for the same device must queue
/// them externally or their transmissions may interleave.
pub struct CommandDispatcher<T: Transport = TcpTransport> {
    config: DispatcherConfig,
    transport: T,
}

impl CommandDispatcher<TcpTransport> {
    /// Create a dispatcher that talks TCP to the daemon named in `config`
    pub fn new(config: DispatcherConfig) -> Self {
        let transport = TcpTransport::from_config(&config);
        Self { config, transport }
    }
}

impl<T: Transport> CommandDispatcher<T> {
    /// Create a dispatcher over a custom transport
    pub fn with_transport(config: DispatcherConfig, transport: T) -> Self {
        Self { config, transport }
    }

    /// The remote profile this dispatcher transmits against
    pub fn remote(&self) -> &str {
        &self.config.remote
    }

    /// Execute the sequence, one token at a time, in list order.
    ///
    /// Delay tokens suspend without touching the network. Send tokens get
    /// a fresh connection each, followed by the configured settle delay.
    /// An empty sequence succeeds immediately.
    pub async fn run(&self, sequence: &[CommandToken]) -> Result<(), DispatchError> {
        for token in sequence {
            match token {
                CommandToken::Delay(ms) => {
                    debug!("delay {}ms", ms);
                    sleep(Duration::from_millis(*ms)).await;
                }
                CommandToken::Send(key) => {
                    debug!("send {} (remote {})", key, self.config.remote);
                    let request = protocol::send_once_request(&self.config.remote, key);

                    if let Err(source) = self.transport.send_once(&request).await {
                        warn!("aborting sequence at {}: {}", key, source);
                        return Err(DispatchError {
                            key: key.clone(),
                            source,
                        });
                    }

                    // Give the daemon time to actuate before the next token
                    if !self.config.inter_command_delay.is_zero() {
                        sleep(self.config.inter_command_delay).await;
                    }
                }
            }
        }

        Ok(())
    }
}
