//! irdispatch
//!
//! Sequenced command dispatch for LIRC-style infrared daemons. Translates
//! an ordered list of command tokens (key codes and embedded delay
//! directives) into one-shot `SEND_ONCE` requests over TCP, with strict
//! ordering, a fresh connection per command, and fail-fast error
//! propagation.

pub mod config;
pub mod dispatcher;
pub mod error;
pub mod protocol;
pub mod token;
pub mod transport;

pub use config::{DispatcherConfig, DEFAULT_PORT};
pub use dispatcher::CommandDispatcher;
pub use error::{DispatchError, TransportError};
pub use token::{parse_sequence, CommandSequence, CommandToken};
pub use transport::{TcpTransport, Transport};
