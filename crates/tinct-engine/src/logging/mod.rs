//! Logging utilities.
//!
//! Library code only emits through the `log` facade; binaries and tests call
//! [`init_logging`] to install the `env_logger` backend.

mod init;

pub use init::{init_logging, LoggingConfig};
