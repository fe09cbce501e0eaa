//! Logging utilities.
//!
//! Centralizes logger initialization. Library code only depends on the
//! `log` facade; `env_logger` is wired up here for binaries and tests.

mod init;

pub use init::{init_logging, LoggingConfig};
