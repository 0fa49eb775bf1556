//! Logging utilities.
//!
//! Centralizes logger initialization. Code elsewhere logs through the `log`
//! facade only; `env_logger` is the single backend and writes to stderr, which
//! is where shader and initialization diagnostics are expected to land.

mod init;

pub use init::{init_logging, LoggingConfig};
