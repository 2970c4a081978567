//! Logging utilities.
//!
//! Centralizes logger initialization. The rest of the crate only speaks the
//! standard `log` facade; geometry validation failures surface as warnings
//! here rather than as panics or fatal errors.

mod init;

pub use init::{LoggingConfig, init_logging};
