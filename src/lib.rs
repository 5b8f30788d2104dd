//! Timbro - background worker core for timesheet automation
//!
//! Timbro runs pluggable bot logic on a blocking worker thread, relays
//! redacted log output and progress events back to the caller (typically a
//! GUI event loop), brokers synchronous input requests from the worker to
//! the caller, and supports cooperative cancellation.

pub mod error;
pub mod logging;
pub mod validation;
pub mod worker;

pub use error::{Result, TimbroError};
