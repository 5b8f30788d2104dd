//! Logging pipeline
//!
//! Two stages sit between a running worker and anything that persists or
//! displays its output: redaction (mandatory, first) and humanization
//! (display-only, optional). Sinks are composed with the redaction filter
//! already applied; there is no bypass.

pub mod event;
pub mod humanize;
pub mod redact;

pub use event::LogEvent;
pub use humanize::{HumanizedLog, Humanizer, LogCategory};
pub use redact::SensitiveDataFilter;
