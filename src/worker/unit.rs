//! Execution unit contract
//!
//! Units hold the actual automation logic (portal login, form filling,
//! downloads). The coordinator only depends on this capability surface.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::worker::coordinator::WorkerContext;

/// Opaque payload handed to a unit for one run.
///
/// The coordinator never interprets the fields; the shape is whatever the
/// caller and the unit agree on (typically one or more database rows).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Task {
    data: serde_json::Value,
}

impl Task {
    /// Wrap a JSON payload.
    pub fn new(data: serde_json::Value) -> Self {
        Self { data }
    }

    /// Borrow the payload.
    pub fn data(&self) -> &serde_json::Value {
        &self.data
    }

    /// Convenience accessor for a top-level string field.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.data.get(name).and_then(|v| v.as_str())
    }
}

/// Pluggable automation logic run by a [`WorkerCoordinator`].
///
/// `execute` runs on a dedicated blocking thread and may block freely; it
/// must never be called on the caller thread. Cancellation is cooperative:
/// `request_stop` only sets state the unit is expected to poll, so units
/// keep their stop flag behind interior mutability.
///
/// [`WorkerCoordinator`]: crate::worker::WorkerCoordinator
pub trait ExecutionUnit: Send + Sync + 'static {
    /// Human-readable unit name, used in status and log lines.
    fn name(&self) -> &str;

    /// Run the unit to completion. `Ok(true)` means the business task
    /// succeeded; `Ok(false)` means it finished without success (e.g. it
    /// observed a stop request). Errors are caught at the coordinator
    /// boundary and reported as a failed run.
    fn execute(&self, task: Task, ctx: &WorkerContext) -> Result<bool>;

    /// Ask the unit to stop. Idempotent and safe to call from another
    /// thread while `execute` is running.
    fn request_stop(&self);

    /// Whether this unit issues input requests. Units that return `false`
    /// here get an error from [`WorkerContext::request_input`]. Decided at
    /// construction time, never probed dynamically.
    fn accepts_input(&self) -> bool {
        false
    }
}
