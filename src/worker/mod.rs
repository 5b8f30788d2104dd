//! Worker execution and coordination
//!
//! A `WorkerCoordinator` runs one `ExecutionUnit` on a blocking thread,
//! relays its redacted log/status/completion events to the caller over a
//! channel, and brokers the one-at-a-time synchronous input handshake
//! between the worker thread and the caller thread.

pub mod coordinator;
pub mod hello;
pub mod unit;

pub use coordinator::{CoordinatorState, WorkerContext, WorkerCoordinator, WorkerEvent};
pub use hello::HelloUnit;
pub use unit::{ExecutionUnit, Task};
