//! Hello unit
//!
//! Smallest possible execution unit; used by the demo binary and as a
//! smoke test for the coordinator wiring.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::Result;
use crate::worker::coordinator::WorkerContext;
use crate::worker::unit::{ExecutionUnit, Task};

/// A unit that greets and exits. With input enabled it first asks the
/// caller who to greet.
pub struct HelloUnit {
    ask_name: bool,
    stop: AtomicBool,
}

impl HelloUnit {
    /// Greeter that needs no input.
    pub fn new() -> Self {
        Self {
            ask_name: false,
            stop: AtomicBool::new(false),
        }
    }

    /// Greeter that asks the caller for a name first.
    pub fn with_input() -> Self {
        Self {
            ask_name: true,
            stop: AtomicBool::new(false),
        }
    }
}

impl Default for HelloUnit {
    fn default() -> Self {
        Self::new()
    }
}

impl ExecutionUnit for HelloUnit {
    fn name(&self) -> &str {
        "Hello Bot"
    }

    fn accepts_input(&self) -> bool {
        self.ask_name
    }

    fn execute(&self, task: Task, ctx: &WorkerContext) -> Result<bool> {
        ctx.set_status("Starting");
        ctx.log("Avvio in corso");

        let greeting = task.field("greeting").unwrap_or("CIAO").to_string();

        if self.ask_name {
            let who = ctx.request_input("Who should I greet?")?;
            ctx.log(format!("{greeting} {who}"));
        } else {
            ctx.log(greeting);
        }

        if self.stop.load(Ordering::SeqCst) || ctx.stop_requested() {
            ctx.log("Stopped before finishing");
            return Ok(false);
        }

        ctx.set_status("Done");
        ctx.log("Completed \u{2713}");
        Ok(true)
    }

    fn request_stop(&self) {
        self.stop.store(true, Ordering::SeqCst);
    }
}
