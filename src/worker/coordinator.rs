//! Worker coordinator
//!
//! Owns the lifecycle of one execution unit run: spawns `execute` on a
//! blocking thread, relays redacted log/status events and the terminal
//! success flag to the caller over an unbounded channel, and brokers the
//! synchronous input-request handshake.
//!
//! Exactly two roles exist: the caller thread (typically a GUI event loop)
//! and one blocking worker thread per running coordinator. The worker's only
//! suspension point is the input-request wait; the caller never blocks on
//! the worker. Cancellation is cooperative: `stop` sets a flag and forwards
//! `request_stop` to the unit, nothing is force-terminated.

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

use crate::error::{Result, TimbroError};
use crate::logging::{LogEvent, SensitiveDataFilter};
use crate::worker::unit::{ExecutionUnit, Task};

/// Lifecycle of a coordinator. A finished coordinator never returns to
/// `Idle`; a new run needs a fresh coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinatorState {
    /// Created, not yet started
    Idle,
    /// Unit executing on the worker thread
    Running,
    /// Execution ended, successfully or not
    Finished,
}

/// Event pushed from a running worker to the caller, in emission order.
#[derive(Debug)]
pub enum WorkerEvent {
    /// A redacted log line from the unit
    Log(LogEvent),
    /// A redacted status-bar update
    Status(String),
    /// The worker thread is blocked waiting for a value. Send exactly one
    /// value through `responder` to resume it; dropping `responder` wakes
    /// the worker with an error instead.
    InputRequest {
        prompt: String,
        responder: oneshot::Sender<String>,
    },
    /// Terminal signal: whether the run succeeded
    Finished(bool),
}

/// Handle the coordinator passes to the running unit.
///
/// Everything a unit emits goes through here, and everything goes through
/// the redaction filter first; there is no unfiltered path out.
pub struct WorkerContext {
    event_tx: mpsc::UnboundedSender<WorkerEvent>,
    filter: SensitiveDataFilter,
    stop_requested: Arc<AtomicBool>,
    input_pending: AtomicBool,
    accepts_input: bool,
}

impl WorkerContext {
    fn new(
        event_tx: mpsc::UnboundedSender<WorkerEvent>,
        stop_requested: Arc<AtomicBool>,
        accepts_input: bool,
    ) -> Self {
        Self {
            event_tx,
            filter: SensitiveDataFilter::new(),
            stop_requested,
            input_pending: AtomicBool::new(false),
            accepts_input,
        }
    }

    /// Emit a log line. The line is redacted before it leaves the worker.
    pub fn log(&self, text: impl Into<String>) {
        let event = self.filter.filter(LogEvent::now(text.into()));
        let _ = self.event_tx.send(WorkerEvent::Log(event));
    }

    /// Emit a status-bar update, redacted like a log line.
    pub fn set_status(&self, text: impl Into<String>) {
        let status = self.filter.apply(&text.into());
        let _ = self.event_tx.send(WorkerEvent::Status(status));
    }

    /// Whether the caller has requested a cooperative stop.
    pub fn stop_requested(&self) -> bool {
        self.stop_requested.load(Ordering::SeqCst)
    }

    /// Block the worker thread until the caller supplies a value.
    ///
    /// One request may be outstanding at a time; a concurrent second
    /// request is rejected with [`TimbroError::InputPending`]. The core
    /// applies no timeout: a responder that is held but never used blocks
    /// the worker indefinitely, while a dropped responder wakes it with
    /// [`TimbroError::InputClosed`].
    pub fn request_input(&self, prompt: &str) -> Result<String> {
        if !self.accepts_input {
            return Err(TimbroError::InputNotSupported);
        }

        if self
            .input_pending
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(TimbroError::InputPending);
        }

        let (responder, value_rx) = oneshot::channel();
        let request = WorkerEvent::InputRequest {
            prompt: self.filter.apply(prompt),
            responder,
        };

        if self.event_tx.send(request).is_err() {
            self.input_pending.store(false, Ordering::SeqCst);
            return Err(TimbroError::ChannelClosed);
        }

        let value = value_rx.blocking_recv();
        self.input_pending.store(false, Ordering::SeqCst);
        value.map_err(|_| TimbroError::InputClosed)
    }
}

/// Runs one [`ExecutionUnit`] on a dedicated blocking thread.
pub struct WorkerCoordinator<U: ExecutionUnit> {
    unit: Arc<U>,
    state: Arc<Mutex<CoordinatorState>>,
    stop_requested: Arc<AtomicBool>,
    stop_forwarded: AtomicBool,
    event_tx: mpsc::UnboundedSender<WorkerEvent>,
    handle: Option<JoinHandle<()>>,
}

impl<U: ExecutionUnit> WorkerCoordinator<U> {
    /// Create a coordinator for a unit, returning the receiving end of its
    /// event stream.
    pub fn new(unit: U) -> (Self, mpsc::UnboundedReceiver<WorkerEvent>) {
        let (event_tx, event_rx) = mpsc::unbounded_channel();

        let coordinator = Self {
            unit: Arc::new(unit),
            state: Arc::new(Mutex::new(CoordinatorState::Idle)),
            stop_requested: Arc::new(AtomicBool::new(false)),
            stop_forwarded: AtomicBool::new(false),
            event_tx,
            handle: None,
        };

        (coordinator, event_rx)
    }

    /// Current lifecycle state.
    pub fn state(&self) -> CoordinatorState {
        *self.state.lock().unwrap()
    }

    /// Whether `stop` has been called on a running coordinator.
    pub fn is_stop_requested(&self) -> bool {
        self.stop_requested.load(Ordering::SeqCst)
    }

    /// Start executing the unit with the given task.
    ///
    /// Valid only from `Idle`; returns immediately, with execution running
    /// on a blocking thread. Unit faults (error returns and panics) are
    /// caught at this boundary, logged as an error line, and reported as
    /// `Finished(false)`; they never escape the worker.
    pub fn start(&mut self, task: Task) -> Result<()> {
        {
            let mut state = self.state.lock().unwrap();
            if *state != CoordinatorState::Idle {
                return Err(TimbroError::InvalidState(format!(
                    "cannot start worker from {:?}",
                    *state
                )));
            }
            *state = CoordinatorState::Running;
        }

        tracing::info!(unit = %self.unit.name(), "starting worker");

        let unit = Arc::clone(&self.unit);
        let state = Arc::clone(&self.state);
        let event_tx = self.event_tx.clone();
        let ctx = WorkerContext::new(
            self.event_tx.clone(),
            Arc::clone(&self.stop_requested),
            self.unit.accepts_input(),
        );

        self.handle = Some(tokio::task::spawn_blocking(move || {
            let outcome = catch_unwind(AssertUnwindSafe(|| unit.execute(task, &ctx)));

            let success = match outcome {
                Ok(Ok(done)) => done,
                Ok(Err(err)) => {
                    tracing::error!(unit = %unit.name(), error = %err, "unit failed");
                    ctx.log(format!("[CRITICAL ERROR] {err}\n{err:?}"));
                    false
                }
                Err(payload) => {
                    let description = panic_description(payload.as_ref());
                    tracing::error!(unit = %unit.name(), panic = %description, "unit panicked");
                    ctx.log(format!("[CRITICAL ERROR] worker panicked: {description}"));
                    false
                }
            };

            *state.lock().unwrap() = CoordinatorState::Finished;
            let _ = event_tx.send(WorkerEvent::Finished(success));
        }));

        Ok(())
    }

    /// Request a cooperative stop.
    ///
    /// From `Running` this sets the stop flag and forwards `request_stop`
    /// to the unit exactly once, even across repeated calls; from `Idle` or
    /// `Finished` it is a no-op. A pending input request is not woken: the
    /// caller unblocks the worker by dropping the request's responder.
    pub fn stop(&self) {
        if self.state() != CoordinatorState::Running {
            return;
        }

        self.stop_requested.store(true, Ordering::SeqCst);

        if !self.stop_forwarded.swap(true, Ordering::SeqCst) {
            tracing::info!(unit = %self.unit.name(), "forwarding stop request");
            self.unit.request_stop();
        }
    }

    /// Wait for the worker thread to finish, if one was started.
    pub async fn join(&mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}

/// Best-effort description of a panic payload.
fn panic_description(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
