// Chunk: docs/chunks/status_line - Caret status and clock

//! Wall clock for the status bar.
//!
//! A background thread formats the local time once per tick and hands it to
//! the UI thread over a channel. It never touches documents.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{Receiver, Sender, TrySendError};
use tracing::{debug, trace};

use crate::EditorError;

pub const CLOCK_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

pub const DEFAULT_TICK: Duration = Duration::from_millis(500);

/// Undelivered ticks beyond this evict the oldest; only the latest matters.
const TICK_BACKLOG: usize = 4;

pub fn format_now() -> String {
    chrono::Local::now().format(CLOCK_FORMAT).to_string()
}

#[derive(Debug)]
pub struct Clock {
    ticks: Receiver<String>,
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Clock {
    /// Starts ticking every `interval`, beginning immediately.
    pub fn start(interval: Duration) -> Result<Self, EditorError> {
        let (sender, ticks) = crossbeam_channel::bounded(TICK_BACKLOG);
        let stop = Arc::new(AtomicBool::new(false));

        let thread_stop = Arc::clone(&stop);
        let backlog = ticks.clone();
        let handle = thread::Builder::new()
            .name("lite-pad-clock".to_string())
            .spawn(move || run(sender, backlog, thread_stop, interval))
            .map_err(EditorError::Spawn)?;

        debug!(?interval, "clock started");
        Ok(Self {
            ticks,
            stop,
            handle: Some(handle),
        })
    }

    pub fn ticks(&self) -> &Receiver<String> {
        &self.ticks
    }

    /// Drains pending ticks and returns the newest, if any.
    pub fn latest(&self) -> Option<String> {
        self.ticks.try_iter().last()
    }

    /// Stops the thread and waits for it. Idempotent.
    pub fn stop(&mut self) {
        let Some(handle) = self.handle.take() else {
            return;
        };
        self.stop.store(true, Ordering::SeqCst);
        handle.thread().unpark();
        if handle.join().is_err() {
            debug!("clock thread panicked");
        }
        debug!("clock stopped");
    }
}

impl Drop for Clock {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Tick loop. `backlog` is a receiver on the same channel, used to evict the
/// oldest tick when the consumer falls behind.
fn run(
    sender: Sender<String>,
    backlog: Receiver<String>,
    stop: Arc<AtomicBool>,
    interval: Duration,
) {
    while !stop.load(Ordering::SeqCst) {
        let mut tick = format_now();
        loop {
            match sender.try_send(tick) {
                Ok(()) => break,
                Err(TrySendError::Full(rejected)) => {
                    if backlog.try_recv().is_ok() {
                        trace!("stale clock tick evicted");
                    }
                    tick = rejected;
                }
                Err(TrySendError::Disconnected(_)) => return,
            }
        }
        // Woken early by `stop`.
        thread::park_timeout(interval);
    }
}
