//! Couples the run state machine to a [`Ticker`].
//!
//! The driver is owned by whichever view displays the active run. Every path
//! out of `Running` (stop, completion, dropping the driver) cancels the
//! pending tick, so a stale tick can never touch a finished run.

use std::time::Duration;

use tracing::debug;

use super::run::{RunController, RunState, RunView};
use super::template::RoutineTemplate;
use super::ticker::Ticker;
use crate::events::Event;

#[derive(Debug)]
pub struct RunDriver {
    runs: RunController,
    ticker: Ticker,
}

impl RunDriver {
    pub fn new(tick_interval: Duration) -> Self {
        Self {
            runs: RunController::new(),
            ticker: Ticker::new(tick_interval),
        }
    }

    /// Current run state as a [`Event::StateSnapshot`].
    pub fn snapshot(&self) -> Event {
        self.runs.snapshot()
    }

    pub fn state(&self) -> RunState {
        self.runs.state()
    }

    pub fn view(&self) -> Option<RunView> {
        self.runs.view()
    }

    pub fn is_tick_pending(&self) -> bool {
        self.ticker.is_armed()
    }

    /// Start a run and schedule its first tick.
    pub fn start(&mut self, template: &RoutineTemplate) -> Option<Event> {
        let event = self.runs.start(template)?;
        self.ticker.arm();
        Some(event)
    }

    pub fn toggle_task(&mut self, task_id: &str) -> Option<Event> {
        self.runs.toggle_task(task_id)
    }

    pub fn stop(&mut self) -> Option<Event> {
        self.ticker.cancel();
        self.runs.stop()
    }

    /// Wait for the next tick and apply it.
    ///
    /// Returns `None` immediately when no run is active. Re-arms after each
    /// tick while time remains. Cancel-safe in `tokio::select!`.
    pub async fn next_tick(&mut self) -> Option<Event> {
        if !self.runs.is_running() {
            return None;
        }
        if !self.ticker.is_armed() {
            self.ticker.arm();
        }
        self.ticker.fired().await;

        let event = self.runs.tick();
        if self.runs.is_running() {
            self.ticker.arm();
        } else {
            self.ticker.cancel();
        }
        event
    }
}

impl Drop for RunDriver {
    fn drop(&mut self) {
        if self.ticker.cancel() {
            debug!("pending tick cancelled on teardown");
        }
    }
}
