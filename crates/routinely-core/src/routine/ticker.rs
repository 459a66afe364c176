//! One-shot, re-armable tick scheduler.
//!
//! Each tick is scheduled relative to the completion of the previous one
//! rather than on a fixed wall-clock grid. The pending delay is a value
//! owned by the ticker: dropping or cancelling it guarantees the tick never
//! fires.

use std::future;
use std::pin::Pin;
use std::time::Duration;

use tokio::time::Sleep;

#[derive(Debug)]
pub struct Ticker {
    interval: Duration,
    pending: Option<Pin<Box<Sleep>>>,
}

impl Ticker {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            pending: None,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    /// Schedule the next tick one interval from now, replacing any pending one.
    ///
    /// Must be called from within a tokio runtime with the time driver enabled.
    pub fn arm(&mut self) {
        self.pending = Some(Box::pin(tokio::time::sleep(self.interval)));
    }

    /// Drop the pending tick. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Wait for the pending tick. Never resolves while disarmed.
    ///
    /// Cancel-safe: if this future is dropped before it resolves, the tick
    /// stays armed with its original deadline.
    pub async fn fired(&mut self) {
        match self.pending.as_mut() {
            Some(sleep) => sleep.as_mut().await,
            None => future::pending::<()>().await,
        }
        self.pending = None;
    }
}
