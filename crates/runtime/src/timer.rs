//! Gravity timer - a repeating scheduled task with an explicit cancel handle.
//!
//! Each installed timer is a tokio task that pushes [`LoopEvent::Tick`]
//! into the session queue every period. Ticks carry the id of the timer
//! that produced them, so ticks a cancelled timer already queued can be
//! told apart and dropped.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::debug;

use crate::event::LoopEvent;

/// Identifies one installed timer
pub type TimerId = u64;

/// Handle to a running timer. Cancelling or dropping it stops the task.
#[derive(Debug)]
pub struct TimerHandle {
    id: TimerId,
    period: Duration,
    task: JoinHandle<()>,
}

impl TimerHandle {
    pub fn id(&self) -> TimerId {
        self.id
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn cancel(self) {
        debug!(id = self.id, "gravity timer cancelled");
        self.task.abort();
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Installs gravity timers feeding one event queue
#[derive(Debug)]
pub struct GravityTimer {
    events: mpsc::UnboundedSender<LoopEvent>,
    next_id: TimerId,
}

impl GravityTimer {
    pub fn new(events: mpsc::UnboundedSender<LoopEvent>) -> Self {
        Self { events, next_id: 0 }
    }

    /// Start a timer whose first tick fires one `period` from now.
    ///
    /// Must be called from inside a tokio runtime.
    pub fn schedule(&mut self, period: Duration) -> TimerHandle {
        self.next_id += 1;
        let id = self.next_id;
        let events = self.events.clone();

        let task = tokio::spawn(async move {
            let mut ticker = time::interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if events.send(LoopEvent::Tick(id)).is_err() {
                    break;
                }
            }
        });

        debug!(id, period_ms = period.as_millis() as u64, "gravity timer installed");
        TimerHandle { id, period, task }
    }
}
