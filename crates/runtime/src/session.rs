//! Session - the single execution context of a running game.
//!
//! Owns the engine, the frontend and the gravity timer. Input actions and
//! timer ticks arrive on one queue and are handled one at a time, so an
//! engine operation never interleaves with another. After each event the
//! engine's events are dispatched (timer restarts, score text, game-over
//! notice) and the frontend redraws.

use std::ops::ControlFlow;
use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::core::{Engine, EngineEvent, GameSnapshot};
use crate::event::LoopEvent;
use crate::frontend::{score_text, Frontend};
use crate::timer::{GravityTimer, TimerHandle};

pub struct Session<F> {
    engine: Engine,
    frontend: F,
    timer: GravityTimer,
    gravity: Option<TimerHandle>,
    snapshot: GameSnapshot,
}

impl<F: Frontend> Session<F> {
    /// `events` is the sending side of the queue the loop reads; gravity
    /// ticks are pushed into it.
    pub fn new(engine: Engine, frontend: F, events: mpsc::UnboundedSender<LoopEvent>) -> Self {
        Self {
            engine,
            frontend,
            timer: GravityTimer::new(events),
            gravity: None,
            snapshot: GameSnapshot::default(),
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut Engine {
        &mut self.engine
    }

    pub fn frontend(&self) -> &F {
        &self.frontend
    }

    /// The live gravity timer, if any
    pub fn gravity(&self) -> Option<&TimerHandle> {
        self.gravity.as_ref()
    }

    /// Handle one event. `Break` means the loop should stop.
    pub fn handle(&mut self, event: LoopEvent) -> Result<ControlFlow<()>> {
        match event {
            LoopEvent::Input(action) => {
                debug!(action = action.as_str(), "input");
                self.engine.apply_action(action);
            }
            LoopEvent::Tick(id) => {
                if self.gravity.as_ref().map(TimerHandle::id) != Some(id) {
                    debug!(id, "dropping tick from a cancelled timer");
                    return Ok(ControlFlow::Continue(()));
                }
                self.engine.step();
            }
            LoopEvent::Redraw => {}
            LoopEvent::Quit => {
                self.stop_gravity();
                return Ok(ControlFlow::Break(()));
            }
        }

        self.dispatch_engine_events()?;
        self.redraw()?;
        Ok(ControlFlow::Continue(()))
    }

    fn dispatch_engine_events(&mut self) -> Result<()> {
        for event in self.engine.take_events() {
            match event {
                EngineEvent::Started => {
                    info!(seed = self.engine.seed(), "game started");
                    let interval = self.engine.tick_interval_ms();
                    self.install_gravity(interval);
                }
                EngineEvent::ScoreChanged(score) => {
                    self.frontend.show_score(&score_text(score))?;
                }
                EngineEvent::PieceLocked => debug!("piece locked"),
                EngineEvent::LinesCleared(lines) => {
                    info!(lines, score = self.engine.score(), "lines cleared");
                }
                EngineEvent::IntervalChanged(interval) => {
                    info!(interval_ms = interval, "gravity interval changed");
                    self.install_gravity(interval);
                }
                EngineEvent::GameOver => {
                    let score = self.engine.score();
                    info!(score, "game over");
                    self.stop_gravity();
                    self.frontend.notify_game_over(score)?;
                }
            }
        }
        Ok(())
    }

    /// Replace the live timer; the old one is cancelled first.
    fn install_gravity(&mut self, interval_ms: u32) {
        self.stop_gravity();
        let period = Duration::from_millis(interval_ms as u64);
        self.gravity = Some(self.timer.schedule(period));
    }

    pub fn stop_gravity(&mut self) {
        if let Some(handle) = self.gravity.take() {
            handle.cancel();
        }
    }

    pub fn redraw(&mut self) -> Result<()> {
        self.engine.snapshot_into(&mut self.snapshot);
        self.frontend.redraw(&self.snapshot)
    }
}

/// Drive `session` from `events` until a `Quit` arrives.
pub async fn run<F: Frontend>(
    session: &mut Session<F>,
    events: &mut mpsc::UnboundedReceiver<LoopEvent>,
) -> Result<()> {
    session.redraw()?;
    while let Some(event) = events.recv().await {
        if session.handle(event)?.is_break() {
            break;
        }
    }
    session.stop_gravity();
    Ok(())
}
