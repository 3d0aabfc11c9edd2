use crate::timer::TimerId;
use crate::types::GameAction;

/// Everything the session loop reacts to, in arrival order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopEvent {
    /// One of the five player actions
    Input(GameAction),
    /// Gravity tick from the timer with this id
    Tick(TimerId),
    /// Repaint without touching game state (terminal resize)
    Redraw,
    /// Leave the loop
    Quit,
}
