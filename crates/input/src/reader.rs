//! Blocking event reader.

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::debug;

use crate::map::{handle_key_event, should_quit};
use crate::types::GameAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Action(GameAction),
    Quit,
    Resize,
}

/// Translate a terminal event. Key releases are ignored.
pub fn translate(event: Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Release => None,
        Event::Key(key) if should_quit(key) => Some(InputEvent::Quit),
        Event::Key(key) => handle_key_event(key).map(InputEvent::Action),
        Event::Resize(..) => Some(InputEvent::Resize),
        _ => None,
    }
}

/// Read terminal events until `sink` returns false or a quit key is seen.
///
/// Blocks the calling thread; run it off the game loop.
pub fn forward_blocking(mut sink: impl FnMut(InputEvent) -> bool) -> Result<()> {
    loop {
        let event = event::read().context("reading terminal event")?;
        let Some(input) = translate(event) else {
            continue;
        };
        if !sink(input) {
            debug!("input sink closed");
            return Ok(());
        }
        if input == InputEvent::Quit {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::from(code))
    }

    #[test]
    fn test_translate_press() {
        assert_eq!(
            translate(press(KeyCode::Left)),
            Some(InputEvent::Action(GameAction::MoveLeft))
        );
        assert_eq!(translate(press(KeyCode::Char('q'))), Some(InputEvent::Quit));
        assert_eq!(translate(press(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_translate_ignores_release() {
        let release = Event::Key(KeyEvent {
            code: KeyCode::Left,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(translate(release), None);
    }

    #[test]
    fn test_translate_resize() {
        assert_eq!(translate(Event::Resize(80, 24)), Some(InputEvent::Resize));
        assert_eq!(translate(Event::FocusGained), None);
    }
}
