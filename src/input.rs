//! Keyboard input source
//!
//! Reads raw key events from the terminal and classifies them into the few
//! inputs the game understands. Raw mode is held for the lifetime of the
//! `InputSource` and released in `Drop`, so the terminal is restored on
//! every exit path, including error returns.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;

/// A classified key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Space: starts the wheel when idle, stops it when spinning
    Toggle,
    /// Ctrl+C, Esc or q: leave the game
    Quit,
    /// Anything else is ignored
    Other,
}

/// Classify a raw key event. Pure, so the mapping can be tested without a
/// terminal.
pub fn classify(event: &KeyEvent) -> Key {
    if event.modifiers.contains(KeyModifiers::CONTROL) {
        return match event.code {
            KeyCode::Char('c') | KeyCode::Char('C') => Key::Quit,
            _ => Key::Other,
        };
    }
    match event.code {
        KeyCode::Char(' ') => Key::Toggle,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Key::Quit,
        _ => Key::Other,
    }
}

/// Blocking keyboard source backed by the terminal in raw mode
pub struct InputSource {
    active: bool,
}

impl InputSource {
    /// Put the terminal into raw mode and start reading keys.
    pub fn open() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self { active: true })
    }

    /// Block until the next key press and classify it. Non-key events
    /// (resize, mouse) and key releases are skipped.
    pub fn next_key(&mut self) -> io::Result<Key> {
        loop {
            if let Event::Key(key_event) = event::read()? {
                if key_event.kind != KeyEventKind::Press {
                    continue;
                }
                return Ok(classify(&key_event));
            }
        }
    }

    /// Restore the terminal early, before the goodbye line is printed.
    pub fn close(&mut self) -> io::Result<()> {
        if self.active {
            self.active = false;
            terminal::disable_raw_mode()?;
        }
        Ok(())
    }
}

impl Drop for InputSource {
    fn drop(&mut self) {
        if self.active {
            let _ = terminal::disable_raw_mode();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_event(code: KeyCode, mods: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, mods)
    }

    #[test]
    fn test_space_toggles() {
        let event = key_event(KeyCode::Char(' '), KeyModifiers::NONE);
        assert_eq!(classify(&event), Key::Toggle);
    }

    #[test]
    fn test_quit_keys() {
        let event = key_event(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(classify(&event), Key::Quit);

        let event = key_event(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(classify(&event), Key::Quit);

        let event = key_event(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(classify(&event), Key::Quit);
    }

    #[test]
    fn test_other_keys_ignored() {
        let event = key_event(KeyCode::Char('a'), KeyModifiers::NONE);
        assert_eq!(classify(&event), Key::Other);

        let event = key_event(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(classify(&event), Key::Other);

        // Ctrl+Q is not a quit chord, only plain q is
        let event = key_event(KeyCode::Char('q'), KeyModifiers::CONTROL);
        assert_eq!(classify(&event), Key::Other);
    }
}
