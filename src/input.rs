//! Key mapping for terminal environments.
//!
//! Digits 1-9 address cells left-to-right, top-to-bottom (row-major, matching
//! the board's index order).

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::GameCommand;

/// Map a pressed key to an engine command
pub fn handle_key(code: KeyCode) -> Option<GameCommand> {
    match code {
        KeyCode::Char(c @ '1'..='9') => {
            Some(GameCommand::PlaceMark(c as usize - '1' as usize))
        }
        KeyCode::Char('m') | KeyCode::Char('M') => Some(GameCommand::ToggleMode),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(GameCommand::NewRound),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameCommand::RestartRound),
        KeyCode::Char('f') | KeyCode::Char('F') => Some(GameCommand::FullReset),
        _ => None,
    }
}

/// Quit on `q`, Esc, or Ctrl-C
pub fn should_quit(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char('c') | KeyCode::Char('C') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}
