//! Flat, copyable view of the observable match state.
//!
//! The presentation layer renders from this instead of borrowing session
//! internals, so a frame never holds the session across I/O.

use crate::core::{MatchSession, Scoreboard};
use crate::types::{Cell, Line, Mode, Outcome, Player, BOARD_CELLS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSnapshot {
    pub board: [Cell; BOARD_CELLS],
    pub current_player: Player,
    pub outcome: Outcome,
    pub scores: Scoreboard,
    pub mode: Mode,
    /// A deferred computer move is armed
    pub ai_pending: bool,
}

impl MatchSnapshot {
    /// Cells of the winning line, when the round was won
    pub fn win_line(&self) -> Option<Line> {
        self.outcome.win_line()
    }

    pub fn playable(&self) -> bool {
        !self.outcome.is_terminal()
    }
}

impl From<&MatchSession> for MatchSnapshot {
    fn from(session: &MatchSession) -> Self {
        Self {
            board: *session.board().cells(),
            current_player: session.current_player(),
            outcome: session.outcome(),
            scores: session.scores(),
            mode: session.mode(),
            ai_pending: session.ai_pending(),
        }
    }
}

impl MatchSession {
    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot::from(self)
    }
}
