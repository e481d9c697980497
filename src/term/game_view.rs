//! GameView: maps a `MatchSnapshot` into terminal lines.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::MatchSnapshot;
use crate::types::Outcome;

/// A lightweight text renderer for the X/O board and match status.
#[derive(Debug, Default)]
pub struct GameView;

impl GameView {
    /// Render the snapshot into display lines, top to bottom.
    pub fn render(&self, snap: &MatchSnapshot) -> Vec<String> {
        let scores = snap.scores;
        let mut lines = vec![
            "tui-xo".to_string(),
            format!(
                "Mode: {}    X: {}  O: {}  =: {}",
                snap.mode.as_str(),
                scores.x_wins,
                scores.o_wins,
                scores.draws
            ),
            self.status_line(snap),
            String::new(),
        ];

        for row in 0..3 {
            let base = row * 3;
            lines.push(format!(
                "  {}|{}|{}",
                self.cell(snap, base),
                self.cell(snap, base + 1),
                self.cell(snap, base + 2)
            ));
            if row < 2 {
                lines.push("  ---+---+---".to_string());
            }
        }

        lines.push(String::new());
        lines.push(
            "[1-9] place  [m] mode  [n] new round  [r] restart  [f] reset  [q] quit".to_string(),
        );
        lines
    }

    fn status_line(&self, snap: &MatchSnapshot) -> String {
        match snap.outcome {
            Outcome::Win { player, .. } => format!("Winner: {}", player.as_str()),
            Outcome::Draw => "Draw!".to_string(),
            Outcome::InProgress if snap.ai_pending => {
                format!("Turn: {} (thinking...)", snap.current_player.as_str())
            }
            Outcome::InProgress => format!("Turn: {}", snap.current_player.as_str()),
        }
    }

    /// One cell, three columns wide. Winning cells are bracketed, empty
    /// cells show their key digit as a placement hint.
    fn cell(&self, snap: &MatchSnapshot, idx: usize) -> String {
        let on_win_line = snap
            .win_line()
            .is_some_and(|line| line.contains(&idx));

        match snap.board[idx] {
            Some(player) if on_win_line => format!("[{}]", player.as_str()),
            Some(player) => format!(" {} ", player.as_str()),
            None => format!(" {} ", idx + 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MatchSession;
    use crate::types::Mode;

    #[test]
    fn renders_marks_and_hints() {
        let mut session = MatchSession::new();
        session.request_move(0).unwrap();

        let lines = GameView.render(&session.snapshot());
        assert_eq!(lines[4], "   X | 2 | 3 ");
        assert!(lines[2].contains("Turn: O"));
        assert!(lines[1].contains("Two Players"));
    }

    #[test]
    fn highlights_winning_line() {
        let mut session = MatchSession::new();
        for cell in [0, 4, 1, 5, 2] {
            session.request_move(cell).unwrap();
        }

        let lines = GameView.render(&session.snapshot());
        assert_eq!(lines[4], "  [X]|[X]|[X]");
        assert!(lines[2].contains("Winner: X"));
    }

    #[test]
    fn shows_thinking_while_bot_move_is_pending() {
        let mut session = MatchSession::new();
        session.set_mode(Mode::PvC);
        session.request_move(0).unwrap();

        let lines = GameView.render(&session.snapshot());
        assert!(lines[2].contains("(thinking...)"));
        assert!(lines[1].contains("Vs Computer"));
    }
}
