//! Match session - the round/match state machine
//!
//! `MatchSession` owns the board, turn order, outcome, scoreboard, and the
//! starting-player alternation. All mutation flows through its operations;
//! every accepted operation bumps a turn token so a deferred computer move
//! armed against an older state can never fire against a newer one.
//!
//! The deferred move itself is a cooperative one-shot millisecond countdown:
//! the host loop calls [`MatchSession::tick`] every frame and the session
//! re-validates its own state when the countdown expires.

use crate::core::{heuristic, rules, Board};
use crate::types::{Mode, MoveError, Outcome, Player, AI_MOVE_DELAY_MS, BOARD_CELLS};

/// The computer's mark under PvC mode
pub const AI_PLAYER: Player = Player::O;

/// Per-match win/draw tallies. Monotonic until a full reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
}

impl Scoreboard {
    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win {
                player: Player::X, ..
            } => self.x_wins += 1,
            Outcome::Win {
                player: Player::O, ..
            } => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::InProgress => {}
        }
    }

    /// Rounds finished since the last full reset
    pub fn completed_rounds(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

/// A deferred computer move waiting for its pacing delay to elapse
#[derive(Debug, Clone, Copy)]
struct PendingAiMove {
    remaining_ms: u32,
    /// Turn token captured when the move was armed; a mismatch at expiry
    /// means the state changed underneath and the fire is dropped.
    token: u32,
}

/// Complete match state
#[derive(Debug, Clone)]
pub struct MatchSession {
    board: Board,
    current_player: Player,
    outcome: Outcome,
    mode: Mode,
    scores: Scoreboard,
    /// Player who started the round in progress (restart resumes with them)
    round_starter: Player,
    /// Player who starts the next round
    next_round_starter: Player,
    /// Bumped on every state change; guards deferred fires against staleness
    turn_token: u32,
    pending_ai: Option<PendingAiMove>,
}

impl MatchSession {
    /// Create a fresh match: empty board, X to move, PvP, zero scores
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            outcome: Outcome::InProgress,
            mode: Mode::PvP,
            scores: Scoreboard::default(),
            round_starter: Player::X,
            next_round_starter: Player::O,
            turn_token: 0,
            pending_ai: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn scores(&self) -> Scoreboard {
        self.scores
    }

    pub fn round_starter(&self) -> Player {
        self.round_starter
    }

    /// Whether a deferred computer move is armed
    pub fn ai_pending(&self) -> bool {
        self.pending_ai.is_some()
    }

    /// Status line for the presentation layer
    pub fn status(&self) -> String {
        match self.outcome {
            Outcome::Win { player, .. } => format!("Winner: {}", player.as_str()),
            Outcome::Draw => "Draw!".to_string(),
            Outcome::InProgress => format!("Turn: {}", self.current_player.as_str()),
        }
    }

    /// Validate a move without applying it. A rejection changes nothing.
    ///
    /// Every caller of [`apply_move`](Self::apply_move) goes through this,
    /// including the computer's own path (whose turn/identity checks are
    /// satisfied by construction).
    pub fn check_move(&self, cell: usize, acting: Player) -> Result<(), MoveError> {
        if self.outcome.is_terminal() {
            return Err(MoveError::RoundAlreadyOver);
        }
        if cell >= BOARD_CELLS {
            return Err(MoveError::InvalidIndex);
        }
        if !self.board.is_free(cell) {
            return Err(MoveError::CellOccupied);
        }
        if acting != self.current_player {
            return Err(MoveError::NotYourTurn);
        }
        Ok(())
    }

    /// Human-originated move request; the acting player is the turn holder.
    ///
    /// Under PvC the human may not move on the computer's turn. A finished
    /// round still reports `RoundAlreadyOver`, never `NotYourTurn`.
    pub fn request_move(&mut self, cell: usize) -> Result<(), MoveError> {
        if !self.outcome.is_terminal()
            && self.mode == Mode::PvC
            && self.current_player == AI_PLAYER
        {
            return Err(MoveError::NotYourTurn);
        }
        self.apply_move(cell, self.current_player)
    }

    /// Validate and apply a move. On acceptance the cell is written, the
    /// outcome re-detected, and either the scoreboard records a terminal
    /// outcome or the turn passes to the other player.
    pub fn apply_move(&mut self, cell: usize, player: Player) -> Result<(), MoveError> {
        self.check_move(cell, player)?;

        self.board.set(cell, Some(player));
        self.outcome = rules::detect(&self.board);

        if self.outcome.is_terminal() {
            self.scores.record(self.outcome);
        } else {
            self.current_player = player.other();
        }

        self.state_changed();
        Ok(())
    }

    /// Switch mode. Takes effect immediately: leaving PvC cancels any armed
    /// computer move, entering PvC on the computer's turn arms one.
    pub fn set_mode(&mut self, mode: Mode) {
        if self.mode == mode {
            return;
        }
        self.mode = mode;
        self.state_changed();
    }

    /// Begin the next round with the alternated starting player.
    ///
    /// No-op while a round is still in progress, so an accidental command can
    /// never wipe a live board.
    pub fn start_new_round(&mut self) {
        if !self.outcome.is_terminal() {
            return;
        }
        self.round_starter = self.next_round_starter;
        self.next_round_starter = self.next_round_starter.other();
        self.begin_round();
    }

    /// Replay the round in progress: same starting player, scores and the
    /// alternation sequence untouched.
    pub fn restart_current_round(&mut self) {
        self.begin_round();
    }

    /// Clear everything: board, outcome, scoreboard, and alternation
    /// (X starts again). Mode is preserved.
    pub fn full_reset(&mut self) {
        self.scores = Scoreboard::default();
        self.round_starter = Player::X;
        self.next_round_starter = Player::O;
        self.begin_round();
    }

    /// Advance the deferred-move countdown by `elapsed_ms`.
    ///
    /// Returns true when a computer move landed this tick. On expiry the
    /// session re-reads its own state; a stale token, a mode switch, a
    /// terminal outcome, or a turn change all silently drop the fire.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        let Some(mut pending) = self.pending_ai else {
            return false;
        };

        pending.remaining_ms = pending.remaining_ms.saturating_sub(elapsed_ms);
        if pending.remaining_ms > 0 {
            self.pending_ai = Some(pending);
            return false;
        }

        self.pending_ai = None;
        if pending.token != self.turn_token {
            return false;
        }
        if self.mode != Mode::PvC
            || self.outcome.is_terminal()
            || self.current_player != AI_PLAYER
        {
            return false;
        }

        let Some(cell) = heuristic::choose_move(&self.board, AI_PLAYER, AI_PLAYER.other()) else {
            return false;
        };
        self.apply_move(cell, AI_PLAYER).is_ok()
    }

    fn begin_round(&mut self) {
        self.board.clear();
        self.outcome = Outcome::InProgress;
        self.current_player = self.round_starter;
        self.state_changed();
    }

    fn state_changed(&mut self) {
        self.turn_token = self.turn_token.wrapping_add(1);
        self.sync_ai_schedule();
    }

    /// Re-arm or cancel the deferred computer move to match current state.
    /// At most one timer is ever live.
    fn sync_ai_schedule(&mut self) {
        let awaiting_ai = self.mode == Mode::PvC
            && !self.outcome.is_terminal()
            && self.current_player == AI_PLAYER;

        self.pending_ai = awaiting_ai.then_some(PendingAiMove {
            remaining_ms: AI_MOVE_DELAY_MS,
            token: self.turn_token,
        });
    }
}

impl Default for MatchSession {
    fn default() -> Self {
        Self::new()
    }
}
