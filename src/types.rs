//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Number of cells on the 3x3 board.
pub const BOARD_CELLS: usize = 9;

/// Game timing constants (in milliseconds)
pub const TICK_MS: u32 = 16;
/// Pacing delay before the computer's move lands. Purely cosmetic.
pub const AI_MOVE_DELAY_MS: u32 = 350;

/// A player's mark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// The opposing player
    pub fn other(&self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert to display string
    pub fn as_str(&self) -> &'static str {
        match self {
            Player::X => "X",
            Player::O => "O",
        }
    }
}

/// Cell on the board (None = empty, Some = marked by a player)
pub type Cell = Option<Player>;

/// A winning line: three board indices
pub type Line = [usize; 3];

/// Terminal/non-terminal classification of a board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Win { player: Player, line: Line },
    Draw,
}

impl Outcome {
    /// Whether the round is over (no further moves accepted)
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win { player, .. } => Some(*player),
            _ => None,
        }
    }

    /// The completed line when the round was won
    pub fn win_line(&self) -> Option<Line> {
        match self {
            Outcome::Win { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// Match mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Player vs player
    PvP,
    /// Player vs computer (O is the computer)
    PvC,
}

impl Mode {
    pub fn toggled(&self) -> Self {
        match self {
            Mode::PvP => Mode::PvC,
            Mode::PvC => Mode::PvP,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::PvP => "Two Players",
            Mode::PvC => "Vs Computer",
        }
    }
}

/// Why a move request was rejected. All rejections are no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    InvalidIndex,
    CellOccupied,
    NotYourTurn,
    RoundAlreadyOver,
}

impl MoveError {
    pub fn code(self) -> &'static str {
        match self {
            MoveError::InvalidIndex => "invalid_index",
            MoveError::CellOccupied => "cell_occupied",
            MoveError::NotYourTurn => "not_your_turn",
            MoveError::RoundAlreadyOver => "round_already_over",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            MoveError::InvalidIndex => "cell index outside the 0-8 range",
            MoveError::CellOccupied => "target cell is already marked",
            MoveError::NotYourTurn => "acting player does not hold the turn",
            MoveError::RoundAlreadyOver => "round already ended in a win or draw",
        }
    }
}

/// Commands the presentation layer can issue against the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    /// Place the current player's mark at a cell (0-8)
    PlaceMark(usize),
    ToggleMode,
    NewRound,
    RestartRound,
    FullReset,
}
