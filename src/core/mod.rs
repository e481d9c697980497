//! Core game logic - pure, deterministic, and testable
//!
//! This module contains the rules, state machine, and bot logic.
//! It has zero dependencies on UI or I/O, making it:
//!
//! - **Deterministic**: the bot is a fixed cascade, no randomness anywhere
//! - **Testable**: every rule and edge case has unit coverage
//! - **Portable**: runs headless or behind any front end
//!
//! # Module Structure
//!
//! - [`board`]: 3x3 board as a flat 9-cell array
//! - [`rules`]: outcome detection over the 8 fixed winning lines
//! - [`heuristic`]: the bot's priority cascade (win, block, center, corner, side)
//! - [`session`]: match state machine - turns, scoring, round lifecycle, and
//!   the deferred computer move
//! - [`snapshot`]: flat copy of observable state for presentation
//!
//! # Example
//!
//! ```
//! use tui_xo::core::MatchSession;
//! use tui_xo::types::{Mode, Player, AI_MOVE_DELAY_MS};
//!
//! let mut session = MatchSession::new();
//! session.set_mode(Mode::PvC);
//!
//! // Human X takes a corner; the bot's reply is deferred.
//! session.request_move(0).unwrap();
//! assert!(session.ai_pending());
//!
//! // The host loop drives timers; the bot answers with the center.
//! session.tick(AI_MOVE_DELAY_MS);
//! assert_eq!(session.board().get(4), Some(Some(Player::O)));
//! ```

pub mod board;
pub mod heuristic;
pub mod rules;
pub mod session;
pub mod snapshot;

// Re-export commonly used types for convenience
pub use board::Board;
pub use heuristic::choose_move;
pub use rules::{detect, WIN_LINES};
pub use session::{MatchSession, Scoreboard, AI_PLAYER};
pub use snapshot::MatchSnapshot;
