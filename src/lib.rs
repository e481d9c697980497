//! TUI X/O - a terminal tic-tac-toe with PvP/PvC modes and round scoring.
//!
//! The playable rules live in [`core`] and know nothing about terminals;
//! [`term`] and [`input`] are the thin presentation collaborators used by the
//! default binary.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
