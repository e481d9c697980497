//! Terminal presentation: pure view building plus the raw-mode renderer.

pub mod game_view;
pub mod renderer;

pub use game_view::GameView;
pub use renderer::TerminalRenderer;
