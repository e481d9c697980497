//! Terminal X/O runner (default binary).
//!
//! Runs a fixed-timestep loop: render, poll input with a timeout until the
//! next tick, then advance the session's timers so a deferred computer move
//! can land.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_xo::core::MatchSession;
use tui_xo::input::{handle_key, should_quit};
use tui_xo::term::{GameView, TerminalRenderer};
use tui_xo::types::{GameCommand, TICK_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut session = MatchSession::new();
    let view = GameView;

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let lines = view.render(&session.snapshot());
        term.draw(&lines)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(command) = handle_key(key.code) {
                        dispatch(&mut session, command);
                    }
                }
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            session.tick(TICK_MS);
        }
    }
}

fn dispatch(session: &mut MatchSession, command: GameCommand) {
    match command {
        // Rejected moves are silent no-ops; the status line already tells
        // the player whose turn it is.
        GameCommand::PlaceMark(cell) => {
            let _ = session.request_move(cell);
        }
        GameCommand::ToggleMode => session.set_mode(session.mode().toggled()),
        GameCommand::NewRound => session.start_new_round(),
        GameCommand::RestartRound => session.restart_current_round(),
        GameCommand::FullReset => session.full_reset(),
    }
}
