//! Terminal Tetris runner (default binary).
//!
//! Sets up logging, seeds the piece RNG from the wall clock, takes over the
//! terminal and hands control to the tick loop. The terminal is restored
//! whether the loop ends normally or with an error.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use log::info;

use term_tetris::core::GameSession;
use term_tetris::engine::{self, RunSummary, ThreadTicker};
use term_tetris::input::TerminalInput;
use term_tetris::term::TerminalDisplay;

fn main() -> Result<()> {
    // Off unless RUST_LOG says otherwise; stderr shares the screen with the game.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();

    let seed = wall_clock_seed();
    info!("seed {}", seed);

    let mut display = TerminalDisplay::new();
    let result = display.enter().and_then(|()| play(&mut display, seed));

    // Always try to restore terminal state.
    let restored = display.exit();
    let summary = result?;
    restored?;

    info!(
        "played {} game(s), last score {}, best score {}",
        summary.games, summary.last_score, summary.best_score
    );
    println!("Thanks for playing! Best score: {}", summary.best_score);
    Ok(())
}

fn play(display: &mut TerminalDisplay, seed: u32) -> Result<RunSummary> {
    let mut session = GameSession::new(seed);
    let mut input = TerminalInput::new();
    let mut ticker = ThreadTicker;
    engine::run(&mut session, &mut input, display, &mut ticker)
}

fn wall_clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u32)
        .unwrap_or(1)
}
