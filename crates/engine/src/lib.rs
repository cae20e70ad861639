//! Fixed-period tick loop.
//!
//! The loop owns no state of its own. Input, output and the clock are behind
//! three small traits so the whole game can be driven headless in tests:
//!
//! - [`InputSource`]: non-blocking, at most one action per tick
//! - [`Display`]: draws a full [`GameSnapshot`]
//! - [`Ticker`]: the only place the loop suspends
//!
//! One tick is: check the top row, poll input, apply it, advance gravity,
//! render, sleep [`TICK_MS`].

use std::time::Duration;

use anyhow::Result;
use log::{debug, info};

use term_tetris_core::{GameSession, GameSnapshot};
use term_tetris_types::{GameAction, InputMode, SessionEnd, TICK_MS};

/// Source of player actions.
pub trait InputSource {
    /// Return the next pending action for `mode`, or `None` if there is none.
    /// Must not block.
    fn poll_action(&mut self, mode: InputMode) -> Result<Option<GameAction>>;
}

/// Sink for rendered frames.
pub trait Display {
    fn render(&mut self, frame: &GameSnapshot) -> Result<()>;
}

/// Suspends the loop between ticks.
pub trait Ticker {
    fn sleep(&mut self, period: Duration);
}

/// [`Ticker`] backed by `std::thread::sleep`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadTicker;

impl Ticker for ThreadTicker {
    fn sleep(&mut self, period: Duration) {
        std::thread::sleep(period);
    }
}

/// Length of one tick.
pub fn tick_period() -> Duration {
    Duration::from_millis(TICK_MS as u64)
}

/// Totals for a whole [`run`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Sessions that reached the game-over screen or were exited.
    pub games: u32,
    pub last_score: u32,
    pub best_score: u32,
}

impl RunSummary {
    fn record(&mut self, score: u32) {
        self.games += 1;
        self.last_score = score;
        self.best_score = self.best_score.max(score);
    }
}

/// Drive `session` until it ends. Restarts chosen from the pause menu happen
/// inside the session and do not return.
pub fn run_session<I, D, T>(
    session: &mut GameSession,
    input: &mut I,
    display: &mut D,
    ticker: &mut T,
) -> Result<SessionEnd>
where
    I: InputSource + ?Sized,
    D: Display + ?Sized,
    T: Ticker + ?Sized,
{
    let mut frame = GameSnapshot::default();
    let period = tick_period();

    loop {
        // A locked cell in the top row ends the game before any input of
        // this tick is seen, paused or not.
        if session.check_top_out() {
            debug!("top row occupied at tick start");
        } else {
            let mode = session.phase().input_mode();
            if let Some(action) = input.poll_action(mode)? {
                let changed = session.apply_action(action);
                debug!("{} in {:?}: changed={}", action.as_str(), mode, changed);
            }
            session.tick();
        }

        session.snapshot_into(&mut frame);
        display.render(&frame)?;

        if let Some(end) = session.session_end() {
            return Ok(end);
        }

        ticker.sleep(period);
    }
}

/// Play sessions back to back until the player leaves.
///
/// An exited session ends the run. A topped-out one keeps showing the
/// game-over frame until the player picks replay or quit.
pub fn run<I, D, T>(
    session: &mut GameSession,
    input: &mut I,
    display: &mut D,
    ticker: &mut T,
) -> Result<RunSummary>
where
    I: InputSource + ?Sized,
    D: Display + ?Sized,
    T: Ticker + ?Sized,
{
    let mut summary = RunSummary::default();

    loop {
        let end = run_session(session, input, display, ticker)?;
        summary.record(session.score());
        info!(
            "session {} ended ({}): score={} lines={}",
            session.episode_id(),
            end.as_str(),
            session.score(),
            session.lines()
        );

        match end {
            SessionEnd::Exited => return Ok(summary),
            SessionEnd::ToppedOut => {
                if !wait_for_replay(session, input, display, ticker)? {
                    return Ok(summary);
                }
                session.restart();
            }
        }
    }
}

fn wait_for_replay<I, D, T>(
    session: &GameSession,
    input: &mut I,
    display: &mut D,
    ticker: &mut T,
) -> Result<bool>
where
    I: InputSource + ?Sized,
    D: Display + ?Sized,
    T: Ticker + ?Sized,
{
    let frame = session.snapshot();
    let period = tick_period();

    loop {
        display.render(&frame)?;
        match input.poll_action(InputMode::GameOver)? {
            Some(GameAction::Restart) => return Ok(true),
            Some(GameAction::Quit) => return Ok(false),
            _ => {}
        }
        ticker.sleep(period);
    }
}
