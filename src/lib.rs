//! Counting contestant for the lowest unique positive integer game.
//!
//! Every round each player secretly picks an integer in `[1, m]`. The
//! orchestrator tells us the parameters once per game, asks for our move,
//! and then reports every player's selection. From those reports we replay
//! which value would have won had we joined it, keep a running tally of those
//! wins, and propose the value with the most wins next time.
//!
//! ## Modules
//!
//! - [`Setup`] — game parameters from `start`
//! - [`Round`], [`Tally`] — one reported round and its opponent histogram
//! - [`Wins`] — cumulative replayed wins and best-move selection
//! - [`Player`] — strategy seam, with [`Counter`] and [`Fish`]
//! - [`Session`] — state machine tying the above together
//! - [`Tokens`], [`Command`] — whitespace token protocol
//! - [`Contestant`] — the blocking request/response loop
#[cfg(feature = "cli")]
mod args;
mod command;
mod contestant;
mod error;
mod player;
mod round;
mod session;
mod setup;
mod standings;
mod tokens;
mod wins;

#[cfg(feature = "cli")]
pub use args::*;
pub use command::*;
pub use contestant::*;
pub use error::*;
pub use player::*;
pub use round::*;
pub use session::*;
pub use setup::*;
pub use standings::*;
pub use tokens::*;
pub use wins::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// A selectable value in `[1, m]`. Zero marks a player with no move.
pub type Value = usize;
/// 1-indexed player number.
pub type Seat = usize;

// ============================================================================
// PROTOCOL CONSTANTS
// ============================================================================
/// Readiness token written once before any command is read.
pub const READY: &str = "ready";
/// Move proposed before any round has produced evidence.
pub const DEFAULT_MOVE: Value = 1;
/// Selection the orchestrator reports for a player that did not move.
pub const NO_MOVE: Value = 0;
/// Largest player count a `start` may announce.
pub const MAX_PLAYERS: usize = 1 << 16;
/// Largest max value a `start` may announce. Tallies are sized by it.
pub const MAX_OPTIONS: Value = 1 << 20;
/// Environment fallback for `--seed`.
pub const SEED_VAR: &str = "LOWEST_UNIQUE_SEED";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize logging on stderr, since stdout carries the protocol.
/// With a directory, also writes DEBUG level to a timestamped file there.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter, dir: Option<&std::path::Path>) -> anyhow::Result<()> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let term: Box<dyn simplelog::SharedLogger> = simplelog::TermLogger::new(
        level,
        config.clone(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    let mut loggers = vec![term];
    if let Some(dir) = dir {
        std::fs::create_dir_all(dir)?;
        let time = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)?
            .as_secs();
        let file = std::fs::File::create(dir.join(format!("{}.log", time)))?;
        loggers.push(simplelog::WriteLogger::new(
            log::LevelFilter::Debug,
            config,
            file,
        ));
    }
    simplelog::CombinedLogger::init(loggers)?;
    Ok(())
}

/// Seed from the environment, if set and numeric.
pub fn seed_from_env() -> Option<u64> {
    std::env::var(SEED_VAR)
        .ok()
        .and_then(|s| s.trim().parse::<u64>().ok())
}
