use super::*;
use clap::Parser;
use clap::ValueEnum;
use std::path::PathBuf;

/// Strategies selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Replay every round and play the value with the most replayed wins.
    Counting,
    /// Pick uniformly at random.
    Random,
}

/// Plays the lowest unique positive integer game over stdin/stdout.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[arg(long, value_enum, default_value_t = Strategy::Counting)]
    pub strategy: Strategy,
    #[arg(long, help = "Seed for the random strategy (falls back to LOWEST_UNIQUE_SEED)")]
    pub seed: Option<u64>,
    #[arg(long, help = "Also write debug logs to a timestamped file in this directory")]
    pub logs: Option<PathBuf>,
    #[arg(short, long, conflicts_with = "quiet", help = "Log every round to stderr")]
    pub verbose: bool,
    #[arg(short, long, help = "Only log warnings and errors")]
    pub quiet: bool,
}

impl Args {
    pub fn level(&self) -> log::LevelFilter {
        match (self.verbose, self.quiet) {
            (true, _) => log::LevelFilter::Debug,
            (_, true) => log::LevelFilter::Warn,
            _ => log::LevelFilter::Info,
        }
    }
    pub fn seed(&self) -> Option<u64> {
        self.seed.or_else(seed_from_env)
    }
    /// Build the configured player.
    pub fn player(&self) -> Box<dyn Player> {
        match (self.strategy, self.seed()) {
            (Strategy::Counting, _) => Box::new(Counter::default()),
            (Strategy::Random, Some(seed)) => Box::new(Fish::seeded(seed)),
            (Strategy::Random, None) => Box::new(Fish::default()),
        }
    }
}
