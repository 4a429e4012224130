//! Contestant Binary
//!
//! Speaks the lowest-unique protocol on stdin/stdout. Logs go to stderr.
//!
//! Options: --strategy counting|random, --seed, --logs, -v, -q

use clap::Parser;
use lowest_unique::*;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    log(args.level(), args.logs.as_deref())?;
    log::info!("[main] playing {:?}", args.strategy);
    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();
    Contestant::new(stdin, stdout, args.player()).run()?;
    Ok(())
}
