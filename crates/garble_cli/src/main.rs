mod args;
mod run;

use std::io;

use clap::Parser;
use garble_logging::LogDestination;

use crate::args::Args;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let destination = match &args.log_file {
        Some(path) => LogDestination::Both(path.clone()),
        None => LogDestination::Terminal,
    };
    garble_logging::initialize(destination, args.log_level.into());

    let stdin = io::stdin();
    let stdout = io::stdout();
    run::run(&args, stdin.lock(), stdout.lock())
}
