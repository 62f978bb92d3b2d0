// src/main.rs
use anyhow::Result;
use clap::Parser;

use voicecheckr::cli::{self, Args};

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let code = cli::run(&args)?;
    std::process::exit(code);
}
