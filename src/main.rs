mod app;
mod food;
mod game;
mod grid;
mod input;
mod render;
mod snake;
mod term;

use std::{fs::File, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use rand::{SeedableRng, rngs::StdRng};
use simplelog::{Config, LevelFilter, WriteLogger};

pub type TermInt = u16;
pub type Coords = (TermInt, TermInt);

/// Terminal snake: eat the food, don't hit the walls or yourself.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Seed for food placement, for replaying the same game
    #[arg(long)]
    seed: Option<u64>,

    /// File the log is written to
    #[arg(long, default_value = "snake.log")]
    log_file: PathBuf,

    /// Log debug messages too
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // The terminal belongs to the game, so logs go to a file
    let level = if args.verbose { LevelFilter::Debug } else { LevelFilter::Info };
    let log_file = File::create(&args.log_file)
        .with_context(|| format!("Failed to create log file {}", args.log_file.display()))?;
    WriteLogger::init(level, Config::default(), log_file).context("Failed to initialize logger")?;

    let rng = match args.seed {
        Some(seed) => {
            info!("Starting snake with seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => {
            info!("Starting snake");
            StdRng::from_entropy()
        }
    };

    // The terminal is handed back when the app is dropped, before any error
    // is printed
    let result = app::App::new(rng).and_then(|mut app| app.run());
    if let Err(err) = &result {
        log::error!("{:#}", err);
    }

    result
}
