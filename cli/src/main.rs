use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use minesweep_core::{Board, CellCount, Coord, GameConfig, RejectionSampler, ShuffledSampler};

mod render;
mod session;

use session::{OutputFormat, Session};

/// Terminal Minesweeper. Reads clicks as `x y` lines from stdin.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Board width
    #[arg(short = 'W', long, default_value_t = 9)]
    width: Coord,

    /// Board height
    #[arg(short = 'H', long, default_value_t = 9)]
    height: Coord,

    /// Number of mines, must leave at least one safe tile
    #[arg(short, long, default_value_t = 10)]
    mines: CellCount,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Place mines by sampling distinct tiles instead of retrying random coordinates
    #[arg(long)]
    shuffled: bool,

    /// Print a JSON snapshot after every update instead of the text board
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let config = GameConfig::new((args.width, args.height), args.mines)
        .context("invalid game configuration")?;
    let seed = args.seed.unwrap_or_else(rand::random);
    log::debug!("seed: {}", seed);

    let board = if args.shuffled {
        Board::with_generator(config, ShuffledSampler::new(seed))
    } else {
        Board::with_generator(config, RejectionSampler::new(seed))
    }
    .context("could not start a new game")?;

    let format = if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    let mut session = Session::new(board, format);
    let status = session.play(io::stdin().lock(), io::stdout().lock())?;
    log::info!(
        "Session ended: {:?}, {} tiles exposed",
        status,
        session.board().exposed_count()
    );

    Ok(())
}
