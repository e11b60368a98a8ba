//! Headless Gomoku exhibition
//!
//! Runs an automated-vs-automated game on the real clock, logging each
//! ply, then prints the final position.
//!
//! ```bash
//! RUST_LOG=debug cargo run --release -- --size 15 --cadence-ms 200 --seed 7
//! ```

use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use gomoku::{Game, GameConfig, GameError, GameMode, Outcome};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Side of the square board
    #[arg(short, long, default_value_t = gomoku::DEFAULT_BOARD_SIZE)]
    size: usize,

    /// Milliseconds between plies
    #[arg(short, long, default_value_t = 500)]
    cadence_ms: u64,

    /// Seed for tie-break shuffling (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Stop the exhibition after this many plies
    #[arg(short, long)]
    max_plies: Option<usize>,
}

fn main() -> Result<(), GameError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let mut config = GameConfig::default()
        .with_board_size(args.size)
        .with_exhibition_cadence(Duration::from_millis(args.cadence_ms));
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let mut game = Game::new(config, GameMode::AiVsAi)?;
    let mut last = Instant::now();

    while let Some(wait) = game.next_due() {
        thread::sleep(wait);
        let now = Instant::now();
        let played = game.tick(now.duration_since(last));
        last = now;

        if let (Some(pos), Some(&(_, color))) = (played, game.move_history().last()) {
            let ply = game.move_history().len();
            let kind = game.last_search().map(|r| r.search_type);
            info!(ply, %color, %pos, ?kind, "move played");
            if args.max_plies.is_some_and(|max| ply >= max) {
                game.stop_exhibition();
            }
        }
    }

    print!("{}", game.board());
    match game.outcome() {
        Outcome::Win(color) => println!("{color} wins after {} plies", game.move_history().len()),
        Outcome::Draw => println!("Draw"),
        Outcome::InProgress => println!("Stopped after {} plies", game.move_history().len()),
    }
    Ok(())
}
