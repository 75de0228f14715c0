//! Play one game of Snakes and Ladders with a tracker attached.
//!
//! Usage: `snakes-and-ladders [config.json]`. Without a path the classic
//! 25-square board is used. Set `RUST_LOG=debug` to see every move.

use std::env;
use std::fs;
use std::process::ExitCode;

use snakes_ladders::{BoardConfig, DiceGameTracker, PrettyTextRepresentable, SnakesAndLadders};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn load_config(path: Option<String>) -> Result<BoardConfig, Box<dyn std::error::Error>> {
    match path {
        Some(path) => {
            let json = fs::read_to_string(&path)?;
            Ok(BoardConfig::from_json(&json)?)
        }
        None => Ok(BoardConfig::classic()),
    }
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match load_config(env::args().nth(1)) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut game = match SnakesAndLadders::from_config(&config) {
        Ok(game) => game,
        Err(e) => {
            tracing::error!("invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    println!("{}", game.pretty_textual_description());

    let mut tracker = DiceGameTracker::new();
    let outcome = game.play_with(&mut tracker);
    tracing::info!(
        end = ?outcome.end,
        turns = outcome.turns,
        overshoots = outcome.overshoots,
        ladders = outcome.ladders,
        snakes = outcome.snakes,
        "done"
    );

    ExitCode::SUCCESS
}
