//! Commit Game CLI
//!
//! Generalized rock-paper-scissors against the computer, with a provably
//! fixed computer move.
//!
//! # Usage
//!
//! ```bash
//! # Classic game
//! commit-game rock paper scissors
//!
//! # Five moves, stop after three rounds, JSON reveal records
//! commit-game --rounds 3 --json rock spock paper lizard scissors
//!
//! # Check a past round
//! commit-game verify --key <HEX> --move rock --commitment <HEX>
//! ```

use clap::{Parser, Subcommand};
use commit_game_core::{Commitment, RoundController, SecretKey};
use std::io;
use std::process::ExitCode;
use tracing::info;

mod config;
mod logging;
mod play;

use config::GameConfig;

const EXAMPLE: &str = "commit-game rock paper scissors";

/// Fair rock-paper-scissors over any odd number of moves
#[derive(Parser)]
#[command(name = "commit-game")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Generalized rock-paper-scissors with a committed computer move", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    /// Moves in dominance order: an odd number (at least 3) of distinct names.
    /// At the menu, 0, ? and the numbers 1..N are read as menu entries before
    /// move names, so a move named after one of them is picked by its number.
    moves: Vec<String>,

    /// Stop after this many resolved rounds
    #[arg(long, env = "COMMIT_GAME_ROUNDS")]
    rounds: Option<u64>,

    /// Print each resolved round as a JSON reveal record
    #[arg(long)]
    json: bool,

    /// Log filter (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "COMMIT_GAME_LOG", default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a disclosed key and computer move against the shown commitment
    Verify {
        /// Disclosed HMAC key (64 hex characters)
        #[arg(long)]
        key: SecretKey,

        /// Disclosed computer move
        #[arg(long = "move")]
        move_name: String,

        /// Commitment shown before the player moved (64 hex characters)
        #[arg(long)]
        commitment: Commitment,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    logging::init(&cli.log_level)?;

    if let Some(Commands::Verify {
        key,
        move_name,
        commitment,
    }) = cli.command
    {
        return Ok(if commitment.verify(&key, &move_name) {
            println!("Commitment matches: the computer played {}", move_name);
            ExitCode::SUCCESS
        } else {
            println!("Commitment does NOT match {}", move_name);
            ExitCode::FAILURE
        });
    }

    let config = match GameConfig::from_args(cli.moves, cli.rounds, cli.json) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {}", err);
            eprintln!("Pass an odd number (at least 3) of distinct moves, for example:");
            eprintln!("    {}", EXAMPLE);
            return Ok(ExitCode::from(2));
        }
    };

    info!(moves = %config.moves, "Starting game");

    let mut game = RoundController::new(config.moves.clone());
    let stdin = io::stdin();
    let played = play::run(&config, &mut game, stdin.lock(), io::stdout().lock())?;

    info!(rounds = played, "Game over");
    Ok(ExitCode::SUCCESS)
}
