//! Three Musketeers - terminal game.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use musketeers_rules::rules;
use std::path::{Path, PathBuf};
use three_musketeers::{Cli, Command, GameConfig, GameSession, board_file, render};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            board,
            output,
            config,
            quiet_intro,
        } => run_play(board, output, config, quiet_intro),
        Command::Show { board } => run_show(&board),
    }
}

/// Play an interactive game on stdin/stdout
#[instrument]
fn run_play(
    board_path: PathBuf,
    output: Option<PathBuf>,
    config: Option<PathBuf>,
    quiet_intro: bool,
) -> Result<()> {
    let mut config = GameConfig::from_optional_file(config.as_deref())?;
    if quiet_intro {
        config = config.without_instructions();
    }

    let board = board_file::load(&board_path)
        .with_context(|| format!("Failed to read the board from {}", board_path.display()))?;
    let save_path =
        output.unwrap_or_else(|| board_file::output_path(&board_path, config.output_prefix()));
    info!(save_path = %save_path.display(), "Starting session");

    let stdin = std::io::stdin();
    let mut session = GameSession::new(board, stdin.lock(), std::io::stdout(), save_path)
        .with_instructions(*config.show_instructions());
    let end = session.run()?;
    info!(?end, "Session over");

    Ok(())
}

/// Validate a board file and print it
#[instrument]
fn run_show(board_path: &Path) -> Result<()> {
    let board = board_file::load(board_path)
        .with_context(|| format!("Failed to read the board from {}", board_path.display()))?;
    print!("{}", render(&board));
    println!("\n{}", rules::evaluate(&board));
    Ok(())
}
