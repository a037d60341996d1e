//! Command-line interface for three_musketeers.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Three Musketeers - play from a board file, save when you stop
#[derive(Parser, Debug)]
#[command(name = "three_musketeers")]
#[command(about = "Three Musketeers against Cardinal Richelieu's men", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game starting from a board file
    Play {
        /// Board file to start from
        board: PathBuf,

        /// Where to save the board when the game stops (default: out-<BOARD>)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Skip the how-to-play banner
        #[arg(long)]
        quiet_intro: bool,
    },

    /// Check a board file and print it with its current outcome
    Show {
        /// Board file to check
        board: PathBuf,
    },
}
