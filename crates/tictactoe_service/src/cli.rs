//! Command-line interface for the tic-tac-toe service.

use clap::{Parser, Subcommand};
use tictactoe_engine::{Board, Side};

/// Tic-tac-toe game service
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe game engine and service", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve JSON commands on stdin, one reply per line on stdout
    Stdio,

    /// Print the status of a board
    Status {
        /// Board as three '/'-separated rows, e.g. "XXX/OO./..."
        #[arg(long)]
        board: Board,
    },

    /// Print the minimax move for a side
    BestMove {
        /// Board as three '/'-separated rows, e.g. "XX./OO./..."
        #[arg(long)]
        board: Board,

        /// Side to move (X or O)
        #[arg(long)]
        side: Side,
    },

    /// Print JSON schemas of the command loop's requests and replies
    Schema,
}
