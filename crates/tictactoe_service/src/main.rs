//! Tic-tac-toe service CLI.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use tictactoe_engine::{Board, Side, best_move, compute_status};
use tictactoe_service::{
    CreateGameRequest, ErrorResponse, GameService, MoveRequest, MoveResultDto, Reply, ServiceConfig,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ServiceConfig::from_file(path)?,
        None => ServiceConfig::default(),
    };

    // stdout carries replies, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Stdio => run_stdio(config),
        Command::Status { board } => print_status(&board),
        Command::BestMove { board, side } => print_best_move(&board, side),
        Command::Schema => print_schema(),
    }
}

/// Run the JSON command loop on stdin/stdout
#[instrument(skip(config))]
fn run_stdio(config: ServiceConfig) -> Result<()> {
    info!(opponent = %config.opponent(), "Starting command loop on stdio");
    let service = GameService::in_memory(config);
    let stdin = std::io::stdin();
    let handled = tictactoe_service::run(&service, stdin.lock(), std::io::stdout().lock())?;
    info!(handled, "Command loop closed");
    Ok(())
}

#[instrument(skip(board), fields(board = %board.to_compact()))]
fn print_status(board: &Board) -> Result<()> {
    println!("{}", compute_status(board));
    println!("{board}");
    Ok(())
}

#[instrument(skip(board), fields(board = %board.to_compact()))]
fn print_best_move(board: &Board, side: Side) -> Result<()> {
    let value = match best_move(board, side) {
        Some(pos) => serde_json::json!({ "row": pos.row(), "col": pos.col(), "side": side }),
        None => serde_json::Value::Null,
    };
    println!("{}", serde_json::to_string(&value)?);
    Ok(())
}

fn print_schema() -> Result<()> {
    let schemas = serde_json::json!({
        "command": schemars::schema_for!(tictactoe_service::Command),
        "reply": schemars::schema_for!(Reply),
        "createGameRequest": schemars::schema_for!(CreateGameRequest),
        "moveRequest": schemars::schema_for!(MoveRequest),
        "moveResult": schemars::schema_for!(MoveResultDto),
        "error": schemars::schema_for!(ErrorResponse),
    });
    println!("{}", serde_json::to_string_pretty(&schemas)?);
    Ok(())
}
