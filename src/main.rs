//! Interactive terminal client for the gridtoe engine.
//!
//! A thin controller: it owns the current game state, maps line input
//! to cell indices, and replaces the state on each accepted move. All
//! rules live in the engine.

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use gridtoe::{apply_move, new_game, GridSize};
use std::io::{self, BufRead, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let size = GridSize::try_from(cli.size).map_err(anyhow::Error::msg)?;

    info!(%size, "starting game");

    let mut state = new_game(size);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while !state.is_terminal() {
        println!("\n{}", state.board().display());
        print!(
            "{} to move [0-{}], q to quit: ",
            state.current_player(),
            size.cells() - 1
        );
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let input = line.trim();
        if input.eq_ignore_ascii_case("q") {
            break;
        }

        let index = match input.parse::<usize>() {
            Ok(index) => index,
            Err(_) => {
                println!("Enter a square number or q to quit");
                continue;
            }
        };

        match apply_move(&state, index) {
            Ok(next) => state = next,
            Err(err) => println!("{err}"),
        }
    }

    println!("\n{}", state.board().display());
    println!("\n{}", state.status());

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&state)?);
    }

    Ok(())
}
