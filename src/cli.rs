//! Command-line interface for the gridtoe terminal client.

use clap::Parser;

/// Gridtoe - tic-tac-toe on a 3x3 or 5x5 grid
#[derive(Parser, Debug)]
#[command(name = "gridtoe")]
#[command(about = "Play tic-tac-toe on a 3x3 or 5x5 grid", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Grid side length (3 or 5)
    #[arg(short, long, default_value_t = 3)]
    pub size: usize,

    /// Print the final game state as JSON
    #[arg(long)]
    pub json: bool,
}
