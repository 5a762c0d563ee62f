//! Win detection logic.

use crate::types::{Board, GridSize, Player, Square};
use tracing::instrument;

/// Enumerates all winning lines for the given grid size.
///
/// A line is a sequence of n board indices: the n rows top to bottom,
/// then the n columns left to right, then the main diagonal, then the
/// anti diagonal - 2n+2 lines in total. [`check_winner`] reports the
/// first fully matched line in this order; under legal alternating play
/// at most one player can complete a line, so the order is a tie-break
/// that never changes the winner.
pub fn lines(size: GridSize) -> Vec<Vec<usize>> {
    let n = size.n();
    let mut lines = Vec::with_capacity(2 * n + 2);

    // Rows
    for row in 0..n {
        lines.push((0..n).map(|col| row * n + col).collect());
    }

    // Columns
    for col in 0..n {
        lines.push((0..n).map(|row| row * n + col).collect());
    }

    // Diagonals
    lines.push((0..n).map(|i| i * n + i).collect());
    lines.push((0..n).map(|i| i * n + (n - 1 - i)).collect());

    lines
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player occupies every square of some
/// line, `None` otherwise.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Player> {
    for line in lines(board.size()) {
        let first = board.get(line[0]);
        if let Some(Square::Occupied(player)) = first {
            if line.iter().all(|&pos| board.get(pos) == first) {
                return Some(player);
            }
        }
    }

    None
}
