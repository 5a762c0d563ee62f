//! Draw detection logic.

use super::win::check_winner;
use crate::types::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// Checks if the position is a draw: a full board with no winner.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GridSize, Player};

    #[test]
    fn empty_board_not_full() {
        assert!(!is_full(&Board::new(GridSize::Three)));
    }

    #[test]
    fn partial_board_not_full() {
        let mut board = Board::new(GridSize::Three);
        board.set(4, Square::Occupied(Player::X)).unwrap();
        assert!(!is_full(&board));
    }

    #[test]
    fn full_board_is_full() {
        let mut board = Board::new(GridSize::Three);
        for pos in 0..9 {
            board.set(pos, Square::Occupied(Player::X)).unwrap();
        }
        assert!(is_full(&board));
    }

    #[test]
    fn drawn_position_detected() {
        // X O X / X O O / O X X - full, no line
        let mut board = Board::new(GridSize::Three);
        for (pos, player) in [
            (0, Player::X),
            (1, Player::O),
            (2, Player::X),
            (3, Player::X),
            (4, Player::O),
            (5, Player::O),
            (6, Player::O),
            (7, Player::X),
            (8, Player::X),
        ] {
            board.set(pos, Square::Occupied(player)).unwrap();
        }
        assert!(is_draw(&board));
    }

    #[test]
    fn won_position_is_not_a_draw() {
        let mut board = Board::new(GridSize::Three);
        for pos in [0, 1, 2] {
            board.set(pos, Square::Occupied(Player::X)).unwrap();
        }
        assert!(!is_draw(&board));
    }
}
