//! History consistency invariant: the history reconstructs the board.

use super::Invariant;
use crate::types::{Board, GameState, Player, Square};

/// Invariant: replaying the move history reproduces the board exactly.
///
/// Every history entry must be in bounds and land on a square that was
/// still empty, and the reconstructed board must equal the current one.
/// This also rules out overwritten squares and marks with no recorded
/// move.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let mut reconstructed = Board::new(state.board().size());
        let mut player = Player::X;

        for &pos in state.history() {
            if !reconstructed.is_empty(pos) {
                return false;
            }
            if reconstructed.set(pos, Square::Occupied(player)).is_err() {
                return false;
            }
            player = player.opponent();
        }

        reconstructed == *state.board()
    }

    fn description() -> &'static str {
        "Move history reconstructs the board exactly"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{new_game, replay};
    use crate::types::GridSize;

    #[test]
    fn empty_game_holds() {
        let state = new_game(GridSize::Five);
        assert!(HistoryConsistentInvariant::holds(&state));
    }

    #[test]
    fn holds_after_moves() {
        let state = replay(GridSize::Three, &[0, 4, 2, 6]).unwrap();
        assert!(HistoryConsistentInvariant::holds(&state));
        assert_eq!(state.history(), &[0, 4, 2, 6]);
    }

    #[test]
    fn unrecorded_mark_violates() {
        let mut state = replay(GridSize::Three, &[4]).unwrap();
        state.board.set(0, Square::Occupied(Player::O)).unwrap();
        assert!(!HistoryConsistentInvariant::holds(&state));
    }

    #[test]
    fn overwritten_square_violates() {
        let mut state = replay(GridSize::Three, &[4]).unwrap();
        state.board.set(4, Square::Occupied(Player::O)).unwrap();
        assert!(!HistoryConsistentInvariant::holds(&state));
    }

    #[test]
    fn duplicate_history_entry_violates() {
        let mut state = replay(GridSize::Three, &[4]).unwrap();
        state.history.push(4);
        assert!(!HistoryConsistentInvariant::holds(&state));
    }
}
