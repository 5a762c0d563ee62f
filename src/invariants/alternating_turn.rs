//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::types::{GameState, Player};

/// Invariant: the current player is determined by the history parity.
///
/// X always moves first, so with k moves played the player to move is X
/// when k is even and O when k is odd. On a terminal state the turn no
/// longer passes: `current_player` stays at whoever made the final move.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        let k = state.history().len();

        if state.is_terminal() {
            // The last mover: X made moves 1, 3, 5, ... (odd k)
            let last_mover = if k % 2 == 1 { Player::X } else { Player::O };
            return k > 0 && state.current_player() == last_mover;
        }

        let expected = if k % 2 == 0 { Player::X } else { Player::O };
        state.current_player() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{apply_move, new_game, replay};
    use crate::types::{GameStatus, GridSize};

    #[test]
    fn empty_game_holds() {
        let state = new_game(GridSize::Three);
        assert!(AlternatingTurnInvariant::holds(&state));
        assert_eq!(state.current_player(), Player::X);
    }

    #[test]
    fn single_move_holds() {
        let state = new_game(GridSize::Three);
        let state = apply_move(&state, 4).unwrap();
        assert!(AlternatingTurnInvariant::holds(&state));
        assert_eq!(state.current_player(), Player::O);
    }

    #[test]
    fn alternating_sequence_holds() {
        let state = replay(GridSize::Five, &[0, 1, 6, 2, 12]).unwrap();
        assert!(AlternatingTurnInvariant::holds(&state));
        assert_eq!(state.current_player(), Player::O);
    }

    #[test]
    fn terminal_state_keeps_last_mover() {
        let state = replay(GridSize::Three, &[0, 4, 1, 5, 2]).unwrap();
        assert_eq!(state.status(), &GameStatus::Won(Player::X));
        assert!(AlternatingTurnInvariant::holds(&state));
    }

    #[test]
    fn tampered_turn_violates() {
        let mut state = replay(GridSize::Three, &[4]).unwrap();
        state.current_player = Player::X;
        assert!(!AlternatingTurnInvariant::holds(&state));
    }
}
