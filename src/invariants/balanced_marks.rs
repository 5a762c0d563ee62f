//! Balanced marks invariant: X never trails and never leads by two.

use super::Invariant;
use crate::types::{GameState, Player, Square};

/// Invariant: X count minus O count is always 0 or 1.
///
/// X moves first and turns strictly alternate, so after any legal
/// sequence the counts differ by at most one and O never leads.
pub struct BalancedMarksInvariant;

impl Invariant<GameState> for BalancedMarksInvariant {
    fn holds(state: &GameState) -> bool {
        let x_count = state
            .board()
            .squares()
            .iter()
            .filter(|s| matches!(s, Square::Occupied(Player::X)))
            .count();
        let o_count = state
            .board()
            .squares()
            .iter()
            .filter(|s| matches!(s, Square::Occupied(Player::O)))
            .count();

        x_count == o_count || x_count == o_count + 1
    }

    fn description() -> &'static str {
        "X count minus O count is always 0 or 1"
    }
}
