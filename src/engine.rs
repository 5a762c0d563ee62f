//! Pure engine operations over immutable game state.
//!
//! Callers hold the current [`GameState`] and replace it with the value
//! returned by [`apply_move`]. The functions here never mutate their
//! input and never touch anything outside their arguments, so a caller
//! that keeps the prior states around gets the full game history for
//! free.

use crate::error::IllegalMove;
use crate::invariants::{GameInvariants, InvariantSet};
use crate::rules;
use crate::types::{Board, GameState, GameStatus, GridSize};
use tracing::instrument;

/// Creates a new game: empty board, X to move.
#[instrument]
pub fn new_game(size: GridSize) -> GameState {
    GameState::new(size)
}

/// Evaluates the outcome of a board position.
///
/// Returns `Won` for the first fully matched line (see
/// [`rules::lines`](crate::lines) for the enumeration order), `Draw`
/// for a full board with no winner, and `InProgress` otherwise.
#[instrument]
pub fn detect_outcome(board: &Board) -> GameStatus {
    if let Some(winner) = rules::check_winner(board) {
        GameStatus::Won(winner)
    } else if rules::is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

/// Applies a move for the current player at the given position.
///
/// On success returns a new state with the mark placed and the outcome
/// re-evaluated: the turn passes to the opponent unless the move ended
/// the game, in which case `current_player` stays at the player who
/// made the final move.
///
/// # Errors
///
/// Returns [`IllegalMove`] if the game is already over, the position is
/// outside the board, or the square is occupied. The input state is
/// left untouched in every case.
#[instrument(skip(state), fields(position = index, player = ?state.current_player()))]
pub fn apply_move(state: &GameState, index: usize) -> Result<GameState, IllegalMove> {
    if state.is_terminal() {
        return Err(IllegalMove::GameOver);
    }
    if index >= state.board().size().cells() {
        return Err(IllegalMove::OutOfBounds(index));
    }
    if !state.board().is_empty(index) {
        return Err(IllegalMove::SquareOccupied(index));
    }

    let mut next = state.clone();
    let player = next.current_player;
    next.place(index, player);

    match detect_outcome(next.board()) {
        GameStatus::InProgress => next.current_player = player.opponent(),
        outcome => next.status = outcome,
    }

    debug_assert!(
        GameInvariants::check_all(&next).is_ok(),
        "move left the game in an inconsistent state"
    );

    Ok(next)
}

/// Replays a move sequence from a fresh game.
///
/// # Errors
///
/// Fails like [`apply_move`] does, including with
/// [`IllegalMove::GameOver`] when the sequence continues past a
/// terminal state.
#[instrument]
pub fn replay(size: GridSize, moves: &[usize]) -> Result<GameState, IllegalMove> {
    let mut state = new_game(size);
    for &index in moves {
        state = apply_move(&state, index)?;
    }
    Ok(state)
}
