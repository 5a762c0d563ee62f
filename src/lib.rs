//! Gridtoe - pure N×N tic-tac-toe game logic.
//!
//! The engine holds no ambient state: every operation takes the prior
//! [`GameState`] and returns a new value, so callers (a UI, a test
//! harness) thread the state explicitly and replace it on each accepted
//! move. Boards come in two sizes, [`GridSize::Three`] and
//! [`GridSize::Five`]; a win is a full row, column, or diagonal.
//!
//! # Example
//!
//! ```
//! use gridtoe::{apply_move, new_game, GameStatus, GridSize, Player};
//!
//! let state = new_game(GridSize::Three);
//! let state = apply_move(&state, 4).expect("center is open");
//! assert_eq!(state.current_player(), Player::O);
//! assert_eq!(state.status(), &GameStatus::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod error;
pub mod invariants;
mod rules;
mod types;

// Crate-level exports - engine operations
pub use engine::{apply_move, detect_outcome, new_game, replay};

// Crate-level exports - error type
pub use error::IllegalMove;

// Crate-level exports - rules
pub use rules::{check_winner, is_draw, is_full, lines};

// Crate-level exports - domain types
pub use types::{Board, GameState, GameStatus, GridSize, Player, Square};
