//! Error types for the game engine.

/// Error raised when a move cannot be applied.
///
/// This is the engine's only error kind: a move is illegal either
/// because the target square is unavailable or because the game has
/// already been decided. The caller is expected to drop the attempted
/// move; no recovery is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum IllegalMove {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(usize),

    /// The position is outside the board.
    #[display("Position {} is out of bounds", _0)]
    OutOfBounds(usize),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for IllegalMove {}
