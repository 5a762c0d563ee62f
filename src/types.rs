//! Core domain types for the game engine.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// Supported grid sizes.
///
/// The engine only plays 3×3 and 5×5; encoding the side length as an
/// enum keeps unsupported sizes out of the API entirely.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum GridSize {
    /// Classic 3×3 grid.
    Three,
    /// Extended 5×5 grid.
    Five,
}

impl GridSize {
    /// Side length of the grid.
    pub fn n(self) -> usize {
        match self {
            GridSize::Three => 3,
            GridSize::Five => 5,
        }
    }

    /// Total number of squares (n²).
    pub fn cells(self) -> usize {
        self.n() * self.n()
    }
}

impl TryFrom<usize> for GridSize {
    type Error = String;

    fn try_from(n: usize) -> Result<Self, Self::Error> {
        match n {
            3 => Ok(GridSize::Three),
            5 => Ok(GridSize::Five),
            other => Err(format!("unsupported grid size {other} (expected 3 or 5)")),
        }
    }
}

impl std::fmt::Display for GridSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{0}x{0}", self.n())
    }
}

/// N×N board with squares stored in row-major order.
///
/// Index `i` maps to row `i / n`, column `i % n`. The square count is
/// fixed at n² for the lifetime of the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: GridSize,
    squares: Vec<Square>,
}

impl Board {
    /// Creates a new empty board of the given size.
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            squares: vec![Square::Empty; size.cells()],
        }
    }

    /// Returns the grid size.
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: usize) -> Option<Square> {
        self.squares.get(pos).copied()
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: usize, square: Square) -> Result<(), &'static str> {
        if pos >= self.squares.len() {
            return Err("Position out of bounds");
        }
        self.squares[pos] = square;
        Ok(())
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: usize) -> bool {
        matches!(self.get(pos), Some(Square::Empty))
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their index so a caller can prompt for moves;
    /// column width adapts to the two-digit indices of the 5×5 grid.
    pub fn display(&self) -> String {
        let n = self.size.n();
        let width = if self.size.cells() > 10 { 2 } else { 1 };
        let divider = vec!["-".repeat(width); n].join("+");
        let mut result = String::new();
        for row in 0..n {
            for col in 0..n {
                let pos = row * n + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => format!("{:>width$}", pos),
                    Square::Occupied(player) => format!("{player:>width$}"),
                };
                result.push_str(&symbol);
                if col < n - 1 {
                    result.push('|');
                }
            }
            if row < n - 1 {
                result.push('\n');
                result.push_str(&divider);
                result.push('\n');
            }
        }
        result
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(*player),
            _ => None,
        }
    }

    /// Returns true once the game has been decided.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "Game in progress"),
            GameStatus::Won(player) => write!(f, "Player {player} wins"),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}

/// Complete game state.
///
/// States are values: the engine never mutates one in place, it returns
/// a replacement. Once `status` leaves `InProgress` no further moves are
/// accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) current_player: Player,
    pub(crate) status: GameStatus,
    /// Move history (positions played, in order).
    pub(crate) history: Vec<usize>,
}

impl GameState {
    /// Creates a new game of the given size.
    pub fn new(size: GridSize) -> Self {
        Self {
            board: Board::new(size),
            current_player: Player::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current player.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Returns the move history.
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    /// Returns true once the game has been decided.
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Positions that are currently legal to play.
    ///
    /// Empty on terminal states, so a caller can disable input instead
    /// of round-tripping [`IllegalMove`](crate::IllegalMove) errors.
    pub fn legal_moves(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        (0..self.board.squares.len())
            .filter(|&pos| self.board.is_empty(pos))
            .collect()
    }

    /// Places a mark and records it (unchecked - the engine validates first).
    pub(crate) fn place(&mut self, pos: usize, player: Player) {
        self.board.set(pos, Square::Occupied(player)).unwrap();
        self.history.push(pos);
    }
}
