//! Moves and their rejection reasons.
//!
//! Moves are domain events, not side effects: the history of a game is
//! the chronological record of them, and its length parity determines
//! whose turn is next.

use crate::position::Position;
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// A mark placement: which player, at which cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player placing the mark.
    pub player: Player,
    /// The cell receiving the mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} -> {}", self.player, self.position.label())
    }
}

/// Error that can occur when validating or applying a placement.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum PlaceError {
    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Position),

    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// An out-of-range cell index reached the game. The input-mapping
    /// layer is responsible for making this unreachable.
    #[display("Cell index {} is out of range", _0)]
    InvalidCell(usize),
}

impl std::error::Error for PlaceError {}
