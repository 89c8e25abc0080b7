//! Game state and the placement state machine.

use crate::action::{Move, PlaceError};
use crate::invariants::assert_invariants;
use crate::position::Position;
use crate::rules::{WinLine, check_winner, is_full};
use crate::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Where the game stands.
///
/// `Won` and `Drawn` are terminal; only [`Game::reset`] leaves them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are still being accepted.
    InProgress,
    /// A line was completed.
    Won(WinLine),
    /// Nine moves placed, no line completed.
    Drawn,
}

/// A complete game: board, move history, and status.
///
/// The single source of truth for whose turn it is and whether the game
/// is over. The next player is derived from history-length parity (even
/// length means X moves), so turn order cannot drift from the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) history: Vec<Move>,
    pub(crate) status: GameStatus,
}

impl Game {
    /// Creates a new game with an empty board.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            history: Vec::new(),
            status: GameStatus::InProgress,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the move history in chronological order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the game status.
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Returns the player who moves next.
    pub fn to_move(&self) -> Player {
        if self.history.len() % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Checks if the game has been won or drawn.
    pub fn is_over(&self) -> bool {
        !matches!(self.status, GameStatus::InProgress)
    }

    /// Checks if all nine moves were placed without completing a line.
    pub fn is_draw(&self) -> bool {
        matches!(self.status, GameStatus::Drawn)
    }

    /// Returns the completed line, if the game has been won.
    pub fn winning_line(&self) -> Option<&WinLine> {
        match &self.status {
            GameStatus::Won(line) => Some(line),
            _ => None,
        }
    }

    /// Returns the unoccupied positions.
    pub fn valid_moves(&self) -> Vec<Position> {
        Position::valid_moves(&self.board)
    }

    /// Places the next player's mark at the given cell.
    ///
    /// On success the move is recorded, win and draw state are
    /// recomputed, and the mark placed is returned.
    ///
    /// # Errors
    ///
    /// Returns `PlaceError::GameOver` once the game is won or drawn, and
    /// `PlaceError::CellOccupied` for a cell that already holds a mark.
    /// A rejected move leaves all state untouched.
    #[instrument(skip(self), fields(player = ?self.to_move()))]
    pub fn try_place(&mut self, pos: Position) -> Result<Player, PlaceError> {
        if self.is_over() {
            return Err(PlaceError::GameOver);
        }
        if !self.board.is_empty(pos) {
            return Err(PlaceError::CellOccupied(pos));
        }

        let player = self.to_move();
        self.board.set(pos, Square::Occupied(player));
        self.history.push(Move::new(player, pos));

        if let Some(line) = check_winner(&self.board) {
            debug!(winner = ?line.player, "line completed");
            self.status = GameStatus::Won(line);
        } else if is_full(&self.board) {
            debug!("board full with no line completed");
            self.status = GameStatus::Drawn;
        }

        assert_invariants(self);
        Ok(player)
    }

    /// Places a mark by raw cell index (0-8).
    ///
    /// An out-of-range index is a defect in the caller's input mapping,
    /// not a user action: it panics in debug builds and is rejected with
    /// a warning in release builds.
    pub fn try_place_at(&mut self, index: usize) -> Result<Player, PlaceError> {
        match Position::from_index(index) {
            Some(pos) => self.try_place(pos),
            None => {
                debug_assert!(index < 9, "cell index {index} out of range");
                warn!(index, "rejected out-of-range cell index");
                Err(PlaceError::InvalidCell(index))
            }
        }
    }

    /// Clears the board, move history, and status.
    ///
    /// Callable at any time, including mid-game.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.history.clear();
        self.status = GameStatus::InProgress;
    }

    /// Returns a status string for display.
    pub fn status_string(&self) -> String {
        match &self.status {
            GameStatus::InProgress => {
                format!("In progress. Player {:?} to move.", self.to_move())
            }
            GameStatus::Won(line) => {
                format!("Game over. Player {:?} wins!", line.player)
            }
            GameStatus::Drawn => "Game over. Draw!".to_string(),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
