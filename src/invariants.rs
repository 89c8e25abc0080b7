//! Consistency checks for game state.
//!
//! These formalize what the placement rules guarantee. They are asserted
//! after every accepted move in debug builds and are testable on their
//! own.

use crate::game::Game;
use crate::types::{Player, Square};
use tracing::{instrument, warn};

/// Invariant: mark counts stay balanced (X leads O by zero or one).
pub struct MarksBalanced;

impl MarksBalanced {
    /// Checks if the invariant holds.
    #[instrument(skip(game))]
    pub fn holds(game: &Game) -> bool {
        let x_count = count_marks(game, Player::X);
        let o_count = count_marks(game, Player::O);

        let valid = x_count >= o_count && x_count - o_count <= 1;
        if !valid {
            warn!(x_count, o_count, "mark balance violated");
        }
        valid
    }
}

/// Invariant: the history accounts for every mark on the board.
pub struct HistoryConsistent;

impl HistoryConsistent {
    /// Checks if the invariant holds.
    #[instrument(skip(game))]
    pub fn holds(game: &Game) -> bool {
        let filled = game
            .board()
            .squares()
            .iter()
            .filter(|s| !matches!(s, Square::Empty))
            .count();
        let history_len = game.history().len();
        let recorded = game
            .history()
            .iter()
            .all(|mov| game.board().get(mov.position) == Square::Occupied(mov.player));

        let valid = filled == history_len && recorded;
        if !valid {
            warn!(filled, history_len, "history consistency violated");
        }
        valid
    }
}

fn count_marks(game: &Game, player: Player) -> usize {
    game.board()
        .squares()
        .iter()
        .filter(|s| matches!(s, Square::Occupied(p) if *p == player))
        .count()
}

/// Asserts that all game invariants hold (panics on violation in debug builds).
#[instrument(skip(game))]
pub fn assert_invariants(game: &Game) {
    debug_assert!(MarksBalanced::holds(game), "mark balance violated");
    debug_assert!(
        HistoryConsistent::holds(game),
        "history consistency violated"
    );
}
