//! Draw-list generation for the presentation layer.
//!
//! The host redraws the whole scene every frame. This module turns game
//! state into the ordered list of tokens to stamp - one per placed mark,
//! in move order, with the winning line flagged for highlighting.

use crate::game::Game;
use crate::geometry::{BoardGeometry, Point};
use crate::position::Position;
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// One visual token: a mark to draw at a cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// Whose mark to draw.
    pub player: Player,
    /// The cell the mark occupies.
    pub position: Position,
    /// Where to stamp it, in board space.
    pub center: Point,
    /// Whether the cell belongs to the winning line.
    pub highlighted: bool,
}

/// Builds tokens for every placed mark, in move order.
pub fn draw_list(game: &Game, geometry: &BoardGeometry) -> Vec<Token> {
    let winning = game.winning_line().map(|line| line.cells);

    game.history()
        .iter()
        .map(|mov| Token {
            player: mov.player,
            position: mov.position,
            center: geometry.center(mov.position),
            highlighted: winning.is_some_and(|cells| cells.contains(&mov.position)),
        })
        .collect()
}
