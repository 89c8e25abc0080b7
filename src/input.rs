//! Pointer input resolution.
//!
//! Converts primary-activate events at normalized points into board
//! actions. Invalid input - no cell under the point, an occupied cell,
//! a finished game - is ignored without error: a stray click produces no
//! state change and no visual change.

use crate::game::Game;
use crate::geometry::{BoardGeometry, Point};
use crate::position::Position;
use crate::types::Player;
use tracing::{debug, instrument};

/// Resolves pointer events against the board geometry and drives a game.
#[derive(Debug, Clone)]
pub struct InputResolver {
    geometry: BoardGeometry,
    last_point: Option<Point>,
}

impl InputResolver {
    /// Resolver over the default board geometry.
    pub fn new() -> Self {
        Self::with_geometry(BoardGeometry::default())
    }

    /// Resolver over a custom geometry.
    pub fn with_geometry(geometry: BoardGeometry) -> Self {
        Self {
            geometry,
            last_point: None,
        }
    }

    /// Returns the geometry used for hit-testing.
    pub fn geometry(&self) -> &BoardGeometry {
        &self.geometry
    }

    /// Returns the most recent activation point since the last reset.
    pub fn last_point(&self) -> Option<Point> {
        self.last_point
    }

    /// Maps a point to the cell under it.
    pub fn locate_cell(&self, point: Point) -> Option<Position> {
        self.geometry.locate(point)
    }

    /// Handles a primary-activate (click) event.
    ///
    /// Returns the mark placed so the host can redraw, or `None` when
    /// the event was ignored.
    #[instrument(skip(self, game))]
    pub fn on_primary_activate(&mut self, game: &mut Game, point: Point) -> Option<Player> {
        self.last_point = Some(point);

        let Some(pos) = self.geometry.locate(point) else {
            debug!(?point, "activation outside any cell ignored");
            return None;
        };

        match game.try_place(pos) {
            Ok(player) => Some(player),
            Err(err) => {
                debug!(%err, cell = %pos, "activation ignored");
                None
            }
        }
    }

    /// Handles a reset (new game) command.
    #[instrument(skip(self, game))]
    pub fn on_reset(&mut self, game: &mut Game) {
        self.last_point = None;
        game.reset();
    }
}

impl Default for InputResolver {
    fn default() -> Self {
        Self::new()
    }
}
