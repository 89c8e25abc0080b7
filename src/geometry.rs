//! Board geometry in normalized board space.
//!
//! The host renders the board inside a [-1, 1] square with y pointing
//! up; cell centers sit on a 3x3 lattice around the origin. Converting
//! raw window pixels into this space is the host's job - points arriving
//! here are already normalized.

use crate::position::Position;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Distance between adjacent cell centers.
const CELL_SPACING: f32 = 0.67;

/// Half the side of a cell's hit box. Slightly under half the spacing,
/// leaving a dead zone on the grid lines.
const CELL_HALF_WIDTH: f32 = 0.33;

/// A point in normalized board space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate, +x right.
    pub x: f32,
    /// Vertical coordinate, +y up.
    pub y: f32,
}

impl Point {
    /// Creates a point.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// The fixed 3x3 lattice of cell centers and the per-cell hit radius.
///
/// Hit boxes do not overlap, so a point matches at most one cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoardGeometry {
    spacing: f32,
    half_width: f32,
}

impl BoardGeometry {
    /// Geometry with a custom lattice spacing and hit half-width.
    pub fn new(spacing: f32, half_width: f32) -> Self {
        Self {
            spacing,
            half_width,
        }
    }

    /// Center of the given cell.
    pub fn center(&self, pos: Position) -> Point {
        let col = pos.column() as f32;
        let row = pos.row() as f32;
        Point::new((col - 1.0) * self.spacing, (1.0 - row) * self.spacing)
    }

    /// Per-cell hit half-width.
    pub fn half_width(&self) -> f32 {
        self.half_width
    }

    /// Maps a point to the cell whose hit box contains it.
    ///
    /// Returns `None` for points on grid lines or outside the board.
    #[instrument(skip(self))]
    pub fn locate(&self, point: Point) -> Option<Position> {
        <Position as strum::IntoEnumIterator>::iter().find(|pos| {
            let center = self.center(*pos);
            (point.x - center.x).abs() < self.half_width
                && (point.y - center.y).abs() < self.half_width
        })
    }
}

impl Default for BoardGeometry {
    fn default() -> Self {
        Self::new(CELL_SPACING, CELL_HALF_WIDTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centers_form_row_major_lattice() {
        let geometry = BoardGeometry::default();

        let top_left = geometry.center(Position::TopLeft);
        assert_eq!((top_left.x, top_left.y), (-0.67, 0.67));

        let center = geometry.center(Position::Center);
        assert_eq!((center.x, center.y), (0.0, 0.0));

        let bottom_right = geometry.center(Position::BottomRight);
        assert_eq!((bottom_right.x, bottom_right.y), (0.67, -0.67));
    }

    #[test]
    fn test_locate_at_every_center() {
        let geometry = BoardGeometry::default();
        for pos in Position::ALL {
            assert_eq!(geometry.locate(geometry.center(pos)), Some(pos));
        }
    }

    #[test]
    fn test_locate_on_grid_line_misses() {
        let geometry = BoardGeometry::default();
        // Between the center and right columns.
        assert_eq!(geometry.locate(Point::new(0.335, 0.0)), None);
        // Exactly on a hit-box edge: the test is strict.
        assert_eq!(geometry.locate(Point::new(0.33, 0.0)), None);
    }

    #[test]
    fn test_locate_outside_board_misses() {
        let geometry = BoardGeometry::default();
        assert_eq!(geometry.locate(Point::new(1.5, 0.0)), None);
        assert_eq!(geometry.locate(Point::new(0.0, -1.2)), None);
    }
}
