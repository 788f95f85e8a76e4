//! The 3x3 grid: geometry and hit testing.

use serde::{Deserialize, Serialize};

use crate::cell::{Cell, CellIndex, CellStatus, CELL_COUNT};
use crate::{LockError, LockResult};

/// A fixed 3x3 grid of cells laid out over a square widget area.
///
/// Centers sit at the middle of each third of the side length; the hit
/// radius is `side / 6 * radius_ratio` and stays constant while cells
/// animate their visual radius.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grid {
    cells: Vec<Cell>,
    side: f32,
    hit_radius: f32,
    radius_ratio: f32,
}

impl Grid {
    /// Build a grid for a square widget of the given side length.
    ///
    /// `radius_ratio` is expected to be pre-clamped to `[0, 1]` by the
    /// configuration layer.
    #[must_use]
    pub fn new(side: f32, radius_ratio: f32) -> Self {
        let mut grid = Self {
            cells: Vec::with_capacity(CELL_COUNT),
            side,
            hit_radius: 0.0,
            radius_ratio,
        };
        grid.rebuild();
        grid
    }

    /// Recompute geometry for a new side length.
    ///
    /// Rebuilds all nine cells: statuses reset to normal and visual radii
    /// reset to the hit radius.
    pub fn resize(&mut self, side: f32) {
        self.side = side;
        self.rebuild();
        tracing::debug!("Grid resized to {side}x{side}, hit radius {}", self.hit_radius);
    }

    fn rebuild(&mut self) {
        self.hit_radius = self.side / 6.0 * self.radius_ratio;
        self.cells.clear();
        for row in 0..3 {
            for col in 0..3 {
                #[allow(clippy::cast_precision_loss)]
                let x = self.side / 3.0 / 2.0 * (col * 2 + 1) as f32;
                #[allow(clippy::cast_precision_loss)]
                let y = self.side / 3.0 / 2.0 * (row * 2 + 1) as f32;
                let index = CellIndex::from_raw(row * 3 + col);
                self.cells.push(Cell::new(index, x, y, self.hit_radius));
            }
        }
    }

    /// Side length of the (square) widget area.
    #[must_use]
    pub fn side(&self) -> f32 {
        self.side
    }

    /// The fixed touch-detection radius.
    #[must_use]
    pub fn hit_radius(&self) -> f32 {
        self.hit_radius
    }

    /// Find the cell whose center lies strictly within the hit radius of
    /// the given point.
    ///
    /// Cells are scanned in row-major order and the first match wins.
    /// Distance exactly equal to the hit radius is a miss. `None` is a
    /// normal outcome, not a failure.
    #[must_use]
    pub fn hit_test(&self, x: f32, y: f32) -> Option<CellIndex> {
        self.cells
            .iter()
            .find(|cell| cell.distance_to(x, y) < self.hit_radius)
            .map(|cell| cell.index)
    }

    /// Get a cell by index.
    ///
    /// # Errors
    ///
    /// Returns [`LockError::CellOutOfRange`] if the grid somehow lacks the
    /// cell (it never does for a valid [`CellIndex`]).
    pub fn cell(&self, index: CellIndex) -> LockResult<&Cell> {
        self.cells
            .get(index.index())
            .ok_or(LockError::CellOutOfRange(index.index()))
    }

    /// Get a mutable cell by index.
    ///
    /// # Errors
    ///
    /// Returns [`LockError::CellOutOfRange`] if the grid somehow lacks the
    /// cell.
    pub fn cell_mut(&mut self, index: CellIndex) -> LockResult<&mut Cell> {
        self.cells
            .get_mut(index.index())
            .ok_or(LockError::CellOutOfRange(index.index()))
    }

    /// Internal access without the range check; every [`CellIndex`] is in
    /// range by construction and the grid always holds nine cells.
    pub(crate) fn cell_at(&self, index: CellIndex) -> &Cell {
        &self.cells[index.index()]
    }

    /// Internal mutable access without the range check.
    pub(crate) fn cell_at_mut(&mut self, index: CellIndex) -> &mut Cell {
        &mut self.cells[index.index()]
    }

    /// Iterate all nine cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Iterate all nine cells mutably in row-major order.
    pub fn cells_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.cells.iter_mut()
    }

    /// Reset every cell to normal status and its base visual radius.
    pub fn reset_cells(&mut self) {
        let radius = self.hit_radius;
        for cell in &mut self.cells {
            cell.status = CellStatus::Normal;
            cell.radius = radius;
        }
    }
}
