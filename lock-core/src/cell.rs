//! Grid cells - the nine selectable positions of the pattern.

use serde::{Deserialize, Serialize};

use crate::{LockError, LockResult};

/// Number of cells in the grid.
pub const CELL_COUNT: usize = 9;

/// Visual/interaction status of a cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellStatus {
    /// Untouched.
    #[default]
    Normal,
    /// Part of the current pattern.
    Pressed,
    /// Part of a pattern flagged as wrong.
    Error,
}

/// Position of a cell in the 3x3 grid, in row-major order 0..=8.
///
/// The index is the cell's identity: completion and progress signals
/// serialize a pattern by concatenating these digits in selection order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CellIndex(usize);

impl CellIndex {
    /// Create from a raw index.
    ///
    /// # Errors
    ///
    /// Returns [`LockError::CellOutOfRange`] if `index >= 9`.
    pub fn new(index: usize) -> LockResult<Self> {
        if index < CELL_COUNT {
            Ok(Self(index))
        } else {
            Err(LockError::CellOutOfRange(index))
        }
    }

    /// Create from row and column, each in 0..=2.
    ///
    /// # Errors
    ///
    /// Returns [`LockError::CellOutOfRange`] if either coordinate is out
    /// of range.
    pub fn from_row_col(row: usize, col: usize) -> LockResult<Self> {
        if row < 3 && col < 3 {
            Ok(Self(row * 3 + col))
        } else {
            Err(LockError::CellOutOfRange(row * 3 + col))
        }
    }

    /// The raw index, 0..=8.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }

    /// Construct without a range check. Callers guarantee `index < 9`.
    pub(crate) const fn from_raw(index: usize) -> Self {
        Self(index)
    }

    /// Row of this cell, 0..=2.
    #[must_use]
    pub const fn row(self) -> usize {
        self.0 / 3
    }

    /// Column of this cell, 0..=2.
    #[must_use]
    pub const fn col(self) -> usize {
        self.0 % 3
    }
}

impl std::fmt::Display for CellIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A grid cell: fixed center position plus mutable runtime state.
///
/// `radius` is the *visual* radius and moves while a press animation is in
/// flight. Hit testing never reads it; the fixed touch radius lives on the
/// grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    /// Grid position and identity.
    pub index: CellIndex,
    /// Center X in widget coordinates.
    pub x: f32,
    /// Center Y in widget coordinates.
    pub y: f32,
    /// Current visual radius (animated).
    pub radius: f32,
    /// Current status.
    pub status: CellStatus,
}

impl Cell {
    /// Create a cell at the given center with the given base radius.
    #[must_use]
    pub fn new(index: CellIndex, x: f32, y: f32, radius: f32) -> Self {
        Self {
            index,
            x,
            y,
            radius,
            status: CellStatus::Normal,
        }
    }

    /// Euclidean distance from this cell's center to a point.
    #[must_use]
    pub fn distance_to(&self, x: f32, y: f32) -> f32 {
        let dx = x - self.x;
        let dy = y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_index_bounds() {
        assert!(CellIndex::new(0).is_ok());
        assert!(CellIndex::new(8).is_ok());
        assert!(matches!(
            CellIndex::new(9),
            Err(LockError::CellOutOfRange(9))
        ));
    }

    #[test]
    fn test_cell_index_row_col() {
        let idx = CellIndex::from_row_col(2, 1).expect("valid");
        assert_eq!(idx.index(), 7);
        assert_eq!(idx.row(), 2);
        assert_eq!(idx.col(), 1);
        assert!(CellIndex::from_row_col(3, 0).is_err());
    }

    #[test]
    fn test_cell_index_display_is_digit() {
        let idx = CellIndex::new(4).expect("valid");
        assert_eq!(idx.to_string(), "4");
    }

    #[test]
    fn test_distance() {
        let cell = Cell::new(CellIndex::new(0).expect("valid"), 50.0, 50.0, 30.0);
        assert!((cell.distance_to(50.0, 50.0)).abs() < f32::EPSILON);
        assert!((cell.distance_to(53.0, 54.0) - 5.0).abs() < 1e-4);
    }
}
