//! The press path: ordered, duplicate-free cell selection.

use serde::{Deserialize, Serialize};

use crate::cell::CellIndex;

/// The ordered sequence of cells selected during the current gesture.
///
/// Insertion order is selection order and duplicates are rejected, so the
/// digit serialization of any gesture is unique per cell and
/// first-touched-first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PressPath {
    cells: Vec<CellIndex>,
}

impl PressPath {
    /// Create an empty path.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a cell. Returns `false` (and leaves the path untouched) if
    /// the cell is already present.
    pub fn push(&mut self, index: CellIndex) -> bool {
        if self.cells.contains(&index) {
            return false;
        }
        self.cells.push(index);
        true
    }

    /// Whether the cell has already been selected.
    #[must_use]
    pub fn contains(&self, index: CellIndex) -> bool {
        self.cells.contains(&index)
    }

    /// The most recently selected cell.
    #[must_use]
    pub fn last(&self) -> Option<CellIndex> {
        self.cells.last().copied()
    }

    /// Number of selected cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether no cell has been selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Drop all selections.
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Iterate selected cells in selection order.
    pub fn iter(&self) -> impl Iterator<Item = CellIndex> + '_ {
        self.cells.iter().copied()
    }

    /// Serialize the path as a digit string, e.g. "014" for 0 -> 1 -> 4.
    /// An empty path serializes to the empty string.
    #[must_use]
    pub fn digits(&self) -> String {
        self.cells.iter().map(ToString::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idx(i: usize) -> CellIndex {
        CellIndex::new(i).expect("valid index")
    }

    #[test]
    fn test_push_keeps_order() {
        let mut path = PressPath::new();
        assert!(path.push(idx(0)));
        assert!(path.push(idx(1)));
        assert!(path.push(idx(4)));
        assert_eq!(path.digits(), "014");
        assert_eq!(path.last(), Some(idx(4)));
    }

    #[test]
    fn test_push_rejects_duplicates() {
        let mut path = PressPath::new();
        assert!(path.push(idx(3)));
        assert!(!path.push(idx(3)));
        assert_eq!(path.len(), 1);
        assert_eq!(path.digits(), "3");
    }

    #[test]
    fn test_empty_digits() {
        let path = PressPath::new();
        assert!(path.is_empty());
        assert_eq!(path.digits(), "");
        assert_eq!(path.last(), None);
    }

    #[test]
    fn test_clear() {
        let mut path = PressPath::new();
        path.push(idx(8));
        path.clear();
        assert!(path.is_empty());
        assert!(!path.contains(idx(8)));
    }
}
