//! Feedback grid
//!
//! One row per allowed guess, one cell per letter. A row is empty until the
//! guess occupying it is submitted and is never rewritten afterwards.

use super::Feedback;

/// Grid of per-cell feedback for a round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackGrid {
    width: usize,
    rows: Vec<Option<Vec<Feedback>>>,
}

impl FeedbackGrid {
    /// Create an empty grid of `height` rows by `width` cells
    #[must_use]
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            width,
            rows: vec![None; height],
        }
    }

    /// Number of cells per row
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Feedback of a filled row, `None` if the row is empty or out of range
    #[must_use]
    pub fn row(&self, index: usize) -> Option<&[Feedback]> {
        self.rows.get(index).and_then(|row| row.as_deref())
    }

    /// Feedback of a single cell
    #[must_use]
    pub fn cell(&self, row: usize, column: usize) -> Option<Feedback> {
        self.row(row).and_then(|cells| cells.get(column).copied())
    }

    /// Number of filled rows
    #[must_use]
    pub fn filled_rows(&self) -> usize {
        self.rows.iter().filter(|row| row.is_some()).count()
    }

    /// Total cells across the grid holding `feedback`
    #[must_use]
    pub fn count(&self, feedback: Feedback) -> usize {
        self.rows
            .iter()
            .flatten()
            .flatten()
            .filter(|&&cell| cell == feedback)
            .count()
    }

    /// Write a whole row at once
    ///
    /// Returns false and leaves the grid unchanged if the index is out of
    /// range, the row is already filled, or the width does not match.
    pub(crate) fn fill_row(&mut self, index: usize, feedback: Vec<Feedback>) -> bool {
        if feedback.len() != self.width {
            return false;
        }
        match self.rows.get_mut(index) {
            Some(slot) if slot.is_none() => {
                *slot = Some(feedback);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_empty() {
        let grid = FeedbackGrid::new(6, 5);
        assert_eq!(grid.height(), 6);
        assert_eq!(grid.width(), 5);
        assert_eq!(grid.filled_rows(), 0);
        assert!((0..6).all(|i| grid.row(i).is_none()));
    }

    #[test]
    fn fill_row_once() {
        let mut grid = FeedbackGrid::new(2, 4);
        assert!(grid.fill_row(0, vec![Feedback::Exact; 4]));
        assert!(!grid.fill_row(0, vec![Feedback::Absent; 4]));

        assert_eq!(grid.row(0), Some(&[Feedback::Exact; 4][..]));
        assert_eq!(grid.cell(0, 3), Some(Feedback::Exact));
        assert_eq!(grid.cell(1, 0), None);
        assert_eq!(grid.filled_rows(), 1);
    }

    #[test]
    fn fill_row_rejects_bad_shape() {
        let mut grid = FeedbackGrid::new(2, 4);
        assert!(!grid.fill_row(0, vec![Feedback::Exact; 5]));
        assert!(!grid.fill_row(2, vec![Feedback::Exact; 4]));
        assert_eq!(grid.filled_rows(), 0);
    }

    #[test]
    fn counts_cells_across_rows() {
        let mut grid = FeedbackGrid::new(3, 3);
        grid.fill_row(
            0,
            vec![Feedback::Exact, Feedback::Present, Feedback::Absent],
        );
        grid.fill_row(1, vec![Feedback::Exact, Feedback::Exact, Feedback::Present]);

        assert_eq!(grid.count(Feedback::Exact), 3);
        assert_eq!(grid.count(Feedback::Present), 2);
        assert_eq!(grid.count(Feedback::Absent), 1);
    }
}
