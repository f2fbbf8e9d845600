//! Card grid layout for the home screen.
//!
//! Provides:
//! - 2-column (configurable) grid, row-major ordering - tiles flow left to
//!   right and wrap to the next row
//! - Cursor movement helpers (up/down/left/right)
//! - Pagination for grids taller than the viewport

use std::ops::Range;

/// Grid layout configuration
#[derive(Debug, Clone, Copy)]
pub struct CardGrid {
    /// Number of columns (default: 2)
    pub columns: u16,
    /// Number of visible tile rows (default: 2)
    pub visible_rows: u16,
}

impl Default for CardGrid {
    fn default() -> Self {
        Self {
            columns: 2,
            visible_rows: 2,
        }
    }
}

impl CardGrid {
    /// Create a new grid layout
    pub fn new(columns: u16, visible_rows: u16) -> Self {
        Self {
            columns: columns.clamp(1, 4),
            visible_rows: visible_rows.clamp(1, 10),
        }
    }

    /// Total number of visible tiles (columns × rows)
    pub fn visible_count(&self) -> usize {
        (self.columns as usize) * (self.visible_rows as usize)
    }

    /// Calculate the range of tiles visible for a given cursor position.
    /// Returns the start..end indices of tiles to display.
    pub fn visible_range(&self, selected: usize, total: usize) -> Range<usize> {
        if total == 0 {
            return 0..0;
        }

        let page_size = self.visible_count();
        let page = selected / page_size;
        let start = page * page_size;
        let end = (start + page_size).min(total);
        start..end
    }

    /// Convert a page-local index to (row, col). Row-major ordering:
    /// ```text
    /// Index:  0 1
    ///         2 3
    /// ```
    pub fn index_to_position(&self, index: usize) -> (u16, u16) {
        let columns = self.columns as usize;
        let row = index / columns;
        let col = index % columns;
        (row as u16, col as u16)
    }

    /// Cursor one tile back (wraps across row boundaries)
    pub fn move_left(&self, current: usize) -> usize {
        current.saturating_sub(1)
    }

    /// Cursor one tile forward (wraps across row boundaries)
    pub fn move_right(&self, current: usize, total: usize) -> usize {
        if current + 1 < total {
            current + 1
        } else {
            current
        }
    }

    /// Cursor one row up
    pub fn move_up(&self, current: usize) -> usize {
        current.saturating_sub(self.columns as usize)
    }

    /// Cursor one row down, clamped to the last tile
    pub fn move_down(&self, current: usize, total: usize) -> usize {
        if total == 0 {
            return 0;
        }
        (current + self.columns as usize).min(total - 1)
    }
}
