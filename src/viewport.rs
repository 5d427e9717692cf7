//! Scroll state for the visible window into the buffer.

/// The (top line, left column) of the buffer cell drawn at the grid origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    pub top_line: usize,
    pub left_col: usize,
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scroll so the cursor sits inside the visible window. One grid row is
    /// reserved for the status line, so the text area is `grid_height - 1`
    /// rows tall; columns use the full grid width. Idempotent: calling it
    /// again without a cursor move changes nothing.
    pub fn reconcile(&mut self, cursor: (usize, usize), grid_height: usize, grid_width: usize) {
        if grid_height <= 1 || grid_width == 0 {
            return;
        }
        let display_height = grid_height - 1;
        let (row, col) = cursor;

        if row < self.top_line {
            self.top_line = row;
        } else if row >= self.top_line + display_height {
            self.top_line = row - display_height + 1;
        }

        if col < self.left_col {
            self.left_col = col;
        } else if col >= self.left_col + grid_width {
            self.left_col = col - grid_width + 1;
        }
    }
}
