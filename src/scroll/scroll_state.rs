/// Rows from the end within which the list counts as scrolled to the bottom
pub const NEAR_BOTTOM_ROWS: u16 = 2;

/// Vertical scroll position of the suggestion list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollState {
    pub offset: u16,
    pub max_offset: u16,
    pub viewport_height: u16,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update_bounds(&mut self, content_rows: usize, viewport_height: u16) {
        self.viewport_height = viewport_height;

        // Clamp to u16::MAX for ratatui compatibility
        self.max_offset = content_rows
            .saturating_sub(viewport_height as usize)
            .min(u16::MAX as usize) as u16;

        self.offset = self.offset.min(self.max_offset);
    }

    pub fn scroll_down(&mut self, rows: u16) {
        self.offset = self.offset.saturating_add(rows).min(self.max_offset);
    }

    pub fn scroll_up(&mut self, rows: u16) {
        self.offset = self.offset.saturating_sub(rows);
    }

    pub fn jump_to_bottom(&mut self) {
        self.offset = self.max_offset;
    }

    pub fn reset(&mut self) {
        self.offset = 0;
    }

    pub fn is_at_bottom(&self) -> bool {
        self.offset >= self.max_offset
    }

    /// Bottom edge of the viewport is within `rows` of the content end
    pub fn is_near_bottom(&self, rows: u16) -> bool {
        self.max_offset.saturating_sub(self.offset) <= rows
    }

    /// Scroll the least amount that brings `row` into the viewport
    ///
    /// Returns true if the offset moved.
    pub fn ensure_visible(&mut self, row: usize) -> bool {
        if self.viewport_height == 0 {
            return false;
        }

        let row = row.min(u16::MAX as usize) as u16;
        let before = self.offset;
        let visible_end = self.offset.saturating_add(self.viewport_height);

        if row < self.offset {
            self.offset = row;
        } else if row >= visible_end {
            self.offset = row
                .saturating_add(1)
                .saturating_sub(self.viewport_height)
                .min(self.max_offset);
        }

        self.offset != before
    }
}
