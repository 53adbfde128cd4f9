// Scroll state for the list viewport
//
// Offset/total/viewport bookkeeping with clamping. This screen reads
// top-down, so the state starts at offset 0 and never follows new content.

/// Scroll state for the content area (header rows + list rows)
#[derive(Debug, Clone, Default)]
pub struct ScrollState {
    /// Row index at the top of the viewport
    offset: usize,

    /// Total number of content rows
    total: usize,

    /// Number of rows visible in the viewport
    viewport: usize,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update content and viewport sizes; call once per render frame.
    /// Clamps the offset so the last page stays full.
    pub fn update_dimensions(&mut self, total: usize, viewport: usize) {
        self.total = total;
        self.viewport = viewport;
        self.offset = self.offset.min(self.max_offset());
    }

    pub fn scroll_up(&mut self) {
        self.offset = self.offset.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        if self.offset < self.max_offset() {
            self.offset += 1;
        }
    }

    pub fn page_up(&mut self) {
        let page = self.viewport.max(1);
        self.offset = self.offset.saturating_sub(page);
    }

    pub fn page_down(&mut self) {
        let page = self.viewport.max(1);
        self.offset = (self.offset + page).min(self.max_offset());
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Visible range of content rows (start, end)
    pub fn visible_range(&self) -> (usize, usize) {
        let start = self.offset;
        let end = (self.offset + self.viewport).min(self.total);
        (start, end)
    }

    fn max_offset(&self) -> usize {
        self.total.saturating_sub(self.viewport)
    }
}
