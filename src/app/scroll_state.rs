//! Scroll position of the user list.
//!
//! Offsets count content rows from the top of the list. Limits are refreshed
//! on every render from the content height and the list viewport.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrollState {
    offset: u32,
    max_offset: u32,
    viewport_height: u32,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn max_offset(&self) -> u32 {
        self.max_offset
    }

    pub fn viewport_height(&self) -> u32 {
        self.viewport_height
    }

    /// Update limits after a layout pass, clamping the offset.
    pub fn update_limits(&mut self, content_height: u32, viewport_height: u32) {
        self.viewport_height = viewport_height;
        self.max_offset = content_height.saturating_sub(viewport_height);
        self.offset = self.offset.min(self.max_offset);
    }

    /// Scroll towards the end of the list. Returns true if the offset changed.
    ///
    /// The offset is not clamped here when limits are not known yet; the next
    /// render clamps it.
    pub fn scroll_down(&mut self, lines: u32) -> bool {
        let old = self.offset;
        self.offset = self.offset.saturating_add(lines);
        if self.viewport_height > 0 {
            self.offset = self.offset.min(self.max_offset);
        }
        old != self.offset
    }

    /// Scroll towards the start of the list. Returns true if the offset changed.
    pub fn scroll_up(&mut self, lines: u32) -> bool {
        let old = self.offset;
        self.offset = self.offset.saturating_sub(lines);
        old != self.offset
    }

    pub fn page_down(&mut self) -> bool {
        self.scroll_down(self.viewport_height.max(1))
    }

    pub fn page_up(&mut self) -> bool {
        self.scroll_up(self.viewport_height.max(1))
    }

    pub fn scroll_to_top(&mut self) -> bool {
        self.scroll_up(self.offset)
    }

    pub fn scroll_to_bottom(&mut self) -> bool {
        let old = self.offset;
        self.offset = self.max_offset;
        old != self.offset
    }

    pub fn is_at_bottom(&self) -> bool {
        self.offset >= self.max_offset
    }
}
