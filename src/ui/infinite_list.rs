//! Scrolling list of user cards with a trailing sentinel row.
//!
//! Only cards overlapping the viewport are drawn. A card cut by the top or
//! bottom edge is rendered into a scratch buffer and the visible rows copied
//! across, so partially scrolled cards keep their borders where they belong.
//!
//! ## Layout (content rows)
//!
//! ```text
//! 0                 card 0          (CARD_HEIGHT rows)
//! CARD_HEIGHT       gap             (CARD_GAP rows)
//! STRIDE            card 1
//! ...
//! n * STRIDE        sentinel        (SENTINEL_HEIGHT rows, "Loading..." while loading)
//! ```

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::Line,
    widgets::{Paragraph, Widget},
};

use crate::models::User;
use crate::scroll::SentinelGeometry;
use crate::ui::theme::{COLOR_LOADING, SPINNER_FRAMES};
use crate::ui::user_card::{UserCard, CARD_HEIGHT};

pub const CARD_GAP: u16 = 1;
pub const SENTINEL_HEIGHT: u16 = 1;
const STRIDE: u32 = (CARD_HEIGHT + CARD_GAP) as u32;

/// Content row where the sentinel starts for `count` cards.
pub fn sentinel_top(count: usize) -> u32 {
    (count as u32).saturating_mul(STRIDE)
}

/// Total content rows for `count` cards, sentinel included.
pub fn content_height(count: usize) -> u32 {
    sentinel_top(count).saturating_add(SENTINEL_HEIGHT as u32)
}

pub struct InfiniteList<'a> {
    users: &'a [User],
    loading: bool,
    offset: u32,
    tick: u64,
    card_style: Style,
}

impl<'a> InfiniteList<'a> {
    pub fn new(users: &'a [User]) -> Self {
        Self {
            users,
            loading: false,
            offset: 0,
            tick: 0,
            card_style: Style::default(),
        }
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// First content row shown at the top of the area.
    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    /// Animation tick for the spinner.
    pub fn tick(mut self, tick: u64) -> Self {
        self.tick = tick;
        self
    }

    /// Style patched onto every card.
    pub fn card_style(mut self, style: Style) -> Self {
        self.card_style = style;
        self
    }

    /// Render and report where the sentinel landed.
    pub fn render_list(self, area: Rect, buf: &mut Buffer) -> SentinelGeometry {
        let geometry = SentinelGeometry {
            scroll_offset: self.offset,
            viewport_height: area.height as u32,
            sentinel_top: sentinel_top(self.users.len()),
            sentinel_height: SENTINEL_HEIGHT as u32,
        };

        if area.is_empty() {
            return geometry;
        }

        let view_end = self.offset + area.height as u32;
        let first = (self.offset / STRIDE) as usize;

        for (index, user) in self.users.iter().enumerate().skip(first) {
            let card_top = index as u32 * STRIDE;
            if card_top >= view_end {
                break;
            }

            let name = user.display_name();
            let badge = format!("#{}", index + 1);
            let card = UserCard::new(&name, &user.email, user.avatar())
                .badge(&badge)
                .style(self.card_style);
            render_clipped(card, card_top, CARD_HEIGHT, self.offset, area, buf);
        }

        if (self.offset..view_end).contains(&geometry.sentinel_top) {
            let y = area.y + (geometry.sentinel_top - self.offset) as u16;
            let row = Rect::new(area.x, y, area.width, SENTINEL_HEIGHT);
            if self.loading {
                let frame = SPINNER_FRAMES[(self.tick as usize / 4) % SPINNER_FRAMES.len()];
                Paragraph::new(Line::from(format!("{} Loading...", frame)))
                    .style(Style::default().fg(COLOR_LOADING))
                    .alignment(Alignment::Center)
                    .render(row, buf);
            }
        }

        geometry
    }
}

impl Widget for InfiniteList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.render_list(area, buf);
    }
}

/// Draw `widget` as if it sat at content row `top`, copying only the rows
/// that fall inside `[offset, offset + area.height)`.
fn render_clipped<W: Widget>(
    widget: W,
    top: u32,
    height: u16,
    offset: u32,
    area: Rect,
    buf: &mut Buffer,
) {
    let view_end = offset + area.height as u32;
    let fully_visible = top >= offset && top + height as u32 <= view_end;

    if fully_visible {
        let y = area.y + (top - offset) as u16;
        widget.render(Rect::new(area.x, y, area.width, height), buf);
        return;
    }

    let scratch_area = Rect::new(0, 0, area.width, height);
    let mut scratch = Buffer::empty(scratch_area);
    widget.render(scratch_area, &mut scratch);

    for row in 0..height {
        let content_row = top + row as u32;
        if content_row < offset || content_row >= view_end {
            continue;
        }
        let y = area.y + (content_row - offset) as u16;
        for x in 0..area.width {
            if let (Some(src), Some(dst)) = (scratch.cell((x, row)), buf.cell_mut((area.x + x, y)))
            {
                *dst = src.clone();
            }
        }
    }
}
