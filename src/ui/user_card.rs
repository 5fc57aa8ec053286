//! User card widget
//!
//! One bordered row per user:
//!
//! ```text
//! ╭──────────────────────────────────────────────╮
//! │◉ Ms Ada Byron                               #1│
//! │  ada.byron@example.com                        │
//! │  https://randomuser.me/api/portraits/thumb/…  │
//! ╰──────────────────────────────────────────────╯
//! ```
//!
//! Inputs are rendered as given; an empty name or a broken avatar URL is not
//! an error.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::ui::theme::{COLOR_AVATAR, COLOR_BORDER, COLOR_DIM, COLOR_EMAIL, COLOR_NAME};

/// Rows a card occupies, borders included.
pub const CARD_HEIGHT: u16 = 5;

const AVATAR_GLYPH: &str = "◉ ";

#[derive(Debug, Clone)]
pub struct UserCard<'a> {
    name: &'a str,
    email: &'a str,
    avatar: &'a str,
    badge: Option<&'a str>,
    style: Style,
}

impl<'a> UserCard<'a> {
    pub fn new(name: &'a str, email: &'a str, avatar: &'a str) -> Self {
        Self {
            name,
            email,
            avatar,
            badge: None,
            style: Style::default(),
        }
    }

    /// Extra style patched over the default border style.
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Short label drawn right-aligned on the name row.
    pub fn badge(mut self, badge: &'a str) -> Self {
        self.badge = Some(badge);
        self
    }

    fn name_line(&self, width: u16) -> Line<'a> {
        let mut spans = vec![
            Span::styled(AVATAR_GLYPH, Style::default().fg(COLOR_AVATAR)),
            Span::styled(
                self.name,
                Style::default().fg(COLOR_NAME).add_modifier(Modifier::BOLD),
            ),
        ];

        if let Some(badge) = self.badge {
            let used = AVATAR_GLYPH.width() + self.name.width();
            let needed = badge.width() + 1;
            if used + needed <= width as usize {
                let pad = width as usize - used - badge.width();
                spans.push(Span::raw(" ".repeat(pad)));
                spans.push(Span::styled(badge, Style::default().fg(COLOR_DIM)));
            }
        }

        Line::from(spans)
    }
}

impl Widget for UserCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 3 || area.width < 4 {
            return;
        }

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(COLOR_BORDER).patch(self.style));
        let inner = block.inner(area);
        block.render(area, buf);

        let indent = " ".repeat(AVATAR_GLYPH.width());
        let lines = vec![
            self.name_line(inner.width),
            Line::from(vec![
                Span::raw(indent.clone()),
                Span::styled(self.email, Style::default().fg(COLOR_EMAIL)),
            ]),
            Line::from(vec![
                Span::raw(indent),
                Span::styled(self.avatar, Style::default().fg(COLOR_DIM)),
            ]),
        ];

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    fn render(card: UserCard<'_>, width: u16) -> Buffer {
        let area = Rect::new(0, 0, width, CARD_HEIGHT);
        let mut buf = Buffer::empty(area);
        card.render(area, &mut buf);
        buf
    }

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf.cell((x, y)).map(|c| c.symbol()).unwrap_or(" "))
            .collect()
    }

    #[test]
    fn test_renders_name_email_avatar() {
        let buf = render(
            UserCard::new("Mr John Doe", "john@example.com", "https://img/1.jpg"),
            40,
        );
        assert!(row(&buf, 1).contains("Mr John Doe"));
        assert!(row(&buf, 2).contains("john@example.com"));
        assert!(row(&buf, 3).contains("https://img/1.jpg"));
        assert!(row(&buf, 0).starts_with('╭'));
    }

    #[test]
    fn test_badge_is_right_aligned() {
        let buf = render(UserCard::new("A", "a@b.c", "").badge("#7"), 20);
        assert!(row(&buf, 1).trim_end().ends_with("#7│"));
    }

    #[test]
    fn test_badge_dropped_when_too_narrow() {
        let buf = render(
            UserCard::new("A very long name indeed", "", "").badge("#123"),
            16,
        );
        assert!(!row(&buf, 1).contains("#123"));
    }

    #[test]
    fn test_extra_style_patches_border() {
        let buf = render(
            UserCard::new("x", "y", "z").style(Style::default().fg(Color::Magenta)),
            10,
        );
        assert_eq!(buf.cell((0, 0)).unwrap().fg, Color::Magenta);
    }

    #[test]
    fn test_empty_inputs_render() {
        let buf = render(UserCard::new("", "", ""), 10);
        assert!(row(&buf, 0).starts_with('╭'));
    }

    #[test]
    fn test_tiny_area_is_skipped() {
        let area = Rect::new(0, 0, 3, 2);
        let mut buf = Buffer::empty(area);
        UserCard::new("x", "y", "z").render(area, &mut buf);
        assert_eq!(buf, Buffer::empty(area));
    }
}
