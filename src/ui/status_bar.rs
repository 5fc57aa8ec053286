//! Single-row status bar
//!
//! ```text
//!  page 3 · 60 users · loading                  api 1.4 · seed 5d1c0a3e · q quit
//! ```

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::ui::theme::{COLOR_ACTIVE, COLOR_DIM, COLOR_LOADING};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let dim = Style::default().fg(COLOR_DIM);

    let mut left = vec![
        Span::styled(" page ", dim),
        Span::styled(app.page.to_string(), Style::default().fg(COLOR_ACTIVE)),
        Span::styled(" · ", dim),
        Span::styled(app.users.len().to_string(), Style::default().fg(COLOR_ACTIVE)),
        Span::styled(" users", dim),
    ];
    if app.loading {
        left.push(Span::styled(" · ", dim));
        left.push(Span::styled("loading", Style::default().fg(COLOR_LOADING)));
    }

    let mut right = Vec::new();
    if let Some(info) = &app.last_info {
        right.push(Span::styled(format!("api {} · seed {} · ", info.version, info.seed), dim));
    }
    right.push(Span::styled("q quit ", dim));

    frame.render_widget(Paragraph::new(Line::from(left)), area);
    frame.render_widget(
        Paragraph::new(Line::from(right)).alignment(Alignment::Right),
        area,
    );
}
