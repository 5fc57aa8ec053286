//! UI rendering
//!
//! One screen, three rows:
//! - Header with the title
//! - The infinite list of user cards (with its sentinel)
//! - Status bar

pub mod infinite_list;
pub mod status_bar;
pub mod theme;
pub mod user_card;

pub use infinite_list::{content_height, sentinel_top, InfiniteList};
pub use user_card::{UserCard, CARD_HEIGHT};

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use theme::{COLOR_BORDER, COLOR_HEADER};

pub const TITLE: &str = "Infinite Scroll";
const HEADER_HEIGHT: u16 = 2;

/// Render the whole screen and record the sentinel geometry on `app`.
pub fn render(frame: &mut Frame, app: &mut App) {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_header(frame, header);

    let list_area = body.inner(ratatui::layout::Margin::new(1, 0));
    app.scroll_state
        .update_limits(content_height(app.users.len()), list_area.height as u32);

    let geometry = InfiniteList::new(&app.users)
        .loading(app.loading)
        .offset(app.scroll_state.offset())
        .tick(app.tick_count)
        .render_list(list_area, frame.buffer_mut());
    app.sentinel = Some(geometry);

    status_bar::render(frame, footer, app);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(TITLE)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(COLOR_BORDER)),
        );
    frame.render_widget(title, area);
}
