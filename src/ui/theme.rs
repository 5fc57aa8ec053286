//! Color theme constants
//!
//! Minimal dark palette shared by the header, cards and status bar.

use ratatui::style::Color;

/// Card and header borders
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Header title
pub const COLOR_HEADER: Color = Color::White;

/// User name heading on a card
pub const COLOR_NAME: Color = Color::White;

/// Email line on a card
pub const COLOR_EMAIL: Color = Color::Gray;

/// Avatar glyph
pub const COLOR_AVATAR: Color = Color::Rgb(0, 122, 204); // blue #007ACC

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Loading indicator and spinner
pub const COLOR_LOADING: Color = Color::Cyan;

/// Status bar counters
pub const COLOR_ACTIVE: Color = Color::LightGreen;

/// Spinner animation frames
pub const SPINNER_FRAMES: [char; 4] = ['◐', '◓', '◑', '◒'];
