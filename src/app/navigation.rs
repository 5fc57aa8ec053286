//! Keyboard and mouse navigation for the App.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind};

use super::App;

/// Rows moved per mouse wheel notch
pub const WHEEL_SCROLL_LINES: u32 = 3;

impl App {
    /// Handle a key press. Returns `true` if the key was consumed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if key.code == KeyCode::Char('c') {
                self.quit();
                return true;
            }
            return false;
        }

        let moved = match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.quit();
                return true;
            }
            KeyCode::Char('j') | KeyCode::Down => self.scroll_state.scroll_down(1),
            KeyCode::Char('k') | KeyCode::Up => self.scroll_state.scroll_up(1),
            KeyCode::PageDown | KeyCode::Char(' ') => self.scroll_state.page_down(),
            KeyCode::PageUp => self.scroll_state.page_up(),
            KeyCode::Char('g') | KeyCode::Home => self.scroll_state.scroll_to_top(),
            KeyCode::Char('G') | KeyCode::End => self.scroll_state.scroll_to_bottom(),
            _ => return false,
        };

        if moved {
            self.mark_dirty();
        }
        true
    }

    /// Handle a mouse event. Only the wheel is used.
    pub fn handle_mouse(&mut self, event: MouseEvent) {
        let moved = match event.kind {
            MouseEventKind::ScrollDown => self.scroll_state.scroll_down(WHEEL_SCROLL_LINES),
            MouseEventKind::ScrollUp => self.scroll_state.scroll_up(WHEEL_SCROLL_LINES),
            _ => false,
        };
        if moved {
            self.mark_dirty();
        }
    }

    /// Terminal size changed; limits are recomputed on the next render.
    pub fn handle_resize(&mut self) {
        self.mark_dirty();
    }
}
