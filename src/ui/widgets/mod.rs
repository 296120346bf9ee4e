mod input;
mod picker;
mod spinner;

pub use input::TextField;
pub use picker::{ListEntry, SelectList};
pub use spinner::Spinner;

use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::Rect;

use super::Theme;

/// Shared capability of the wizard's owned sub-widgets: consume raw key
/// events, paint into a frame region. The wizard drives at most one active
/// control at a time; drawing never mutates widget state.
pub trait Control {
    fn handle_key(&mut self, key: KeyEvent);
    fn draw(&self, frame: &mut Frame, area: Rect, theme: &Theme);
}
