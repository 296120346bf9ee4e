use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::Paragraph;

use super::{Control, Theme};

const FRAMES: [char; 4] = ['|', '/', '-', '\\'];

/// Busy indicator advanced by the event loop's tick, independent of which
/// wizard state is active.
#[derive(Debug, Clone, Default)]
pub struct Spinner {
    frame: usize,
}

impl Spinner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick(&mut self) {
        self.frame = (self.frame + 1) % FRAMES.len();
    }

    pub fn glyph(&self) -> char {
        FRAMES[self.frame]
    }
}

impl Control for Spinner {
    fn handle_key(&mut self, _key: KeyEvent) {}

    fn draw(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        frame.render_widget(
            Paragraph::new(self.glyph().to_string()).style(theme.primary_style()),
            area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycles_through_all_frames() {
        let mut spinner = Spinner::new();
        let first = spinner.glyph();
        let mut seen = vec![first];
        for _ in 0..FRAMES.len() - 1 {
            spinner.tick();
            seen.push(spinner.glyph());
        }
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), FRAMES.len());

        spinner.tick();
        assert_eq!(spinner.glyph(), first);
    }
}
