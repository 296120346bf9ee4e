use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::{Block, Borders, Paragraph};

use super::{Control, Theme};

/// Single-line text input with a prompt title and a placeholder shown while
/// empty. The cursor is tracked as a character index.
#[derive(Debug, Clone, Default)]
pub struct TextField {
    prompt: String,
    placeholder: String,
    content: String,
    cursor: usize,
    focused: bool,
}

impl TextField {
    pub fn new(prompt: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            placeholder: placeholder.into(),
            ..Self::default()
        }
    }

    pub fn value(&self) -> &str {
        &self.content
    }

    pub fn set_value(&mut self, value: &str) {
        self.content = value.to_string();
        self.cursor = self.content.chars().count();
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_index(&self) -> usize {
        self.content
            .char_indices()
            .map(|(i, _)| i)
            .nth(self.cursor)
            .unwrap_or(self.content.len())
    }

    fn insert(&mut self, c: char) {
        let at = self.byte_index();
        self.content.insert(at, c);
        self.cursor += 1;
    }

    fn delete_back(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index();
            self.content.remove(at);
        }
    }

    fn delete_forward(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_index();
            self.content.remove(at);
        }
    }

    fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }
}

impl Control for TextField {
    fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if key.code == KeyCode::Char('u') {
                self.clear();
            }
            return;
        }

        match key.code {
            KeyCode::Char(c) => self.insert(c),
            KeyCode::Backspace => self.delete_back(),
            KeyCode::Delete => self.delete_forward(),
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.char_count()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.char_count(),
            _ => {}
        }
    }

    fn draw(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style())
            .title(format!(" {} ", self.prompt))
            .title_style(theme.title_style());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let width = inner.width as usize;
        if self.content.is_empty() {
            let placeholder: String = self.placeholder.chars().take(width).collect();
            frame.render_widget(
                Paragraph::new(placeholder).style(theme.muted_style()),
                inner,
            );
            if self.focused {
                frame.set_cursor_position((inner.x, inner.y));
            }
            return;
        }

        // Keep the cursor inside the visible window when the content is
        // wider than the field.
        let offset = self.cursor.saturating_sub(width.saturating_sub(1));
        let visible: String = self.content.chars().skip(offset).take(width).collect();
        frame.render_widget(Paragraph::new(visible).style(theme.style()), inner);

        if self.focused {
            let column = (self.cursor - offset).min(width.saturating_sub(1)) as u16;
            frame.set_cursor_position((inner.x + column, inner.y));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(field: &mut TextField, text: &str) {
        for c in text.chars() {
            field.handle_key(press(KeyCode::Char(c)));
        }
    }

    #[test]
    fn typing_appends_at_cursor() {
        let mut field = TextField::new("Name", "Name");
        type_str(&mut field, "acme");
        assert_eq!(field.value(), "acme");
    }

    #[test]
    fn cursor_movement_and_mid_insert() {
        let mut field = TextField::new("Name", "Name");
        type_str(&mut field, "ace");
        field.handle_key(press(KeyCode::Left));
        field.handle_key(press(KeyCode::Left));
        type_str(&mut field, "b");
        assert_eq!(field.value(), "abce");

        field.handle_key(press(KeyCode::End));
        field.handle_key(press(KeyCode::Backspace));
        assert_eq!(field.value(), "abc");
    }

    #[test]
    fn backspace_and_delete_handle_multibyte_text() {
        let mut field = TextField::new("Name", "Name");
        type_str(&mut field, "naïve");
        field.handle_key(press(KeyCode::Backspace));
        assert_eq!(field.value(), "naïv");

        field.handle_key(press(KeyCode::Home));
        field.handle_key(press(KeyCode::Right));
        field.handle_key(press(KeyCode::Right));
        field.handle_key(press(KeyCode::Delete));
        assert_eq!(field.value(), "nav");
    }

    #[test]
    fn ctrl_u_clears_the_line() {
        let mut field = TextField::new("Name", "Name");
        type_str(&mut field, "something");
        field.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        assert_eq!(field.value(), "");
    }

    #[test]
    fn set_value_moves_cursor_to_end() {
        let mut field = TextField::new("Name", "Name");
        field.set_value("hello");
        field.handle_key(press(KeyCode::Char('!')));
        assert_eq!(field.value(), "hello!");
    }

    #[test]
    fn focus_state_toggles() {
        let mut field = TextField::new("Name", "Name");
        assert!(!field.is_focused());
        field.focus();
        assert!(field.is_focused());
        field.blur();
        assert!(!field.is_focused());
    }
}
