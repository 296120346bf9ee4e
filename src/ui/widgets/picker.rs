use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};

use super::{Control, Theme};

/// An entry in a [`SelectList`]: a short title plus one line of context.
#[derive(Debug, Clone)]
pub struct ListEntry {
    pub title: String,
    pub description: String,
}

impl ListEntry {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Vertically navigable selection list. Selection never wraps; an empty
/// list has no selection.
#[derive(Debug, Clone)]
pub struct SelectList {
    title: String,
    entries: Vec<ListEntry>,
    selected: Option<usize>,
}

impl SelectList {
    pub fn new(title: impl Into<String>, entries: Vec<ListEntry>) -> Self {
        let selected = if entries.is_empty() { None } else { Some(0) };
        Self {
            title: title.into(),
            entries,
            selected,
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_entry(&self) -> Option<&ListEntry> {
        self.selected.and_then(|i| self.entries.get(i))
    }

    fn select_previous(&mut self) {
        if let Some(i) = self.selected
            && i > 0
        {
            self.selected = Some(i - 1);
        }
    }

    fn select_next(&mut self) {
        if let Some(i) = self.selected
            && i + 1 < self.entries.len()
        {
            self.selected = Some(i + 1);
        }
    }
}

impl Control for SelectList {
    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            _ => {}
        }
    }

    fn draw(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let items: Vec<ListItem> = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let is_selected = Some(i) == self.selected();
                let marker = if is_selected { ">" } else { " " };
                let title_style = if is_selected {
                    theme.primary_style().add_modifier(Modifier::BOLD)
                } else {
                    theme.style()
                };
                ListItem::new(vec![
                    Line::styled(format!("{} {}", marker, entry.title), title_style),
                    Line::styled(format!("   {}", entry.description), theme.muted_style()),
                ])
            })
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style())
            .title(format!(" {} ", self.title))
            .title_style(theme.title_style());

        let list = List::new(items).block(block);
        let mut state = ListState::default().with_selected(self.selected);
        frame.render_stateful_widget(list, area, &mut state);
    }
}
