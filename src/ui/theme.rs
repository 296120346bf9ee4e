use ratatui::style::{Color, Modifier, Style};

/// Explicit style value owned by the wizard and passed into every draw
/// call. There is no process-wide styling state.
#[derive(Debug, Clone)]
pub struct Theme {
    pub primary: Color,
    pub foreground: Color,
    pub background: Color,
    pub error: Color,
    pub success: Color,
    pub border: Color,
    pub muted: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: Color::Rgb(0xEC, 0x58, 0x00),
            foreground: Color::White,
            background: Color::Reset,
            error: Color::Red,
            success: Color::Green,
            border: Color::Rgb(0xEC, 0x58, 0x00),
            muted: Color::DarkGray,
        }
    }
}

impl Theme {
    pub fn style(&self) -> Style {
        Style::default().fg(self.foreground).bg(self.background)
    }

    pub fn primary_style(&self) -> Style {
        Style::default().fg(self.primary)
    }

    pub fn title_style(&self) -> Style {
        Style::default().fg(self.primary).add_modifier(Modifier::BOLD)
    }

    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    pub fn success_style(&self) -> Style {
        Style::default().fg(self.success)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }
}
