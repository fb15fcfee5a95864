use crate::ui::theme::Theme;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const APP_NAME: &str = "moviedeck";

pub struct Header<'a> {
    title: &'a str,
}

impl<'a> Header<'a> {
    pub fn new(title: &'a str) -> Self {
        Self { title }
    }

    pub fn widget(&self, theme: &Theme) -> Paragraph<'static> {
        let text_style = Style::default().fg(theme.text);
        let separator_style = Style::default().fg(theme.separator);
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(
                APP_NAME,
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(self.title.to_string(), text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(theme.separator)),
        )
    }
}
