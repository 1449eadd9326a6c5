use crate::ui::theme::{ACCENT, BODY_TEXT, GLOBAL_BORDER, MUTED_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// The search input box.
pub struct Header<'a> {
    input: &'a str,
    enabled: bool,
}

impl<'a> Header<'a> {
    pub fn new(input: &'a str, enabled: bool) -> Self {
        Self { input, enabled }
    }

    pub fn widget(&self) -> Paragraph<'a> {
        let (title, text_style) = if self.enabled {
            (" Search ", Style::default().fg(BODY_TEXT))
        } else {
            (
                " Search (unavailable) ",
                Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM),
            )
        };

        let line = if self.input.is_empty() && self.enabled {
            Line::from(Span::styled(
                "Type an emoji name...",
                Style::default().fg(MUTED_TEXT),
            ))
        } else {
            Line::from(Span::styled(self.input, text_style))
        };

        Paragraph::new(line).block(
            Block::default()
                .title(Span::styled(title, Style::default().fg(ACCENT)))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
