use crate::ui::layout::FAVORITES_BUTTON;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, BODY_TEXT, GLOBAL_BORDER, STATUS_ERROR};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const HINTS: &str = " Enter: Toggle │ Tab: Favorites │ Ctrl+U: Clear │ Esc: Quit";

/// Favorites control, key hints, and either the last error or the version.
pub struct Footer<'a> {
    status: Option<&'a str>,
}

impl<'a> Footer<'a> {
    pub fn new(status: Option<&'a str>) -> Self {
        Self { status }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let button_style = Style::default()
            .fg(ACCENT)
            .bg(ACTIVE_HIGHLIGHT)
            .add_modifier(Modifier::BOLD);
        let text_style = Style::default().fg(BODY_TEXT).add_modifier(Modifier::DIM);

        let (right, right_style) = match self.status {
            Some(message) => (
                format!("{} ", message),
                Style::default().fg(STATUS_ERROR),
            ),
            None => (format!("v{} ", VERSION), text_style),
        };

        // Pad by char count, not byte count.
        let used = FAVORITES_BUTTON.chars().count()
            + HINTS.chars().count()
            + right.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width.saturating_sub(used);

        let line = Line::from(vec![
            Span::styled(FAVORITES_BUTTON, button_style),
            Span::styled(HINTS, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(right, right_style),
        ]);

        Paragraph::new(line).alignment(Alignment::Left).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
