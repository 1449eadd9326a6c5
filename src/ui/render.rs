use crate::catalog::display_glyph;
use crate::ui::app::{App, CatalogStatus};
use crate::ui::finder::ViewMode;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{inner, layout_regions};
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, BODY_TEXT, FAVORITE, GLOBAL_BORDER, MUTED_TEXT};
use crate::ui::view::{EntryRow, Placeholder, ViewRow};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let header_widget = Header::new(app.input(), app.is_input_enabled());
    frame.render_widget(header_widget.widget(), header);
    if app.is_input_enabled() && header.width > 2 && header.height > 2 {
        let field = inner(header);
        let x = field.x + (app.input().chars().count() as u16).min(field.width.saturating_sub(1));
        frame.set_cursor_position((x, field.y));
    }

    frame.render_widget(Clear, body);
    frame.render_widget(list_widget(app, usize::from(inner(body).height)), body);

    let status = match app.catalog_status() {
        CatalogStatus::Failed(message) => Some(message.as_str()),
        _ => app.last_error(),
    };
    frame.render_widget(Footer::new(status).widget(footer), footer);
}

fn list_widget(app: &App, height: usize) -> Paragraph<'static> {
    let view = app.displayed();
    let selected = view.entries().get(app.selected()).map(|e| e.name.as_str());
    let lines: Vec<Line<'static>> = view
        .rows()
        .into_iter()
        .skip(app.scroll())
        .take(height)
        .map(|row| match row {
            ViewRow::Header(text) => Line::from(Span::styled(
                text,
                Style::default().fg(MUTED_TEXT).add_modifier(Modifier::BOLD),
            )),
            ViewRow::Entry(entry) => entry_line(entry, selected == Some(entry.name.as_str())),
            ViewRow::Placeholder(placeholder) => placeholder_line(placeholder),
        })
        .collect();

    let title = match app.state().view_mode() {
        ViewMode::Favorites => " Favorites ",
        ViewMode::SearchResults => " Results ",
    };
    let mut paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(Span::styled(title, Style::default().fg(ACCENT)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    // Old content stays dimmed until the delayed swap.
    if app.is_entering() {
        paragraph = paragraph.style(Style::default().add_modifier(Modifier::DIM));
    }
    paragraph
}

fn entry_line(entry: &EntryRow, highlighted: bool) -> Line<'static> {
    let (marker, name_style) = if entry.favorite {
        ("★ ", Style::default().fg(FAVORITE).add_modifier(Modifier::BOLD))
    } else {
        ("  ", Style::default().fg(BODY_TEXT))
    };
    let mut line = Line::from(vec![
        Span::styled(marker, Style::default().fg(FAVORITE)),
        Span::raw(format!("{}  ", display_glyph(&entry.image_ref))),
        Span::styled(entry.name.clone(), name_style),
    ]);
    if highlighted {
        line = line.style(Style::default().bg(ACTIVE_HIGHLIGHT));
    }
    line
}

fn placeholder_line(placeholder: &Placeholder) -> Line<'static> {
    let mut spans = vec![Span::styled(
        placeholder.text,
        Style::default().fg(BODY_TEXT),
    )];
    if let Some(image_ref) = &placeholder.image_ref {
        spans.push(Span::raw(format!("  {}", display_glyph(image_ref))));
    }
    Line::from(spans)
}
