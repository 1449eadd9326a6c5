use ratatui::layout::{Position, Rect};

/// Label of the footer control that switches to the favorites view.
pub const FAVORITES_BUTTON: &str = " ★ Favorites ";

/// Split the screen into search box, list region and footer.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Area inside a bordered block.
pub fn inner(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

/// Rows of the list region that hold list content.
pub fn list_rect(area: Rect) -> Rect {
    inner(layout_regions(area).1)
}

/// Clickable area of the favorites control, at the start of the footer line.
pub fn favorites_button_rect(area: Rect) -> Rect {
    let footer = inner(layout_regions(area).2);
    let width = FAVORITES_BUTTON.chars().count() as u16;
    Rect {
        x: footer.x,
        y: footer.y,
        width: width.min(footer.width),
        height: footer.height.min(1),
    }
}

pub fn contains(rect: Rect, column: u16, row: u16) -> bool {
    rect.contains(Position::new(column, row))
}
