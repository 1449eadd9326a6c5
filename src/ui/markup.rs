//! HTML rendering of a [`ListView`].
//!
//! Produces the item markup of the list region: one `div.item` per row,
//! favorite rows tagged `favitem`, entry images tagged `emoji` (plus `fav`)
//! with the entry name in `alt`.

use crate::ui::view::{EntryRow, ListView, Placeholder, ViewRow};

pub fn to_html(view: &ListView) -> String {
    view.rows()
        .into_iter()
        .map(|row| match row {
            ViewRow::Header(text) => header_item(text),
            ViewRow::Entry(entry) => entry_item(entry),
            ViewRow::Placeholder(placeholder) => placeholder_item(placeholder),
        })
        .collect()
}

fn header_item(text: &str) -> String {
    format!(
        "<div class='item'>\n  <p> <strong> {} </strong> </p>\n</div>\n",
        escape(text)
    )
}

fn entry_item(entry: &EntryRow) -> String {
    let (item_class, img_class) = if entry.favorite {
        ("item favitem", "fav emoji")
    } else {
        ("item", "emoji")
    };
    format!(
        "<div class=\"{item_class}\">\n  <p> <strong> {name} </strong> </p>\n  <p> <img class=\"{img_class}\" alt=\"{name}\" src=\"{src}\"> </p>\n</div>\n",
        name = escape(&entry.name),
        src = escape(&entry.image_ref),
    )
}

fn placeholder_item(placeholder: &Placeholder) -> String {
    let mut html = format!(
        "<div class='item'>\n  <p> {} </p>\n",
        escape(placeholder.text)
    );
    if let Some(name) = placeholder.image_name {
        html.push_str(&format!(
            "  <p> <img alt=\"{}\" src=\"{}\"> </p>\n",
            escape(name),
            escape(placeholder.image_ref.as_deref().unwrap_or_default())
        ));
    }
    html.push_str("</div>\n");
    html
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
