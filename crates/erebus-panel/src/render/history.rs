//! History table

use super::Patch;
use crate::bindings::Role;
use crate::model::History;

/// Escape text for inclusion in HTML element content.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Table rows for the whole history, most recent first.
pub fn history_html(history: &History) -> String {
    let mut html = String::new();
    for [a, b] in history.rows() {
        html.push_str("<tr><td>");
        html.push_str(&escape_html(a.unwrap_or("")));
        html.push_str("</td><td>");
        html.push_str(&escape_html(b.unwrap_or("")));
        html.push_str("</td></tr>");
    }
    html
}

/// Full replacement of the history container.
pub fn history_table(history: &History) -> Patch {
    Patch::SetHtml {
        role: Role::HistoryTable,
        html: history_html(history),
    }
}
