// src/render/mod.rs
//
// Snapshot → page markup. One Section per table; the HTML renderer and the
// GUI data table both consume Section::rows, so the two frontends can never
// disagree about ordering or cell content.

pub mod page;
pub mod results;
pub mod roster;
pub mod schedule;
pub mod timestamp;

use crate::config::options::SectionKind;
use crate::core::escape::escape_html;
use crate::snapshot::{Outcome, TeamSnapshot};

/// One rendered table of the team page.
pub trait Section: Send + Sync + 'static {
    fn kind(&self) -> SectionKind;
    fn title(&self) -> &'static str;

    /// Element id of the table in the page template.
    fn anchor(&self) -> &'static str;

    fn headers(&self) -> &'static [&'static str];

    /// Placeholder text for an empty section.
    fn empty_message(&self) -> &'static str;

    /// Rows in display order. Cells are raw text; escaping happens at emission.
    fn rows(&self, snap: &TeamSnapshot) -> Vec<Vec<String>>;

    /// Column rendered bold (name/opponent), if any.
    fn strong_col(&self) -> Option<usize> { None }

    /// Column carrying a win/loss/pending value, if any.
    fn result_col(&self) -> Option<usize> { None }

    /// Optional: per-section column widths for the GUI table (in px-ish)
    fn preferred_column_widths(&self) -> Option<&'static [usize]> { None }
}

pub static SECTIONS: &[&'static dyn Section] = &[
    &roster::SECTION,
    &schedule::SECTION,
    &results::SECTION,
];

pub fn all() -> &'static [&'static dyn Section] {
    SECTIONS
}

pub fn section_for(kind: SectionKind) -> &'static dyn Section {
    match kind {
        SectionKind::Roster   => &roster::SECTION,
        SectionKind::Schedule => &schedule::SECTION,
        SectionKind::Results  => &results::SECTION,
    }
}

/* ---------------- HTML emission ---------------- */

/// `<tr>` markup for one section's table body.
pub fn section_tbody(section: &dyn Section, snap: &TeamSnapshot) -> String {
    let rows = section.rows(snap);
    if rows.is_empty() {
        return no_data_row(section.headers().len(), section.empty_message());
    }

    let mut out = String::new();
    for row in &rows {
        out.push_str("        <tr>");
        for (ci, cell) in row.iter().enumerate() {
            let text = escape_html(cell);
            if section.strong_col() == Some(ci) {
                out.push_str("<td><strong>");
                out.push_str(&text);
                out.push_str("</strong></td>");
            } else if section.result_col() == Some(ci) {
                let class = Outcome::classify(Some(cell)).css_class();
                out.push_str("<td class=\"");
                out.push_str(class);
                out.push_str("\">");
                out.push_str(&text);
                out.push_str("</td>");
            } else {
                out.push_str("<td>");
                out.push_str(&text);
                out.push_str("</td>");
            }
        }
        out.push_str("</tr>\n");
    }
    out
}

/// Single placeholder row spanning the whole table.
pub fn no_data_row(colspan: usize, msg: &str) -> String {
    format!(
        "        <tr><td colspan=\"{}\" class=\"no-data\">{}</td></tr>\n",
        colspan,
        escape_html(msg)
    )
}
