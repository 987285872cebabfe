// src/render/page.rs
//
// Assembles the full team page from the embedded template. Four regions get
// filled: the last-updated line and one table body per section. Rendering is
// all-or-nothing; a failed fetch produces the uniform error page instead.

use crate::config::consts::{DEFAULT_TEAM_NAME, PAGE_TITLE, STYLESHEET_FILENAME};
use crate::core::escape::escape_html;
use crate::snapshot::TeamSnapshot;

use super::{all, no_data_row, section_tbody, timestamp, Section};

const TEMPLATE: &str = include_str!("../../assets/page.html");

pub const STYLESHEET: &str = include_str!("../../assets/site.css");

/// Shown in every region when the snapshot could not be loaded.
pub const ERROR_MESSAGE: &str = "Error loading data. Please try again later.";

pub fn render_page(snap: &TeamSnapshot, inline_styles: bool) -> String {
    let mut html = shell(snap.team_name(), inline_styles);
    html = html.replace(
        "{{last_updated}}",
        &escape_html(&timestamp::format_last_updated(
            snap.metadata.last_updated.as_deref(),
        )),
    );
    for section in all() {
        html = html.replace(&region_marker(*section), &section_tbody(*section, snap));
    }
    html
}

/// Uniform failure page: every region carries the error placeholder,
/// nothing else. No partial rendering.
pub fn render_error_page(inline_styles: bool) -> String {
    let mut html = shell(DEFAULT_TEAM_NAME, inline_styles);
    html = html.replace("{{last_updated}}", ERROR_MESSAGE);
    for section in all() {
        html = html.replace(
            &region_marker(*section),
            &no_data_row(section.headers().len(), ERROR_MESSAGE),
        );
    }
    html
}

fn shell(team_name: &str, inline_styles: bool) -> String {
    TEMPLATE
        .replace("{{title}}", PAGE_TITLE)
        .replace("{{team_name}}", &escape_html(team_name))
        .replace("{{styles}}", &styles_block(inline_styles))
}

fn region_marker(section: &dyn Section) -> String {
    join!("{{", &section.title().to_ascii_lowercase(), "_rows}}")
}

fn styles_block(inline: bool) -> String {
    if inline {
        join!("<style>\n", STYLESHEET, "</style>")
    } else {
        join!("<link rel=\"stylesheet\" href=\"", STYLESHEET_FILENAME, "\">")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "metadata": {"last_updated": "2025-12-19T18:30:00", "team_name": "Shawnee High School"},
        "roster": [{"name": "A. Carter", "weight_class": "106", "grade": "9", "record": "3-1"}],
        "schedule": [{"date": "1/8", "opponent": "Lenape", "location": "Away", "time": "7:00 PM"}],
        "results": [{"date": "12/18", "opponent": "Cherokee", "score": "45-30", "result": "Win", "location": "Home"}]
    }"#;

    #[test]
    fn fills_all_four_regions() {
        let snap: TeamSnapshot = serde_json::from_str(SAMPLE).unwrap();
        let html = render_page(&snap, true);

        assert!(html.contains("December 19, 2025 at 6:30 PM EST"));
        assert!(html.contains("<strong>A. Carter</strong>"));
        assert!(html.contains(">TBD<"));
        assert!(html.contains("class=\"result-win\""));
        assert!(!html.contains("{{"), "unfilled template marker left behind");
    }

    #[test]
    fn styles_inline_or_linked() {
        let snap: TeamSnapshot = serde_json::from_str(SAMPLE).unwrap();
        let inlined = render_page(&snap, true);
        assert!(inlined.contains("<style>"));

        let linked = render_page(&snap, false);
        assert!(linked.contains("<link rel=\"stylesheet\" href=\"site.css\">"));
        assert!(!linked.contains("<style>"));
    }

    #[test]
    fn error_page_is_uniform_across_regions() {
        let html = render_error_page(true);
        // three table bodies + the last-updated line
        assert_eq!(html.matches(ERROR_MESSAGE).count(), 4);
        assert!(!html.contains("{{"));
    }
}
