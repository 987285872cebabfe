// src/render/results.rs
use crate::config::options::SectionKind;
use crate::snapshot::TeamSnapshot;

use super::Section;

pub struct ResultsSection;

pub static SECTION: ResultsSection = ResultsSection;

const HEADERS: [&str; 5] = ["Date", "Opponent", "Score", "Result", "Location"];

impl Section for ResultsSection {
    fn kind(&self) -> SectionKind { SectionKind::Results }
    fn title(&self) -> &'static str { "Results" }
    fn anchor(&self) -> &'static str { "resultsTable" }
    fn headers(&self) -> &'static [&'static str] { &HEADERS }
    fn empty_message(&self) -> &'static str {
        "No results available yet. Check back after matches begin!"
    }

    fn strong_col(&self) -> Option<usize> { Some(1) }
    fn result_col(&self) -> Option<usize> { Some(3) }

    fn preferred_column_widths(&self) -> Option<&'static [usize]> {
        Some(&[100, 220, 90, 110, 160])
    }

    fn rows(&self, snap: &TeamSnapshot) -> Vec<Vec<String>> {
        snap.results
            .iter()
            .map(|r| {
                vec![
                    r.date.clone(),
                    r.opponent.clone(),
                    r.score.clone(),
                    r.result.clone(),
                    r.location.clone(),
                ]
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_pass_through_in_document_order() {
        let snap: TeamSnapshot = serde_json::from_str(
            r#"{
                "results": [
                    {"date": "1/8", "opponent": "Lenape", "score": "51-20", "result": "Loss", "location": "Away"},
                    {"date": "1/15", "opponent": "Cherokee", "score": "45-30", "result": "Win", "location": "Home"}
                ]
            }"#,
        )
        .unwrap();

        let rows = SECTION.rows(&snap);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec!["1/8", "Lenape", "51-20", "Loss", "Away"]);
        assert_eq!(rows[1], vec!["1/15", "Cherokee", "45-30", "Win", "Home"]);
    }
}
