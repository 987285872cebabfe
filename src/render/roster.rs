// src/render/roster.rs
use crate::config::options::SectionKind;
use crate::snapshot::TeamSnapshot;

use super::Section;

pub struct RosterSection;

pub static SECTION: RosterSection = RosterSection;

const HEADERS: [&str; 4] = ["Name", "Weight Class", "Grade", "Record"];

impl Section for RosterSection {
    fn kind(&self) -> SectionKind { SectionKind::Roster }
    fn title(&self) -> &'static str { "Roster" }
    fn anchor(&self) -> &'static str { "rosterTable" }
    fn headers(&self) -> &'static [&'static str] { &HEADERS }
    fn empty_message(&self) -> &'static str { "No roster data available" }

    fn strong_col(&self) -> Option<usize> { Some(0) }

    fn preferred_column_widths(&self) -> Option<&'static [usize]> {
        Some(&[220, 110, 70, 110])
    }

    fn rows(&self, snap: &TeamSnapshot) -> Vec<Vec<String>> {
        snap.roster_by_weight()
            .into_iter()
            .map(|w| {
                vec![
                    w.name.clone(),
                    w.weight_class.clone(),
                    w.grade.clone(),
                    w.record.clone().filter(|r| !r.is_empty()).unwrap_or_else(|| s!("N/A")),
                ]
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_come_out_weight_sorted_with_record_fallback() {
        let snap: TeamSnapshot = serde_json::from_str(
            r#"{
                "roster": [
                    {"name": "Heavy", "weight_class": "285", "grade": "12", "record": "10-2"},
                    {"name": "Light", "weight_class": "106", "grade": "9"}
                ]
            }"#,
        )
        .unwrap();

        let rows = SECTION.rows(&snap);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec!["Light", "106", "9", "N/A"]);
        assert_eq!(rows[1], vec!["Heavy", "285", "12", "10-2"]);
    }
}
