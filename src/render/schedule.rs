// src/render/schedule.rs
use crate::config::options::SectionKind;
use crate::snapshot::TeamSnapshot;

use super::Section;

pub struct ScheduleSection;

pub static SECTION: ScheduleSection = ScheduleSection;

const HEADERS: [&str; 5] = ["Date", "Opponent", "Location", "Time", "Result"];

impl Section for ScheduleSection {
    fn kind(&self) -> SectionKind { SectionKind::Schedule }
    fn title(&self) -> &'static str { "Schedule" }
    fn anchor(&self) -> &'static str { "scheduleTable" }
    fn headers(&self) -> &'static [&'static str] { &HEADERS }
    fn empty_message(&self) -> &'static str { "No schedule data available" }

    fn strong_col(&self) -> Option<usize> { Some(1) }
    fn result_col(&self) -> Option<usize> { Some(4) }

    fn preferred_column_widths(&self) -> Option<&'static [usize]> {
        Some(&[100, 220, 160, 80, 120])
    }

    // Document order; fixtures without a result show TBD.
    fn rows(&self, snap: &TeamSnapshot) -> Vec<Vec<String>> {
        snap.schedule
            .iter()
            .map(|m| {
                let result = m
                    .result
                    .as_deref()
                    .filter(|r| !r.trim().is_empty())
                    .unwrap_or("TBD");
                vec![
                    m.date.clone(),
                    m.opponent.clone(),
                    m.location.clone(),
                    m.time.clone(),
                    s!(result),
                ]
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_document_order_and_fills_tbd() {
        let snap: TeamSnapshot = serde_json::from_str(
            r#"{
                "schedule": [
                    {"date": "1/15", "opponent": "Cherokee", "location": "Home", "time": "6:00 PM", "result": "Win 45-30"},
                    {"date": "1/8",  "opponent": "Lenape",   "location": "Away", "time": "7:00 PM"}
                ]
            }"#,
        )
        .unwrap();

        let rows = SECTION.rows(&snap);
        assert_eq!(rows[0][1], "Cherokee");
        assert_eq!(rows[0][4], "Win 45-30");
        assert_eq!(rows[1][1], "Lenape");
        assert_eq!(rows[1][4], "TBD");
    }
}
