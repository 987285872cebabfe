// src/snapshot.rs
//
// Typed shape of the published snapshot document (wrestling_data.json).
// A snapshot is immutable once parsed; refresh replaces it wholesale.

use serde::Deserialize;

use crate::config::consts::DEFAULT_TEAM_NAME;

#[derive(Clone, Debug, Default, Deserialize)]
pub struct TeamSnapshot {
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(default)]
    pub roster: Vec<Wrestler>,
    #[serde(default)]
    pub schedule: Vec<ScheduleMatch>,
    #[serde(default)]
    pub results: Vec<CompletedMatch>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Metadata {
    #[serde(default)]
    pub last_updated: Option<String>,
    #[serde(default)]
    pub team_name: Option<String>,
    #[serde(default)]
    pub team_id: Option<String>,
    #[serde(default)]
    pub season_id: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Wrestler {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub weight_class: String,
    #[serde(default)]
    pub grade: String,
    #[serde(default)]
    pub record: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ScheduleMatch {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub opponent: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub result: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct CompletedMatch {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub opponent: String,
    #[serde(default)]
    pub score: String,
    #[serde(default)]
    pub result: String,
    #[serde(default)]
    pub location: String,
}

impl TeamSnapshot {
    pub fn team_name(&self) -> &str {
        self.metadata
            .team_name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(DEFAULT_TEAM_NAME)
    }

    /// Roster ordered ascending by numeric weight class.
    /// Non-numeric classes keep document order after all numeric ones.
    pub fn roster_by_weight(&self) -> Vec<&Wrestler> {
        let mut sorted: Vec<&Wrestler> = self.roster.iter().collect();
        sorted.sort_by_key(|w| weight_sort_key(&w.weight_class));
        sorted
    }
}

/// Leading integer of a weight class string ("106", "215 lbs").
/// Anything without one sorts last.
pub fn weight_sort_key(class: &str) -> u32 {
    let digits: String = class
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(u32::MAX)
}

/// Display category of a match result value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Loss,
    Pending,
}

impl Outcome {
    /// Substring checks, win before loss: "Win 45-30", "W", and even
    /// "Walkover" all land on Win; "Loss 20-51" and bare "L" on Loss;
    /// absent, blank and "TBD" on Pending.
    pub fn classify(result: Option<&str>) -> Self {
        let Some(text) = result else {
            return Outcome::Pending;
        };
        let text = text.trim();
        if text.is_empty() || text.eq_ignore_ascii_case("tbd") {
            return Outcome::Pending;
        }
        let lc = text.to_ascii_lowercase();
        if lc.contains('w') {
            Outcome::Win
        } else if lc.contains('l') {
            Outcome::Loss
        } else {
            Outcome::Pending
        }
    }

    /// Class names the page stylesheet knows about.
    pub fn css_class(self) -> &'static str {
        match self {
            Outcome::Win => "result-win",
            Outcome::Loss => "result-loss",
            Outcome::Pending => "result-tbd",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrestler(name: &str, class: &str) -> Wrestler {
        Wrestler {
            name: s!(name),
            weight_class: s!(class),
            grade: s!("11"),
            record: None,
        }
    }

    #[test]
    fn roster_sorts_by_numeric_weight() {
        let snap = TeamSnapshot {
            roster: vec![
                wrestler("C", "215"),
                wrestler("A", "106"),
                wrestler("B", "132 lbs"),
            ],
            ..TeamSnapshot::default()
        };
        let names: Vec<&str> = snap.roster_by_weight().iter().map(|w| w.name.as_str()).collect();
        assert_eq!(names, ["A", "B", "C"]);
    }

    #[test]
    fn non_numeric_classes_sort_last_in_document_order() {
        let snap = TeamSnapshot {
            roster: vec![
                wrestler("HwtA", "HWT"),
                wrestler("Light", "113"),
                wrestler("HwtB", ""),
            ],
            ..TeamSnapshot::default()
        };
        let names: Vec<&str> = snap.roster_by_weight().iter().map(|w| w.name.as_str()).collect();
        assert_eq!(names, ["Light", "HwtA", "HwtB"]);
    }

    #[test]
    fn weight_keys() {
        assert_eq!(weight_sort_key("106"), 106);
        assert_eq!(weight_sort_key(" 285 "), 285);
        assert_eq!(weight_sort_key("132 lbs"), 132);
        assert_eq!(weight_sort_key("HWT"), u32::MAX);
        assert_eq!(weight_sort_key(""), u32::MAX);
    }

    #[test]
    fn classify_wins_losses_pending() {
        assert_eq!(Outcome::classify(Some("Win 45-30")), Outcome::Win);
        assert_eq!(Outcome::classify(Some("W")), Outcome::Win);
        assert_eq!(Outcome::classify(Some("LOSS 20-51")), Outcome::Loss);
        assert_eq!(Outcome::classify(Some("l")), Outcome::Loss);
        assert_eq!(Outcome::classify(Some("TBD")), Outcome::Pending);
        assert_eq!(Outcome::classify(Some("  ")), Outcome::Pending);
        assert_eq!(Outcome::classify(None), Outcome::Pending);
        // Substring semantics are deliberate: win wins ties
        assert_eq!(Outcome::classify(Some("Walkover loss")), Outcome::Win);
        assert_eq!(Outcome::classify(Some("Forfeit")), Outcome::Pending);
    }

    #[test]
    fn team_name_falls_back() {
        let snap = TeamSnapshot::default();
        assert_eq!(snap.team_name(), "Shawnee High School");

        let named = TeamSnapshot {
            metadata: Metadata { team_name: Some(s!("Lenape Regional")), ..Metadata::default() },
            ..TeamSnapshot::default()
        };
        assert_eq!(named.team_name(), "Lenape Regional");
    }
}
