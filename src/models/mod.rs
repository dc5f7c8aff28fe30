pub mod error;

pub use error::*;

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Canonical match row produced by the schema normalizer.
///
/// The normalizer guarantees `*_goals_ht <= *_goals_ft` for each side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub match_date: Option<NaiveDateTime>, // None when the source date did not parse
    pub home_team: String,
    pub away_team: String,
    pub home_goals_ft: u32,
    pub away_goals_ft: u32,
    pub home_goals_ht: u32,
    pub away_goals_ht: u32,
    pub home_odds: Option<f64>, // decimal, always > 1.0 when present
    pub draw_odds: Option<f64>,
    pub away_odds: Option<f64>,
    pub home_goal_minutes: Vec<u32>,
    pub away_goal_minutes: Vec<u32>,
    pub stats: SecondaryStats,
}

/// Optional per-side match statistics. Layouts that do not carry a stat
/// simply leave it as `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SecondaryStats {
    pub home_shots: Option<f64>,
    pub away_shots: Option<f64>,
    pub home_corners: Option<f64>,
    pub away_corners: Option<f64>,
    pub home_cards: Option<f64>,
    pub away_cards: Option<f64>,
    pub home_possession: Option<f64>,
    pub away_possession: Option<f64>,
}

/// Full-time result from the home team's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Draw,
    Lose,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Outcome::Win => "Win",
            Outcome::Draw => "Draw",
            Outcome::Lose => "Lose",
        };
        f.pad(label)
    }
}

/// Both teams to score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Btts {
    Yes,
    No,
}

impl fmt::Display for Btts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Btts::Yes => "Yes",
            Btts::No => "No",
        })
    }
}

/// Facts computed from a [`MatchRecord`]; never stored on their own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedFacts {
    pub outcome: Outcome,
    pub btts: Btts,
    pub goals_ft: u32,
    pub goals_first_half: u32,
    pub goals_second_half: u32,
    pub home_goals_second_half: u32,
    pub away_goals_second_half: u32,
    pub correct_score: String, // "h-a"
}

/// A record paired with its derived facts. The enriched table is built
/// once and shared read-only by every analysis request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedMatch {
    pub record: MatchRecord,
    pub facts: DerivedFacts,
}

/// Which slot the analysed team occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Venue {
    Home,
    Away,
}

/// The odds column used as "the quota", relative to the analysed team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OddsSelector {
    TeamWin,
    Draw,
    OpponentWin,
}

/// Whose goal minutes feed the timing aggregator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Home,
    Away,
    Both,
}

/// Inclusive odds interval from the band catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OddsBand {
    pub name: String,
    pub min: f64,
    pub max: f64,
}

impl OddsBand {
    pub fn new(name: &str, min: f64, max: f64) -> Self {
        Self {
            name: name.to_string(),
            min,
            max,
        }
    }

    pub fn contains(&self, odds: f64) -> bool {
        odds >= self.min && odds <= self.max
    }
}

/// The fixed band catalog offered to callers. Bands are deliberately not
/// contiguous (e.g. 1.495 belongs to none of them).
pub fn odds_band_catalog() -> Vec<OddsBand> {
    vec![
        OddsBand::new("1.01-1.49", 1.01, 1.49),
        OddsBand::new("1.50-1.99", 1.50, 1.99),
        OddsBand::new("2.00-3.00", 2.00, 3.00),
        OddsBand::new("3.01-4.00", 3.01, 4.00),
        OddsBand::new("4.01-6.00", 4.01, 6.00),
        OddsBand::new("6.01-10.00", 6.01, 10.00),
        OddsBand::new(">10.00", 10.01, 100.00),
    ]
}

/// Look up catalog bands by name. Unknown names are returned as the error.
pub fn bands_by_name<S: AsRef<str>>(names: &[S]) -> Result<Vec<OddsBand>, String> {
    let catalog = odds_band_catalog();
    names
        .iter()
        .map(|name| {
            let name = name.as_ref();
            catalog
                .iter()
                .find(|b| b.name == name)
                .cloned()
                .ok_or_else(|| name.to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_membership_is_inclusive() {
        let band = OddsBand::new("1.50-1.99", 1.50, 1.99);
        assert!(band.contains(1.50));
        assert!(band.contains(1.99));
        assert!(!band.contains(1.495));
        assert!(!band.contains(2.0));
    }

    #[test]
    fn test_over_ten_band() {
        let bands = bands_by_name(&[">10.00"]).unwrap();
        assert!(!bands[0].contains(10.0));
        assert!(bands[0].contains(10.01));
        assert!(bands[0].contains(100.0));
    }

    #[test]
    fn test_unknown_band_name() {
        assert_eq!(bands_by_name(&["1.01-1.49", "9-9"]), Err("9-9".to_string()));
    }
}
