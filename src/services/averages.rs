use serde::Serialize;
use statrs::statistics::Statistics;

use crate::models::{AnalysisError, EnrichedMatch, SecondaryStats, Venue};
use crate::services::cohort_filter::Cohort;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GoalAverages {
    pub full_time: f64,
    pub first_half: f64,
    pub second_half: f64,
}

/// Mean total goals per match, per period.
pub fn average_goals(cohort: &Cohort) -> Result<GoalAverages, AnalysisError> {
    if cohort.is_empty() {
        return Err(AnalysisError::EmptyCohort);
    }

    let mean_of = |f: fn(&EnrichedMatch) -> u32| -> f64 {
        cohort.iter().map(|m| f(m) as f64).collect::<Vec<_>>().mean()
    };

    Ok(GoalAverages {
        full_time: mean_of(|m| m.facts.goals_ft),
        first_half: mean_of(|m| m.facts.goals_first_half),
        second_half: mean_of(|m| m.facts.goals_second_half),
    })
}

/// Percentage of matches in which the side in `venue` scored at least once.
pub fn scored_percentage(cohort: &Cohort, venue: Venue) -> Result<f64, AnalysisError> {
    if cohort.is_empty() {
        return Err(AnalysisError::EmptyCohort);
    }

    let scored = cohort
        .iter()
        .filter(|m| match venue {
            Venue::Home => m.record.home_goals_ft > 0,
            Venue::Away => m.record.away_goals_ft > 0,
        })
        .count();
    Ok(scored as f64 / cohort.len() as f64 * 100.0)
}

/// Per-stat means over the matches that carry the stat; `None` when no
/// match in the cohort does.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StatAverages {
    pub home_shots: Option<f64>,
    pub away_shots: Option<f64>,
    pub home_corners: Option<f64>,
    pub away_corners: Option<f64>,
    pub home_cards: Option<f64>,
    pub away_cards: Option<f64>,
    pub home_possession: Option<f64>,
    pub away_possession: Option<f64>,
}

pub fn stat_averages(cohort: &Cohort) -> Result<StatAverages, AnalysisError> {
    if cohort.is_empty() {
        return Err(AnalysisError::EmptyCohort);
    }

    let mean_of = |f: fn(&SecondaryStats) -> Option<f64>| -> Option<f64> {
        let values: Vec<f64> = cohort.iter().filter_map(|m| f(&m.record.stats)).collect();
        (!values.is_empty()).then(|| values.mean())
    };

    Ok(StatAverages {
        home_shots: mean_of(|s| s.home_shots),
        away_shots: mean_of(|s| s.away_shots),
        home_corners: mean_of(|s| s.home_corners),
        away_corners: mean_of(|s| s.away_corners),
        home_cards: mean_of(|s| s.home_cards),
        away_cards: mean_of(|s| s.away_cards),
        home_possession: mean_of(|s| s.home_possession),
        away_possession: mean_of(|s| s.away_possession),
    })
}
