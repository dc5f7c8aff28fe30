use std::collections::BTreeSet;

use serde::Serialize;

use crate::models::{EnrichedMatch, MatchRecord, OddsBand, OddsSelector, Outcome, Venue};

/// What a cohort was selected by.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum CohortScope {
    Team {
        team: String,
        venue: Venue,
        selector: OddsSelector,
    },
    HeadToHead {
        home: String,
        away: String,
    },
}

/// A per-request subset of the base table. Holds references only, so
/// the base table is shared read-only and never mutated by filtering.
#[derive(Debug, Clone)]
pub struct Cohort<'a> {
    scope: CohortScope,
    matches: Vec<&'a EnrichedMatch>,
}

impl<'a> Cohort<'a> {
    pub fn scope(&self) -> &CohortScope {
        &self.scope
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn matches(&self) -> &[&'a EnrichedMatch] {
        &self.matches
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a EnrichedMatch> + '_ {
        self.matches.iter().copied()
    }

    /// The quota a match was banded on; `None` for head-to-head cohorts.
    pub fn quota(&self, m: &EnrichedMatch) -> Option<f64> {
        match &self.scope {
            CohortScope::Team { venue, selector, .. } => selected_odds(&m.record, *venue, *selector),
            CohortScope::HeadToHead { .. } => None,
        }
    }

    /// The outcome the cohort's quota pays on, when it has one.
    pub fn reference_outcome(&self) -> Option<Outcome> {
        match &self.scope {
            CohortScope::Team { venue, selector, .. } => Some(reference_outcome(*venue, *selector)),
            CohortScope::HeadToHead { .. } => None,
        }
    }
}

/// Resolve the team-relative selector to a concrete odds column.
pub fn selected_odds(record: &MatchRecord, venue: Venue, selector: OddsSelector) -> Option<f64> {
    match (venue, selector) {
        (_, OddsSelector::Draw) => record.draw_odds,
        (Venue::Home, OddsSelector::TeamWin) | (Venue::Away, OddsSelector::OpponentWin) => record.home_odds,
        (Venue::Away, OddsSelector::TeamWin) | (Venue::Home, OddsSelector::OpponentWin) => record.away_odds,
    }
}

/// Home-perspective outcome that the selected odds column pays on.
///
/// | venue | selector    | column | reference |
/// |-------|-------------|--------|-----------|
/// | Home  | TeamWin     | home   | Win       |
/// | Home  | Draw        | draw   | Draw      |
/// | Home  | OpponentWin | away   | Lose      |
/// | Away  | TeamWin     | away   | Lose      |
/// | Away  | Draw        | draw   | Draw      |
/// | Away  | OpponentWin | home   | Win       |
pub fn reference_outcome(venue: Venue, selector: OddsSelector) -> Outcome {
    match (venue, selector) {
        (_, OddsSelector::Draw) => Outcome::Draw,
        (Venue::Home, OddsSelector::TeamWin) | (Venue::Away, OddsSelector::OpponentWin) => Outcome::Win,
        (Venue::Away, OddsSelector::TeamWin) | (Venue::Home, OddsSelector::OpponentWin) => Outcome::Lose,
    }
}

/// Select the matches where `team` sits in the `venue` slot and the
/// selected quota falls in at least one of `bands`.
///
/// An empty band set selects nothing, and matches without the selected
/// odds never pass. Input order is preserved.
pub fn filter_cohort<'a, I>(
    records: I,
    team: &str,
    venue: Venue,
    bands: &[OddsBand],
    selector: OddsSelector,
) -> Cohort<'a>
where
    I: IntoIterator<Item = &'a EnrichedMatch>,
{
    let matches: Vec<&EnrichedMatch> = records
        .into_iter()
        .filter(|m| match venue {
            Venue::Home => m.record.home_team == team,
            Venue::Away => m.record.away_team == team,
        })
        .filter(|m| {
            selected_odds(&m.record, venue, selector)
                .is_some_and(|quota| bands.iter().any(|band| band.contains(quota)))
        })
        .collect();

    tracing::debug!(
        "Cohort for {} ({:?}, {:?}, {} bands): {} matches",
        team,
        venue,
        selector,
        bands.len(),
        matches.len()
    );

    Cohort {
        scope: CohortScope::Team {
            team: team.to_string(),
            venue,
            selector,
        },
        matches,
    }
}

/// All meetings with `home` hosting `away`. No odds filtering applies.
pub fn filter_head_to_head<'a, I>(records: I, home: &str, away: &str) -> Cohort<'a>
where
    I: IntoIterator<Item = &'a EnrichedMatch>,
{
    let matches = records
        .into_iter()
        .filter(|m| m.record.home_team == home && m.record.away_team == away)
        .collect();

    Cohort {
        scope: CohortScope::HeadToHead {
            home: home.to_string(),
            away: away.to_string(),
        },
        matches,
    }
}

/// Sorted, de-duplicated team names across both slots.
pub fn team_names(records: &[EnrichedMatch]) -> Vec<String> {
    records
        .iter()
        .flat_map(|m| [m.record.home_team.as_str(), m.record.away_team.as_str()])
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
