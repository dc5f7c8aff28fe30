use std::cmp::Ordering;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::models::{AnalysisError, Btts, EnrichedMatch, OddsBand, OddsSelector, Outcome, Side, Venue};
use crate::services::averages::{average_goals, scored_percentage, stat_averages, GoalAverages, StatAverages};
use crate::services::cohort_filter::{filter_cohort, filter_head_to_head, Cohort};
use crate::services::distribution::{
    btts_distribution, correct_score_distribution, outcome_distribution, over_table, Distribution,
    DistributionEntry, GoalPeriod, OverLine,
};
use crate::services::goal_timing::{late_goal_percentage, timeframe_buckets, TimingBuckets};
use crate::services::roi_calculator::{compute_cohort_roi, Roi};

/// Parameters of a single-team analysis request.
#[derive(Debug, Clone)]
pub struct TeamQuery {
    pub team: String,
    pub venue: Venue,
    pub selector: OddsSelector,
    pub bands: Vec<OddsBand>,
    pub top_k: usize,
}

/// One row of the match table shown under the aggregates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailRow {
    pub date: Option<NaiveDateTime>,
    pub home_team: String,
    pub away_team: String,
    pub quota: Option<f64>,
    pub home_goals: u32,
    pub away_goals: u32,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverTables {
    pub full_time: Vec<OverLine>,
    pub first_half: Vec<OverLine>,
    pub second_half: Vec<OverLine>,
}

/// Aggregates shared by team and head-to-head reports.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CohortSummary {
    pub matches: usize,
    pub outcomes: Distribution<Outcome>,
    pub btts: Distribution<Btts>,
    pub top_scores: Vec<DistributionEntry<String>>,
    pub correct_scores: Distribution<String>,
    pub goal_averages: GoalAverages,
    pub over: OverTables,
    pub stat_averages: StatAverages,
    pub late_goal_percentage: f64,
    pub rows: Vec<DetailRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamReport {
    pub team: String,
    pub venue: Venue,
    pub selector: OddsSelector,
    pub bands: Vec<String>,
    pub reference_outcome: Outcome,
    pub roi: Roi,
    pub team_scored_percentage: f64,
    pub goal_timing: TimingBuckets, // the analysed team's own goals
    pub summary: CohortSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeadToHeadReport {
    pub home_team: String,
    pub away_team: String,
    pub goal_timing: TimingBuckets, // both sides
    pub summary: CohortSummary,
}

/// Cohort rows, most recent first; undated rows sort last.
pub fn detail_rows(cohort: &Cohort) -> Vec<DetailRow> {
    let mut rows: Vec<DetailRow> = cohort
        .iter()
        .map(|m| DetailRow {
            date: m.record.match_date,
            home_team: m.record.home_team.clone(),
            away_team: m.record.away_team.clone(),
            quota: cohort.quota(m),
            home_goals: m.record.home_goals_ft,
            away_goals: m.record.away_goals_ft,
            outcome: m.facts.outcome,
        })
        .collect();

    rows.sort_by(|a, b| match (a.date, b.date) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    rows
}

fn summarize(cohort: &Cohort, top_k: usize) -> Result<CohortSummary, AnalysisError> {
    let correct_scores = correct_score_distribution(cohort)?;

    Ok(CohortSummary {
        matches: cohort.len(),
        outcomes: outcome_distribution(cohort)?,
        btts: btts_distribution(cohort)?,
        top_scores: correct_scores.top(top_k).to_vec(),
        correct_scores,
        goal_averages: average_goals(cohort)?,
        over: OverTables {
            full_time: over_table(cohort, GoalPeriod::FullTime)?,
            first_half: over_table(cohort, GoalPeriod::FirstHalf)?,
            second_half: over_table(cohort, GoalPeriod::SecondHalf)?,
        },
        stat_averages: stat_averages(cohort)?,
        late_goal_percentage: late_goal_percentage(cohort)?,
        rows: detail_rows(cohort),
    })
}

/// Run every aggregate for one team request.
///
/// `Ok(None)` means the filters matched nothing; that is a normal result
/// for callers to present as an empty state.
pub fn team_report(base: &[EnrichedMatch], query: &TeamQuery) -> Result<Option<TeamReport>, AnalysisError> {
    let cohort = filter_cohort(base, &query.team, query.venue, &query.bands, query.selector);
    tracing::info!("{} ({:?}): {} matches in cohort", query.team, query.venue, cohort.len());
    if cohort.is_empty() {
        return Ok(None);
    }

    let own_side = match query.venue {
        Venue::Home => Side::Home,
        Venue::Away => Side::Away,
    };
    let reference_outcome = cohort.reference_outcome().ok_or(AnalysisError::NoOddsSelector)?;

    Ok(Some(TeamReport {
        team: query.team.clone(),
        venue: query.venue,
        selector: query.selector,
        bands: query.bands.iter().map(|b| b.name.clone()).collect(),
        reference_outcome,
        roi: compute_cohort_roi(&cohort)?,
        team_scored_percentage: scored_percentage(&cohort, query.venue)?,
        goal_timing: timeframe_buckets(&cohort, own_side)?,
        summary: summarize(&cohort, query.top_k)?,
    }))
}

/// Aggregates for every meeting with `home` hosting `away`.
pub fn head_to_head_report(
    base: &[EnrichedMatch],
    home: &str,
    away: &str,
    top_k: usize,
) -> Result<Option<HeadToHeadReport>, AnalysisError> {
    let cohort = filter_head_to_head(base, home, away);
    tracing::info!("{} vs {}: {} meetings", home, away, cohort.len());
    if cohort.is_empty() {
        return Ok(None);
    }

    Ok(Some(HeadToHeadReport {
        home_team: home.to_string(),
        away_team: away.to_string(),
        goal_timing: timeframe_buckets(&cohort, Side::Both)?,
        summary: summarize(&cohort, top_k)?,
    }))
}
