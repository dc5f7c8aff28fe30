use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{AnalysisError, Btts, EnrichedMatch, Outcome};
use crate::services::cohort_filter::Cohort;

/// Default truncation for the ranked correct-score table.
pub const DEFAULT_TOP_K: usize = 10;

/// Over-N thresholds reported for every goal period.
pub const OVER_THRESHOLDS: [f64; 5] = [0.5, 1.5, 2.5, 3.5, 4.5];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionEntry<L> {
    pub label: L,
    pub count: usize,
    pub percentage: f64,
}

/// Label frequencies, ranked by count (ties broken by label order).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Distribution<L> {
    pub entries: Vec<DistributionEntry<L>>,
    pub classified: usize, // denominator: rows the classifier labelled
}

impl<L: PartialEq> Distribution<L> {
    pub fn percentage(&self, label: &L) -> f64 {
        self.entries
            .iter()
            .find(|e| &e.label == label)
            .map_or(0.0, |e| e.percentage)
    }

    /// The `k` most frequent labels. The full table stays in `entries`.
    pub fn top(&self, k: usize) -> &[DistributionEntry<L>] {
        &self.entries[..k.min(self.entries.len())]
    }

    pub fn total_percentage(&self) -> f64 {
        self.entries.iter().map(|e| e.percentage).sum()
    }
}

/// Frequency distribution of `classifier` over the cohort. Rows the
/// classifier maps to `None` are left out of the denominator.
pub fn categorical_distribution<L, F>(cohort: &Cohort, classifier: F) -> Result<Distribution<L>, AnalysisError>
where
    L: Ord + Clone,
    F: Fn(&EnrichedMatch) -> Option<L>,
{
    if cohort.is_empty() {
        return Err(AnalysisError::EmptyCohort);
    }

    let mut counts: BTreeMap<L, usize> = BTreeMap::new();
    for m in cohort.iter() {
        if let Some(label) = classifier(m) {
            *counts.entry(label).or_insert(0) += 1;
        }
    }

    let classified: usize = counts.values().sum();
    let mut entries: Vec<DistributionEntry<L>> = counts
        .into_iter()
        .map(|(label, count)| DistributionEntry {
            label,
            count,
            percentage: count as f64 / classified as f64 * 100.0,
        })
        .collect();
    // Stable: equal counts keep ascending label order from the map.
    entries.sort_by(|a, b| b.count.cmp(&a.count));

    Ok(Distribution { entries, classified })
}

pub fn outcome_distribution(cohort: &Cohort) -> Result<Distribution<Outcome>, AnalysisError> {
    categorical_distribution(cohort, |m| Some(m.facts.outcome))
}

pub fn btts_distribution(cohort: &Cohort) -> Result<Distribution<Btts>, AnalysisError> {
    categorical_distribution(cohort, |m| Some(m.facts.btts))
}

pub fn correct_score_distribution(cohort: &Cohort) -> Result<Distribution<String>, AnalysisError> {
    categorical_distribution(cohort, |m| Some(m.facts.correct_score.clone()))
}

/// Percentage of the cohort whose value is strictly above `threshold`.
pub fn threshold_percentage<F>(cohort: &Cohort, value: F, threshold: f64) -> Result<f64, AnalysisError>
where
    F: Fn(&EnrichedMatch) -> f64,
{
    optional_threshold_percentage(cohort, |m| Some(value(m)), threshold)?
        .ok_or(AnalysisError::EmptyCohort)
}

/// Like [`threshold_percentage`] for values a row may lack. Rows without
/// a value are excluded; `None` when no row has one.
pub fn optional_threshold_percentage<F>(
    cohort: &Cohort,
    value: F,
    threshold: f64,
) -> Result<Option<f64>, AnalysisError>
where
    F: Fn(&EnrichedMatch) -> Option<f64>,
{
    if cohort.is_empty() {
        return Err(AnalysisError::EmptyCohort);
    }

    let (mut present, mut over) = (0usize, 0usize);
    for v in cohort.iter().filter_map(|m| value(m)) {
        present += 1;
        if v > threshold {
            over += 1;
        }
    }

    Ok((present > 0).then(|| over as f64 / present as f64 * 100.0))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GoalPeriod {
    FullTime,
    FirstHalf,
    SecondHalf,
}

impl GoalPeriod {
    pub const ALL: [GoalPeriod; 3] = [GoalPeriod::FullTime, GoalPeriod::FirstHalf, GoalPeriod::SecondHalf];

    pub fn total_goals(self, m: &EnrichedMatch) -> u32 {
        match self {
            GoalPeriod::FullTime => m.facts.goals_ft,
            GoalPeriod::FirstHalf => m.facts.goals_first_half,
            GoalPeriod::SecondHalf => m.facts.goals_second_half,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OverLine {
    pub threshold: f64,
    pub percentage: f64,
}

/// Over-N percentages for each of [`OVER_THRESHOLDS`] in one period.
pub fn over_table(cohort: &Cohort, period: GoalPeriod) -> Result<Vec<OverLine>, AnalysisError> {
    OVER_THRESHOLDS
        .iter()
        .map(|&threshold| {
            let percentage = threshold_percentage(cohort, |m| period.total_goals(m) as f64, threshold)?;
            Ok(OverLine { threshold, percentage })
        })
        .collect()
}
