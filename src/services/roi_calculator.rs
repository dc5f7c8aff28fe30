use serde::Serialize;

use crate::models::{AnalysisError, Outcome};
use crate::services::cohort_filter::Cohort;

/// Fixed stake per match, in units.
pub const STAKE: f64 = 10.0;

/// Back/lay ROI as percentages of total stake, at full precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Roi {
    pub back: f64,
    pub lay: f64,
    pub back_profit: f64,
    pub lay_profit: f64,
    pub matches: usize,
}

/// Profit of backing `reference` at `quota`.
pub fn back_profit(actual: Outcome, reference: Outcome, quota: f64) -> f64 {
    if actual == reference {
        (quota - 1.0) * STAKE
    } else {
        -STAKE
    }
}

/// Profit of laying `reference` at `quota` (the liability is the back win).
pub fn lay_profit(actual: Outcome, reference: Outcome, quota: f64) -> f64 {
    if actual != reference {
        STAKE
    } else {
        -(quota - 1.0) * STAKE
    }
}

/// Fixed-stake back and lay ROI of `cohort` against `reference`.
///
/// Precondition: the cohort is non-empty. An empty cohort yields
/// `AnalysisError::EmptyCohort`, never 0% or NaN. Head-to-head cohorts
/// carry no quota and yield `AnalysisError::NoOddsSelector`.
pub fn compute_roi(cohort: &Cohort, reference: Outcome) -> Result<Roi, AnalysisError> {
    if cohort.is_empty() {
        return Err(AnalysisError::EmptyCohort);
    }

    let mut back_total = 0.0;
    let mut lay_total = 0.0;
    for m in cohort.iter() {
        let quota = cohort.quota(m).ok_or(AnalysisError::NoOddsSelector)?;
        back_total += back_profit(m.facts.outcome, reference, quota);
        lay_total += lay_profit(m.facts.outcome, reference, quota);
    }

    let staked = STAKE * cohort.len() as f64;
    Ok(Roi {
        back: back_total / staked * 100.0,
        lay: lay_total / staked * 100.0,
        back_profit: back_total,
        lay_profit: lay_total,
        matches: cohort.len(),
    })
}

/// ROI against the outcome implied by the cohort's own odds selector.
pub fn compute_cohort_roi(cohort: &Cohort) -> Result<Roi, AnalysisError> {
    let reference = cohort.reference_outcome().ok_or(AnalysisError::NoOddsSelector)?;
    compute_roi(cohort, reference)
}
