use serde::Serialize;

use crate::models::{AnalysisError, Side};
use crate::services::cohort_filter::Cohort;

/// Bucket labels with their inclusive upper minute. The last bucket is
/// open-ended so late stoppage time still lands somewhere.
pub const BUCKETS: [(&str, u32); 7] = [
    ("0-15", 15),
    ("16-30", 30),
    ("31-45", 45),
    ("46-60", 60),
    ("61-75", 75),
    ("76-90", 90),
    ("91+", u32::MAX),
];

/// Goals after this minute count as late.
pub const LATE_GOAL_MINUTE: u32 = 75;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeBucket {
    pub label: &'static str,
    pub count: usize,
    pub percentage: f64,
}

/// Every bucket in kick-off order, including empty ones.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimingBuckets {
    pub buckets: Vec<TimeBucket>,
    pub total_events: usize,
}

impl TimingBuckets {
    pub fn percentage(&self, label: &str) -> f64 {
        self.buckets
            .iter()
            .find(|b| b.label == label)
            .map_or(0.0, |b| b.percentage)
    }
}

/// Index of the bucket holding `minute`: right-closed, with minute 0 in
/// the first bucket.
pub fn bucket_index(minute: u32) -> usize {
    BUCKETS
        .iter()
        .position(|&(_, upper)| minute <= upper)
        .unwrap_or(BUCKETS.len() - 1)
}

/// All goal minutes scored by `side` across the cohort, as one stream.
pub fn flatten_minutes(cohort: &Cohort, side: Side) -> Vec<u32> {
    cohort
        .iter()
        .flat_map(|m| {
            let home = matches!(side, Side::Home | Side::Both).then_some(&m.record.home_goal_minutes);
            let away = matches!(side, Side::Away | Side::Both).then_some(&m.record.away_goal_minutes);
            home.into_iter().chain(away).flatten().copied()
        })
        .collect()
}

/// Share of `side`'s goals falling in each time window.
///
/// A non-empty cohort with no recorded minutes yields all-zero buckets.
pub fn timeframe_buckets(cohort: &Cohort, side: Side) -> Result<TimingBuckets, AnalysisError> {
    if cohort.is_empty() {
        return Err(AnalysisError::EmptyCohort);
    }

    let minutes = flatten_minutes(cohort, side);
    let mut counts = [0usize; BUCKETS.len()];
    for &minute in &minutes {
        counts[bucket_index(minute)] += 1;
    }

    let total_events = minutes.len();
    let buckets = BUCKETS
        .iter()
        .zip(counts)
        .map(|(&(label, _), count)| TimeBucket {
            label,
            count,
            percentage: percentage_of(count, total_events),
        })
        .collect();

    Ok(TimingBuckets { buckets, total_events })
}

/// Share of all goals (both sides) scored after minute 75.
pub fn late_goal_percentage(cohort: &Cohort) -> Result<f64, AnalysisError> {
    if cohort.is_empty() {
        return Err(AnalysisError::EmptyCohort);
    }

    let minutes = flatten_minutes(cohort, Side::Both);
    let late = minutes.iter().filter(|&&m| m > LATE_GOAL_MINUTE).count();
    Ok(percentage_of(late, minutes.len()))
}

fn percentage_of(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EnrichedMatch;
    use crate::services::cohort_filter::filter_head_to_head;
    use crate::services::derived_facts::enrich;
    use crate::services::derived_facts::tests::record;

    fn with_minutes(home: Vec<u32>, away: Vec<u32>) -> Vec<EnrichedMatch> {
        let mut r = record("A", "B", (home.len() as u32, away.len() as u32), (0, 0));
        r.home_goal_minutes = home;
        r.away_goal_minutes = away;
        enrich(vec![r])
    }

    #[test]
    fn test_bucket_boundaries() {
        assert_eq!(bucket_index(0), 0);
        assert_eq!(bucket_index(15), 0);
        assert_eq!(bucket_index(16), 1);
        assert_eq!(bucket_index(45), 2);
        assert_eq!(bucket_index(46), 3);
        assert_eq!(bucket_index(90), 5);
        assert_eq!(bucket_index(91), 6);
        assert_eq!(bucket_index(130), 6);
    }

    #[test]
    fn test_four_goal_scenario() {
        let base = with_minutes(vec![10, 80], vec![20, 95]);
        let cohort = filter_head_to_head(&base, "A", "B");
        let timing = timeframe_buckets(&cohort, Side::Both).unwrap();

        assert_eq!(timing.total_events, 4);
        assert_eq!(timing.buckets.len(), 7);
        assert_eq!(timing.percentage("0-15"), 25.0);
        assert_eq!(timing.percentage("16-30"), 25.0);
        assert_eq!(timing.percentage("76-90"), 25.0);
        assert_eq!(timing.percentage("91+"), 25.0);
        for label in ["31-45", "46-60", "61-75"] {
            assert_eq!(timing.percentage(label), 0.0);
        }
        assert_eq!(late_goal_percentage(&cohort).unwrap(), 50.0);
    }

    #[test]
    fn test_single_side() {
        let base = with_minutes(vec![10, 80], vec![20, 95]);
        let cohort = filter_head_to_head(&base, "A", "B");
        let away = timeframe_buckets(&cohort, Side::Away).unwrap();
        assert_eq!(away.total_events, 2);
        assert_eq!(away.percentage("16-30"), 50.0);
        assert_eq!(away.percentage("0-15"), 0.0);
        assert_eq!(flatten_minutes(&cohort, Side::Home), vec![10, 80]);
    }

    #[test]
    fn test_no_minutes_gives_zero_buckets() {
        let base = with_minutes(vec![], vec![]);
        let cohort = filter_head_to_head(&base, "A", "B");
        let timing = timeframe_buckets(&cohort, Side::Both).unwrap();
        assert_eq!(timing.total_events, 0);
        assert!(timing.buckets.iter().all(|b| b.percentage == 0.0));
        assert_eq!(late_goal_percentage(&cohort).unwrap(), 0.0);
    }

    #[test]
    fn test_empty_cohort() {
        let base = with_minutes(vec![1], vec![]);
        let cohort = filter_head_to_head(&base, "B", "A");
        assert_eq!(timeframe_buckets(&cohort, Side::Home), Err(AnalysisError::EmptyCohort));
        assert_eq!(late_goal_percentage(&cohort), Err(AnalysisError::EmptyCohort));
    }
}
