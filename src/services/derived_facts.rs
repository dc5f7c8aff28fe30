use crate::models::{Btts, DerivedFacts, EnrichedMatch, MatchRecord, Outcome};

/// Compute the per-match facts. Total over every normalized record.
///
/// Second-half goals are always recomputed from full-time and first-half
/// values so they cannot drift from the record.
pub fn derive_facts(record: &MatchRecord) -> DerivedFacts {
    let outcome = match record.home_goals_ft.cmp(&record.away_goals_ft) {
        std::cmp::Ordering::Greater => Outcome::Win,
        std::cmp::Ordering::Equal => Outcome::Draw,
        std::cmp::Ordering::Less => Outcome::Lose,
    };

    let btts = if record.home_goals_ft > 0 && record.away_goals_ft > 0 {
        Btts::Yes
    } else {
        Btts::No
    };

    // The normalizer rejects first-half > full-time, so these never saturate.
    let home_goals_second_half = record.home_goals_ft.saturating_sub(record.home_goals_ht);
    let away_goals_second_half = record.away_goals_ft.saturating_sub(record.away_goals_ht);

    DerivedFacts {
        outcome,
        btts,
        // Normalized counts are bounded by MAX_GOALS; hand-built records may not be.
        goals_ft: record.home_goals_ft.saturating_add(record.away_goals_ft),
        goals_first_half: record.home_goals_ht.saturating_add(record.away_goals_ht),
        goals_second_half: home_goals_second_half.saturating_add(away_goals_second_half),
        home_goals_second_half,
        away_goals_second_half,
        correct_score: format!("{}-{}", record.home_goals_ft, record.away_goals_ft),
    }
}

/// Pair every record with its facts, producing the shared base table.
pub fn enrich(records: Vec<MatchRecord>) -> Vec<EnrichedMatch> {
    records
        .into_iter()
        .map(|record| {
            let facts = derive_facts(&record);
            EnrichedMatch { record, facts }
        })
        .collect()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::SecondaryStats;

    /// Minimal record used across the service tests.
    pub(crate) fn record(home: &str, away: &str, ft: (u32, u32), ht: (u32, u32)) -> MatchRecord {
        MatchRecord {
            match_date: None,
            home_team: home.to_string(),
            away_team: away.to_string(),
            home_goals_ft: ft.0,
            away_goals_ft: ft.1,
            home_goals_ht: ht.0,
            away_goals_ht: ht.1,
            home_odds: None,
            draw_odds: None,
            away_odds: None,
            home_goal_minutes: Vec::new(),
            away_goal_minutes: Vec::new(),
            stats: SecondaryStats::default(),
        }
    }

    #[test]
    fn test_outcome_from_home_perspective() {
        assert_eq!(derive_facts(&record("A", "B", (2, 1), (0, 0))).outcome, Outcome::Win);
        assert_eq!(derive_facts(&record("A", "B", (1, 1), (0, 0))).outcome, Outcome::Draw);
        assert_eq!(derive_facts(&record("A", "B", (0, 3), (0, 1))).outcome, Outcome::Lose);
    }

    #[test]
    fn test_btts() {
        assert_eq!(derive_facts(&record("A", "B", (1, 1), (0, 0))).btts, Btts::Yes);
        assert_eq!(derive_facts(&record("A", "B", (3, 0), (1, 0))).btts, Btts::No);
        assert_eq!(derive_facts(&record("A", "B", (0, 0), (0, 0))).btts, Btts::No);
    }

    #[test]
    fn test_half_split_invariant() {
        for home_ft in 0..5 {
            for away_ft in 0..5 {
                for home_ht in 0..=home_ft {
                    for away_ht in 0..=away_ft {
                        let r = record("A", "B", (home_ft, away_ft), (home_ht, away_ht));
                        let f = derive_facts(&r);
                        assert_eq!(f.home_goals_second_half, home_ft - home_ht);
                        assert_eq!(f.away_goals_second_half, away_ft - away_ht);
                        assert_eq!(f.goals_first_half + f.goals_second_half, f.goals_ft);
                        assert_eq!(f, derive_facts(&r));
                    }
                }
            }
        }
    }

    #[test]
    fn test_correct_score_label() {
        let f = derive_facts(&record("A", "B", (3, 2), (1, 1)));
        assert_eq!(f.correct_score, "3-2");
        assert_eq!(f.goals_ft, 5);
    }

    #[test]
    fn test_extreme_counts_do_not_overflow() {
        let f = derive_facts(&record("A", "B", (u32::MAX, 1), (u32::MAX, 1)));
        assert_eq!(f.outcome, Outcome::Win);
        assert_eq!(f.goals_ft, u32::MAX);
        assert_eq!(f.goals_first_half, u32::MAX);
        assert_eq!(f.goals_second_half, 0);
    }

    #[test]
    fn test_enrich_keeps_order() {
        let enriched = enrich(vec![
            record("A", "B", (1, 0), (0, 0)),
            record("C", "D", (0, 1), (0, 0)),
        ]);
        assert_eq!(enriched[0].record.home_team, "A");
        assert_eq!(enriched[1].facts.outcome, Outcome::Lose);
    }
}
