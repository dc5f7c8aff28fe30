/// Round to two decimals for display. Aggregates keep full precision.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Format a percentage the way the reports print it, e.g. "33.33 %"
pub fn format_percentage(value: f64) -> String {
    format!("{:.2} %", round2(value))
}

/// Validate team name format
pub fn validate_team_name(name: &str) -> bool {
    !name.trim().is_empty() && name.len() <= 100
}

/// Closest known team names to `query`, best first.
///
/// Team identity is case-sensitive, so a near miss like "inter" for
/// "Inter" is reported as a suggestion rather than matched silently.
pub fn suggest_teams(query: &str, teams: &[String], limit: usize) -> Vec<String> {
    let query = query.to_lowercase();
    let mut scored: Vec<(f64, &String)> = teams
        .iter()
        .map(|t| (strsim::jaro_winkler(&query, &t.to_lowercase()), t))
        .filter(|(score, _)| *score >= 0.75)
        .collect();

    scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
    scored.into_iter().take(limit).map(|(_, t)| t.clone()).collect()
}
