use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use serde::Serialize;

use oddslab::config::Settings;
use oddslab::data::load_csv;
use oddslab::models::{bands_by_name, odds_band_catalog, EnrichedMatch, OddsSelector, Venue};
use oddslab::services::{
    builtin_layouts, detect_layout, enrich, head_to_head_report, layout_by_name, normalize, team_names,
    team_report, CohortSummary, ColumnMapping, TeamQuery, TimingBuckets,
};
use oddslab::utils::{format_percentage, round2, suggest_teams, validate_team_name};

/// Where the dataset comes from and how to read it.
pub struct Source {
    pub file: Option<PathBuf>,
    pub layout: Option<String>,
    pub mapping: Option<PathBuf>,
}

fn resolve_mapping(source: &Source, settings: &Settings, table: &oddslab::data::RawTable) -> Result<ColumnMapping> {
    if let Some(path) = &source.mapping {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read mapping {}", path.display()))?;
        return Ok(ColumnMapping::from_json(&raw)?);
    }
    match source.layout.as_ref().or(settings.layout.as_ref()) {
        Some(name) => Ok(layout_by_name(name)?),
        None => Ok(detect_layout(table)?),
    }
}

/// Load, normalize and enrich the dataset once for this invocation.
pub fn load_base(source: &Source, settings: &Settings) -> Result<Vec<EnrichedMatch>> {
    let path: &Path = source
        .file
        .as_deref()
        .or(settings.data_file.as_deref())
        .ok_or_else(|| anyhow!("no dataset given; pass --file or set ODDSLAB_DATA_FILE"))?;

    let table = load_csv(path, settings.csv_delimiter)?;
    let mapping = resolve_mapping(source, settings, &table)?;
    let report = normalize(&table, &mapping)?;

    if report.dropped() > 0 {
        println!("⚠️  Skipped {} malformed rows", report.dropped());
    }
    Ok(enrich(report.records))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn list_teams(source: &Source, settings: &Settings) -> Result<()> {
    let base = load_base(source, settings)?;
    let teams = team_names(&base);

    println!("📋 {} teams in {} matches:", teams.len(), base.len());
    for team in teams {
        println!("   • {}", team);
    }
    Ok(())
}

/// Ensure `team` exists, printing suggestions when it does not.
fn check_team(base: &[EnrichedMatch], team: &str) -> bool {
    let teams = team_names(base);
    if teams.iter().any(|t| t == team) {
        return true;
    }

    println!("❌ No team named '{}'", team);
    let suggestions = suggest_teams(team, &teams, 5);
    if !suggestions.is_empty() {
        println!("\n💡 Did you mean:");
        for s in suggestions {
            println!("   • {}", s);
        }
    }
    false
}

pub struct AnalyzeArgs {
    pub team: String,
    pub venue: Venue,
    pub selector: OddsSelector,
    pub bands: Vec<String>,
    pub top_k: Option<usize>,
    pub json: bool,
}

pub fn analyze_team(source: &Source, settings: &Settings, args: AnalyzeArgs) -> Result<()> {
    if !validate_team_name(&args.team) {
        return Err(anyhow!("invalid team name '{}'", args.team));
    }
    let base = load_base(source, settings)?;
    if !check_team(&base, &args.team) {
        return Ok(());
    }

    let bands = if args.bands.is_empty() {
        odds_band_catalog()
    } else {
        bands_by_name(&args.bands).map_err(|name| anyhow!("unknown odds band '{}'", name))?
    };

    let query = TeamQuery {
        team: args.team.clone(),
        venue: args.venue,
        selector: args.selector,
        bands,
        top_k: args.top_k.unwrap_or(settings.top_k),
    };

    let Some(report) = team_report(&base, &query)? else {
        println!("📭 No matches for {} ({:?}) in the selected odds bands", args.team, args.venue);
        return Ok(());
    };

    if args.json {
        return print_json(&report);
    }

    println!("📊 {} ({:?}, {:?} odds, bands: {})", report.team, report.venue, report.selector, report.bands.join(", "));
    println!("   Matches found: {}", report.summary.matches);
    println!("   Reference outcome: {}", report.reference_outcome);
    println!("   ROI Back: {}", format_percentage(report.roi.back));
    println!("   ROI Lay:  {}", format_percentage(report.roi.lay));
    println!("   {} scores at least one goal: {}", report.team, format_percentage(report.team_scored_percentage));

    print_summary(&report.summary);
    print_timing(&format!("{} goal timing", report.team), &report.goal_timing);
    Ok(())
}

pub fn head_to_head(source: &Source, settings: &Settings, home: &str, away: &str, json: bool) -> Result<()> {
    let base = load_base(source, settings)?;
    if !check_team(&base, home) || !check_team(&base, away) {
        return Ok(());
    }

    let Some(report) = head_to_head_report(&base, home, away, settings.top_k)? else {
        println!("📭 {} has never hosted {} in this dataset", home, away);
        return Ok(());
    };

    if json {
        return print_json(&report);
    }

    println!("⚔️  {} vs {}: {} meetings", report.home_team, report.away_team, report.summary.matches);
    print_summary(&report.summary);
    print_timing("Goal timing (both sides)", &report.goal_timing);
    Ok(())
}

fn print_summary(summary: &CohortSummary) {
    println!("\n🎯 Results:");
    for e in &summary.outcomes.entries {
        println!("   {:<5} {:>3}  {}", e.label, e.count, format_percentage(e.percentage));
    }

    println!("\n🥅 Both teams to score:");
    for e in &summary.btts.entries {
        println!("   {:<5} {:>3}  {}", e.label, e.count, format_percentage(e.percentage));
    }

    println!("\n🔢 Top correct scores:");
    for e in &summary.top_scores {
        println!("   {:<5} {:>3}  {}", e.label, e.count, format_percentage(e.percentage));
    }

    let avg = &summary.goal_averages;
    println!("\n⚽ Average goals FT: {:.2} | 1st half: {:.2} | 2nd half: {:.2}", avg.full_time, avg.first_half, avg.second_half);

    for (title, lines) in [
        ("Full time", &summary.over.full_time),
        ("First half", &summary.over.first_half),
        ("Second half", &summary.over.second_half),
    ] {
        println!("\n📈 Over % - {}", title);
        for line in lines {
            println!("   Over {} → {}", line.threshold, format_percentage(line.percentage));
        }
    }

    let stats = &summary.stat_averages;
    let pairs = [
        ("Shots", stats.home_shots, stats.away_shots),
        ("Corners", stats.home_corners, stats.away_corners),
        ("Cards", stats.home_cards, stats.away_cards),
        ("Possession", stats.home_possession, stats.away_possession),
    ];
    if pairs.iter().any(|(_, h, a)| h.is_some() || a.is_some()) {
        println!("\n📐 Averages (home / away):");
        let show = |v: Option<f64>| v.map_or("-".to_string(), |v| format!("{:.2}", round2(v)));
        for (name, h, a) in pairs {
            println!("   {:<10} {} / {}", name, show(h), show(a));
        }
    }

    println!("\n⏱️  Late goals (after 75'): {}", format_percentage(summary.late_goal_percentage));

    println!("\n📅 Matches:");
    for row in &summary.rows {
        let date = row.date.map_or("undated".to_string(), |d| d.format("%Y-%m-%d").to_string());
        let quota = row.quota.map_or(String::new(), |q| format!(" @ {:.2}", q));
        println!(
            "   {} {} {}-{} {} ({}){}",
            date, row.home_team, row.home_goals, row.away_goals, row.away_team, row.outcome, quota
        );
    }
}

fn print_timing(title: &str, timing: &TimingBuckets) {
    println!("\n🕒 {} ({} goals):", title, timing.total_events);
    for bucket in &timing.buckets {
        println!("   {:<6} {:>3}  {}", bucket.label, bucket.count, format_percentage(bucket.percentage));
    }
}

pub fn list_bands() {
    println!("🎚️  Odds bands:");
    for band in odds_band_catalog() {
        println!("   {:<11} [{:.2}, {:.2}]", band.name, band.min, band.max);
    }
}

pub fn show_layouts() -> Result<()> {
    print_json(&builtin_layouts())
}
