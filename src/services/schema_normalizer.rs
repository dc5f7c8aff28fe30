use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::data::RawTable;
use crate::models::{MatchRecord, RowCoercionError, SchemaError, SecondaryStats};

// ── Column mapping (data, not code) ─────────────────────────────────────────

/// Declares where each canonical field lives in a given input layout.
/// Mappings deserialize from JSON so new layouts need no code changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnMapping {
    pub name: String,
    pub match_date: String,
    pub home_team: String,
    pub away_team: String,
    pub home_goals_ft: String,
    pub away_goals_ft: String,
    pub home_goals_ht: String,
    pub away_goals_ht: String,
    // Odds columns are optional: exports without a draw quote are common.
    #[serde(default)]
    pub home_odds: Option<String>,
    #[serde(default)]
    pub draw_odds: Option<String>,
    #[serde(default)]
    pub away_odds: Option<String>,
    #[serde(default)]
    pub home_goal_minutes: Option<MinuteColumns>,
    #[serde(default)]
    pub away_goal_minutes: Option<MinuteColumns>,
    #[serde(default)]
    pub stats: StatColumns,
}

/// How a side's goal minutes are laid out in the source table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MinuteColumns {
    /// One column per scored goal; empty cells mean "no goal".
    PerGoal { columns: Vec<String> },
    /// A single cell holding all minutes, e.g. `"12;45+2;88"`.
    Delimited { column: String, separator: char },
}

/// Optional secondary-stat columns. Absent columns yield `None` values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatColumns {
    pub home_shots: Option<String>,
    pub away_shots: Option<String>,
    pub home_corners: Option<String>,
    pub away_corners: Option<String>,
    pub home_cards: Option<String>,
    pub away_cards: Option<String>,
    pub home_possession: Option<String>,
    pub away_possession: Option<String>,
}

impl ColumnMapping {
    /// Abbreviated column names used by the historical exports.
    pub fn coded() -> Self {
        let per_goal = |side: u8| MinuteColumns::PerGoal {
            columns: (1..=9).map(|n| format!("gol{}_min{}", side, n)).collect(),
        };
        Self {
            name: "coded".to_string(),
            match_date: "datameci".to_string(),
            home_team: "txtechipa1".to_string(),
            away_team: "txtechipa2".to_string(),
            home_goals_ft: "scor1".to_string(),
            away_goals_ft: "scor2".to_string(),
            home_goals_ht: "scorp1".to_string(),
            away_goals_ht: "scorp2".to_string(),
            home_odds: Some("cotaa".to_string()),
            draw_odds: Some("cotae".to_string()),
            away_odds: Some("cotad".to_string()),
            home_goal_minutes: Some(per_goal(1)),
            away_goal_minutes: Some(per_goal(2)),
            stats: StatColumns {
                home_shots: Some("suturi1".to_string()),
                away_shots: Some("suturi2".to_string()),
                home_corners: Some("cornere1".to_string()),
                away_corners: Some("cornere2".to_string()),
                home_cards: Some("cartonase1".to_string()),
                away_cards: Some("cartonase2".to_string()),
                home_possession: Some("posesie1".to_string()),
                away_possession: Some("posesie2".to_string()),
            },
        }
    }

    /// Descriptive English column names.
    pub fn descriptive() -> Self {
        let delimited = |column: &str| MinuteColumns::Delimited {
            column: column.to_string(),
            separator: ';',
        };
        Self {
            name: "descriptive".to_string(),
            match_date: "Date".to_string(),
            home_team: "Home Team".to_string(),
            away_team: "Away Team".to_string(),
            home_goals_ft: "Home Goals".to_string(),
            away_goals_ft: "Away Goals".to_string(),
            home_goals_ht: "Home Goals HT".to_string(),
            away_goals_ht: "Away Goals HT".to_string(),
            home_odds: Some("Home Odds".to_string()),
            draw_odds: Some("Draw Odds".to_string()),
            away_odds: Some("Away Odds".to_string()),
            home_goal_minutes: Some(delimited("Home Goal Minutes")),
            away_goal_minutes: Some(delimited("Away Goal Minutes")),
            stats: StatColumns {
                home_shots: Some("Home Shots".to_string()),
                away_shots: Some("Away Shots".to_string()),
                home_corners: Some("Home Corners".to_string()),
                away_corners: Some("Away Corners".to_string()),
                home_cards: Some("Home Cards".to_string()),
                away_cards: Some("Away Cards".to_string()),
                home_possession: Some("Home Possession".to_string()),
                away_possession: Some("Away Possession".to_string()),
            },
        }
    }

    pub fn from_json(raw: &str) -> Result<Self, SchemaError> {
        serde_json::from_str(raw).map_err(|e| SchemaError::InvalidMapping(e.to_string()))
    }

    fn required_columns(&self) -> [&str; 7] {
        [
            self.match_date.as_str(),
            self.home_team.as_str(),
            self.away_team.as_str(),
            self.home_goals_ft.as_str(),
            self.away_goals_ft.as_str(),
            self.home_goals_ht.as_str(),
            self.away_goals_ht.as_str(),
        ]
    }

    fn matches(&self, table: &RawTable) -> bool {
        self.required_columns().iter().all(|c| table.has_column(c))
    }
}

pub fn builtin_layouts() -> Vec<ColumnMapping> {
    vec![ColumnMapping::coded(), ColumnMapping::descriptive()]
}

pub fn layout_by_name(name: &str) -> Result<ColumnMapping, SchemaError> {
    builtin_layouts()
        .into_iter()
        .find(|m| m.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| SchemaError::UnknownLayout(name.to_string()))
}

/// Pick the first built-in layout whose required columns are all present.
pub fn detect_layout(table: &RawTable) -> Result<ColumnMapping, SchemaError> {
    let mapping = builtin_layouts()
        .into_iter()
        .find(|m| m.matches(table))
        .ok_or_else(|| SchemaError::UnrecognizedLayout {
            headers: table.headers.clone(),
        })?;

    tracing::info!("Detected '{}' column layout", mapping.name);
    Ok(mapping)
}

// ── Normalization ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRow {
    pub row: usize, // zero-based data row, header excluded
    pub error: RowCoercionError,
}

/// Clean records plus the rows that had to be dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizeReport {
    pub records: Vec<MatchRecord>,
    pub skipped: Vec<SkippedRow>,
}

impl NormalizeReport {
    pub fn dropped(&self) -> usize {
        self.skipped.len()
    }
}

enum ResolvedMinutes {
    None,
    PerGoal(Vec<usize>),
    Delimited(usize, char),
}

struct ResolvedColumns {
    match_date: usize,
    home_team: usize,
    away_team: usize,
    home_goals_ft: usize,
    away_goals_ft: usize,
    home_goals_ht: usize,
    away_goals_ht: usize,
    home_odds: Option<usize>,
    draw_odds: Option<usize>,
    away_odds: Option<usize>,
    home_minutes: ResolvedMinutes,
    away_minutes: ResolvedMinutes,
    stats: [Option<usize>; 8],
}

fn required(table: &RawTable, name: &str) -> Result<usize, SchemaError> {
    if name.trim().is_empty() {
        return Err(SchemaError::InvalidMapping("empty column name".to_string()));
    }
    table
        .column_index(name)
        .ok_or_else(|| SchemaError::MissingColumn(name.to_string()))
}

fn resolve_minutes(
    table: &RawTable,
    spec: &Option<MinuteColumns>,
) -> Result<ResolvedMinutes, SchemaError> {
    match spec {
        None => Ok(ResolvedMinutes::None),
        Some(MinuteColumns::PerGoal { columns }) => {
            if columns.is_empty() {
                return Err(SchemaError::InvalidMapping(
                    "per_goal minute mapping lists no columns".to_string(),
                ));
            }
            // Layouts may declare more goal slots than a given export carries.
            let found: Vec<usize> = columns.iter().filter_map(|c| table.column_index(c)).collect();
            if found.is_empty() {
                tracing::debug!("No goal-minute columns present; minutes left empty");
                return Ok(ResolvedMinutes::None);
            }
            Ok(ResolvedMinutes::PerGoal(found))
        }
        Some(MinuteColumns::Delimited { column, separator }) => match table.column_index(column) {
            Some(idx) => Ok(ResolvedMinutes::Delimited(idx, *separator)),
            None => {
                tracing::debug!("Goal-minute column '{}' absent; minutes left empty", column);
                Ok(ResolvedMinutes::None)
            }
        },
    }
}

impl ResolvedColumns {
    fn resolve(table: &RawTable, mapping: &ColumnMapping) -> Result<Self, SchemaError> {
        let s = &mapping.stats;
        let optional = |c: &Option<String>| c.as_deref().and_then(|name| table.column_index(name));

        Ok(Self {
            match_date: required(table, &mapping.match_date)?,
            home_team: required(table, &mapping.home_team)?,
            away_team: required(table, &mapping.away_team)?,
            home_goals_ft: required(table, &mapping.home_goals_ft)?,
            away_goals_ft: required(table, &mapping.away_goals_ft)?,
            home_goals_ht: required(table, &mapping.home_goals_ht)?,
            away_goals_ht: required(table, &mapping.away_goals_ht)?,
            home_odds: optional(&mapping.home_odds),
            draw_odds: optional(&mapping.draw_odds),
            away_odds: optional(&mapping.away_odds),
            home_minutes: resolve_minutes(table, &mapping.home_goal_minutes)?,
            away_minutes: resolve_minutes(table, &mapping.away_goal_minutes)?,
            stats: [
                optional(&s.home_shots),
                optional(&s.away_shots),
                optional(&s.home_corners),
                optional(&s.away_corners),
                optional(&s.home_cards),
                optional(&s.away_cards),
                optional(&s.home_possession),
                optional(&s.away_possession),
            ],
        })
    }
}

/// Map a raw table onto canonical records using `mapping`.
///
/// Missing required columns abort the whole table. Rows whose goal
/// fields cannot be coerced are dropped and listed in the report; bad
/// dates, odds, minutes and stats only null out the affected value.
pub fn normalize(table: &RawTable, mapping: &ColumnMapping) -> Result<NormalizeReport, SchemaError> {
    let cols = ResolvedColumns::resolve(table, mapping)?;
    let mut report = NormalizeReport::default();

    for (row_idx, row) in table.rows.iter().enumerate() {
        match normalize_row(row, table.headers.len(), &cols, &table.headers) {
            Ok(record) => report.records.push(record),
            Err(error) => {
                tracing::warn!("Dropping row {}: {}", row_idx, error);
                report.skipped.push(SkippedRow { row: row_idx, error });
            }
        }
    }

    tracing::info!(
        "Normalized {} rows with '{}' layout ({} dropped)",
        report.records.len(),
        mapping.name,
        report.dropped()
    );
    Ok(report)
}

fn normalize_row(
    row: &[String],
    width: usize,
    cols: &ResolvedColumns,
    headers: &[String],
) -> Result<MatchRecord, RowCoercionError> {
    if row.len() != width {
        return Err(RowCoercionError::RaggedRow {
            expected: width,
            found: row.len(),
        });
    }

    let team = |idx: usize| -> Result<String, RowCoercionError> {
        let name = row[idx].trim();
        if name.is_empty() {
            return Err(RowCoercionError::EmptyTeamName {
                column: headers[idx].clone(),
            });
        }
        Ok(name.to_string())
    };
    let goals = |idx: usize| -> Result<u32, RowCoercionError> {
        parse_goals(&row[idx]).ok_or_else(|| RowCoercionError::InvalidGoals {
            column: headers[idx].clone(),
            value: row[idx].clone(),
        })
    };

    let home_team = team(cols.home_team)?;
    let away_team = team(cols.away_team)?;
    let home_goals_ft = goals(cols.home_goals_ft)?;
    let away_goals_ft = goals(cols.away_goals_ft)?;
    let home_goals_ht = goals(cols.home_goals_ht)?;
    let away_goals_ht = goals(cols.away_goals_ht)?;

    if home_goals_ht > home_goals_ft {
        return Err(RowCoercionError::HalfTimeExceedsFullTime { side: "home".to_string() });
    }
    if away_goals_ht > away_goals_ft {
        return Err(RowCoercionError::HalfTimeExceedsFullTime { side: "away".to_string() });
    }

    let match_date = parse_date(&row[cols.match_date]);
    if match_date.is_none() && !row[cols.match_date].trim().is_empty() {
        tracing::debug!("Unparseable date '{}' kept as null", row[cols.match_date]);
    }

    let stat = |slot: usize| cols.stats[slot].and_then(|idx| parse_stat(&row[idx]));
    let odds = |col: Option<usize>| col.and_then(|idx| parse_odds(&row[idx]));

    Ok(MatchRecord {
        match_date,
        home_team,
        away_team,
        home_goals_ft,
        away_goals_ft,
        home_goals_ht,
        away_goals_ht,
        home_odds: odds(cols.home_odds),
        draw_odds: odds(cols.draw_odds),
        away_odds: odds(cols.away_odds),
        home_goal_minutes: read_minutes(row, &cols.home_minutes),
        away_goal_minutes: read_minutes(row, &cols.away_minutes),
        stats: SecondaryStats {
            home_shots: stat(0),
            away_shots: stat(1),
            home_corners: stat(2),
            away_corners: stat(3),
            home_cards: stat(4),
            away_cards: stat(5),
            home_possession: stat(6),
            away_possession: stat(7),
        },
    })
}

fn read_minutes(row: &[String], spec: &ResolvedMinutes) -> Vec<u32> {
    match spec {
        ResolvedMinutes::None => Vec::new(),
        ResolvedMinutes::PerGoal(indices) => {
            indices.iter().filter_map(|&idx| parse_minute(&row[idx])).collect()
        }
        ResolvedMinutes::Delimited(idx, sep) => {
            row[*idx].split(*sep).filter_map(parse_minute).collect()
        }
    }
}

// ── Cell coercion ───────────────────────────────────────────────────────────

fn parse_number(cell: &str) -> Option<f64> {
    let cell = cell.trim();
    if cell.is_empty() {
        return None;
    }
    // Spreadsheets from continental locales use a decimal comma.
    let value = if cell.contains(',') && !cell.contains('.') {
        cell.replace(',', ".").parse::<f64>().ok()?
    } else {
        cell.parse::<f64>().ok()?
    };
    value.is_finite().then_some(value)
}

/// Largest goal count (or minute) a cell may hold. Keeps every sum of
/// two or four counts well inside `u32`.
pub const MAX_GOALS: u32 = u16::MAX as u32;

/// Goal counts, accepting spreadsheet floats such as `"2.0"`.
pub fn parse_goals(cell: &str) -> Option<u32> {
    let cell = cell.trim();
    if let Ok(n) = cell.parse::<u32>() {
        return (n <= MAX_GOALS).then_some(n);
    }
    let value = parse_number(cell)?;
    if value < 0.0 || value.fract() != 0.0 || value > MAX_GOALS as f64 {
        return None;
    }
    Some(value as u32)
}

/// Decimal odds. Values at or below 1.0 are not valid quotes.
pub fn parse_odds(cell: &str) -> Option<f64> {
    let odds = parse_number(cell)?;
    if odds <= 1.0 {
        tracing::debug!("Discarding invalid odds '{}'", cell);
        return None;
    }
    Some(odds)
}

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S", "%d/%m/%Y %H:%M"];
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y", "%d/%m/%y", "%d.%m.%Y", "%Y/%m/%d"];

/// Calendar dates in the formats seen across exports; anything else is null.
pub fn parse_date(cell: &str) -> Option<NaiveDateTime> {
    let cell = cell.trim();
    if cell.is_empty() {
        return None;
    }
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(cell) {
        return Some(dt.naive_utc());
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(cell, fmt) {
            return Some(dt);
        }
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(cell, fmt).ok())
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Goal minute, with stoppage notation (`"45+2"` is 47) and an optional
/// trailing apostrophe.
pub fn parse_minute(cell: &str) -> Option<u32> {
    let cell = cell.trim().trim_end_matches('\'');
    if cell.is_empty() {
        return None;
    }
    let minute = match cell.split_once('+') {
        Some((base, extra)) => parse_goals(base)?.checked_add(parse_goals(extra)?)?,
        None => parse_goals(cell)?,
    };
    Some(minute)
}

fn parse_stat(cell: &str) -> Option<f64> {
    parse_number(cell.trim().trim_end_matches('%'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coded_table(rows: &[&[&str]]) -> RawTable {
        let headers = [
            "datameci", "txtechipa1", "txtechipa2", "scor1", "scor2", "scorp1", "scorp2", "cotaa",
            "cotae", "cotad", "gol1_min1", "gol1_min2", "gol2_min1",
        ];
        RawTable::new(
            headers.iter().map(|h| h.to_string()).collect(),
            rows.iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn test_normalize_coded_row() {
        let table = coded_table(&[&[
            "2024-03-10", "Inter", "Milan", "2", "1", "1", "0", "1.80", "3.50", "4.20", "12", "45+2", "88",
        ]]);
        let report = normalize(&table, &ColumnMapping::coded()).unwrap();
        assert_eq!(report.dropped(), 0);

        let r = &report.records[0];
        assert_eq!(r.home_team, "Inter");
        assert_eq!((r.home_goals_ft, r.away_goals_ft), (2, 1));
        assert_eq!(r.home_odds, Some(1.80));
        assert_eq!(r.home_goal_minutes, vec![12, 47]);
        assert_eq!(r.away_goal_minutes, vec![88]);
        assert!(r.match_date.is_some());
        assert_eq!(r.stats, SecondaryStats::default());
    }

    #[test]
    fn test_missing_required_column() {
        let table = RawTable::new(vec!["datameci".to_string()], vec![]);
        let err = normalize(&table, &ColumnMapping::coded()).unwrap_err();
        assert_eq!(err, SchemaError::MissingColumn("txtechipa1".to_string()));
    }

    #[test]
    fn test_bad_goals_drop_row_bad_date_does_not() {
        let table = coded_table(&[
            &["not a date", "Inter", "Milan", "2", "1", "1", "0", "1.80", "3.50", "4.20", "", "", ""],
            &["2024-03-10", "Roma", "Lazio", "x", "1", "0", "0", "2.10", "3.20", "3.40", "", "", ""],
            &["2024-03-11", "Roma", "Lazio", "1", "1", "2", "0", "2.10", "3.20", "3.40", "", "", ""],
        ]);
        let report = normalize(&table, &ColumnMapping::coded()).unwrap();
        assert_eq!(report.records.len(), 1);
        assert_eq!(report.records[0].match_date, None);
        assert_eq!(report.dropped(), 2);
        assert!(matches!(report.skipped[0].error, RowCoercionError::InvalidGoals { .. }));
        assert_eq!(report.skipped[0].row, 1);
        assert!(matches!(
            report.skipped[1].error,
            RowCoercionError::HalfTimeExceedsFullTime { .. }
        ));
    }

    #[test]
    fn test_invalid_odds_become_missing() {
        let table = coded_table(&[&[
            "2024-03-10", "Inter", "Milan", "0", "0", "0", "0", "1.00", "", "abc", "", "", "",
        ]]);
        let r = &normalize(&table, &ColumnMapping::coded()).unwrap().records[0];
        assert_eq!((r.home_odds, r.draw_odds, r.away_odds), (None, None, None));
    }

    #[test]
    fn test_detect_layout() {
        let coded = coded_table(&[]);
        assert_eq!(detect_layout(&coded).unwrap().name, "coded");

        let unknown = RawTable::new(vec!["foo".to_string()], vec![]);
        assert!(matches!(
            detect_layout(&unknown),
            Err(SchemaError::UnrecognizedLayout { .. })
        ));
        assert!(layout_by_name("DESCRIPTIVE").is_ok());
        assert_eq!(
            layout_by_name("legacy"),
            Err(SchemaError::UnknownLayout("legacy".to_string()))
        );
    }

    #[test]
    fn test_mapping_from_json() {
        let json = serde_json::to_string(&ColumnMapping::descriptive()).unwrap();
        assert_eq!(ColumnMapping::from_json(&json).unwrap(), ColumnMapping::descriptive());
        assert!(matches!(
            ColumnMapping::from_json("{}"),
            Err(SchemaError::InvalidMapping(_))
        ));
    }

    #[test]
    fn test_cell_coercion() {
        assert_eq!(parse_goals("3.0"), Some(3));
        assert_eq!(parse_goals("-1"), None);
        assert_eq!(parse_goals("2.5"), None);
        assert_eq!(parse_odds("2,50"), Some(2.5));
        assert_eq!(parse_minute("90+4'"), Some(94));
        assert_eq!(parse_minute(""), None);
        assert!(parse_date("10/03/2024").is_some());
        assert!(parse_date("2024-03-10T20:45:00+01:00").is_some());
        assert_eq!(parse_date("31/02/2024"), None);
        assert_eq!(parse_goals("65535"), Some(MAX_GOALS));
        assert_eq!(parse_goals("65536"), None);
        assert_eq!(parse_goals("4294967295"), None);
        assert_eq!(parse_goals("1e12"), None);
    }

    #[test]
    fn test_oversized_goal_count_drops_row() {
        let table = coded_table(&[
            &["2024-03-10", "Inter", "Milan", "4294967295", "1", "0", "0", "1.80", "3.50", "4.20", "", "", ""],
            &["2024-03-11", "Roma", "Lazio", "1", "1", "0", "0", "2.10", "3.20", "3.40", "", "", ""],
        ]);
        let report = normalize(&table, &ColumnMapping::coded()).unwrap();
        assert_eq!(report.records.len(), 1);
        assert_eq!(report.skipped[0].row, 0);
        assert_eq!(
            report.skipped[0].error,
            RowCoercionError::InvalidGoals {
                column: "scor1".to_string(),
                value: "4294967295".to_string(),
            }
        );

        let enriched = crate::services::enrich(report.records);
        assert_eq!(enriched[0].facts.goals_ft, 2);
    }

    #[test]
    fn test_coded_export_without_draw_odds() {
        let headers = [
            "datameci", "txtechipa1", "txtechipa2", "scor1", "scor2", "scorp1", "scorp2", "cotaa", "cotad",
        ];
        let table = RawTable::new(
            headers.iter().map(|h| h.to_string()).collect(),
            vec![["2024-03-10", "Inter", "Milan", "2", "1", "1", "0", "1.80", "4.20"]
                .iter()
                .map(|c| c.to_string())
                .collect()],
        );

        let mapping = detect_layout(&table).unwrap();
        assert_eq!(mapping.name, "coded");

        let report = normalize(&table, &mapping).unwrap();
        assert_eq!(report.dropped(), 0);
        let r = &report.records[0];
        assert_eq!((r.home_odds, r.draw_odds, r.away_odds), (Some(1.80), None, Some(4.20)));
        assert!(r.home_goal_minutes.is_empty());
    }

    #[test]
    fn test_ragged_row_is_dropped() {
        let table = coded_table(&[
            &["2024-03-10", "Inter", "Milan", "2", "1", "1", "0", "1.80", "3.50", "4.20", "", "", ""],
            &["2024-03-11", "Roma", "Lazio", "1", "1", "0", "0"],
        ]);
        let report = normalize(&table, &ColumnMapping::coded()).unwrap();
        assert_eq!(report.records.len(), 1);
        assert_eq!(report.dropped(), 1);
        assert_eq!(report.skipped[0].row, 1);
        assert_eq!(
            report.skipped[0].error,
            RowCoercionError::RaggedRow { expected: 13, found: 7 }
        );
    }

    #[test]
    fn test_empty_team_name_is_dropped() {
        let table = coded_table(&[
            &["2024-03-10", "Inter", "Milan", "2", "1", "1", "0", "1.80", "3.50", "4.20", "", "", ""],
            &["2024-03-11", "Roma", "Lazio", "1", "1", "0", "0", "2.10", "3.20", "3.40", "", "", ""],
            &["2024-03-12", "  ", "Genoa", "0", "0", "0", "0", "1.60", "3.80", "5.50", "", "", ""],
        ]);
        let report = normalize(&table, &ColumnMapping::coded()).unwrap();
        assert_eq!(report.records.len(), 2);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].row, 2);
        assert_eq!(
            report.skipped[0].error,
            RowCoercionError::EmptyTeamName { column: "txtechipa1".to_string() }
        );
    }
}
