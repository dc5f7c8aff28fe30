use thiserror::Error;

/// Table-level failures. Any of these aborts normalization.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("required column missing: {0}")]
    MissingColumn(String),

    #[error("no known layout matches columns [{}]", .headers.join(", "))]
    UnrecognizedLayout { headers: Vec<String> },

    #[error("unknown layout: {0}")]
    UnknownLayout(String),

    #[error("invalid column mapping: {0}")]
    InvalidMapping(String),
}

/// Row-level failures. The row is dropped and tallied in the skip report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowCoercionError {
    #[error("column {column}: '{value}' is not a goal count")]
    InvalidGoals { column: String, value: String },

    #[error("{side} first-half goals exceed full-time goals")]
    HalfTimeExceedsFullTime { side: String },

    #[error("column {column}: empty team name")]
    EmptyTeamName { column: String },

    #[error("row has {found} cells, header has {expected}")]
    RaggedRow { expected: usize, found: usize },
}

/// Misuse of the aggregation API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// Precondition `len(cohort) > 0` violated. Callers check
    /// `Cohort::is_empty` and show an empty state instead.
    #[error("aggregation requested on an empty cohort")]
    EmptyCohort,

    #[error("cohort has no odds selector (head-to-head cohorts carry no quota)")]
    NoOddsSelector,
}
