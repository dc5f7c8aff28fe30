use std::io::Read;
use std::path::Path;

use anyhow::{anyhow, Context, Result};

/// Untyped tabular input: a header row plus string cells.
///
/// This is the only thing the schema normalizer needs from ingestion, so
/// any reader able to produce headers and rows can feed the engine.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }
}

/// Read a CSV file from disk.
pub fn load_csv(path: &Path, delimiter: u8) -> Result<RawTable> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("cannot open {}", path.display()))?;
    let table = read_csv(file, delimiter)?;

    tracing::info!(
        "Loaded {} rows x {} columns from {}",
        table.rows.len(),
        table.headers.len(),
        path.display()
    );
    Ok(table)
}

/// Read CSV from any byte source. Rows with a different cell count than
/// the header are kept as-is; the normalizer reports them.
pub fn read_csv<R: Read>(reader: R, delimiter: u8) -> Result<RawTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers: Vec<String> = rdr.headers()?.iter().map(|h| h.to_string()).collect();
    if headers.is_empty() {
        return Err(anyhow!("input has no header row"));
    }

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        rows.push(record.iter().map(|c| c.to_string()).collect());
    }

    Ok(RawTable::new(headers, rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_csv_trims_cells() {
        let input = "a, b\n1 , 2\n3,4\n";
        let table = read_csv(input.as_bytes(), b',').unwrap();
        assert_eq!(table.headers, vec!["a", "b"]);
        assert_eq!(table.rows[0], vec!["1", "2"]);
        assert_eq!(table.column_index("b"), Some(1));
        assert!(!table.has_column("c"));
    }

    #[test]
    fn test_read_csv_keeps_ragged_rows() {
        let input = "a;b\n1;2;3\n";
        let table = read_csv(input.as_bytes(), b';').unwrap();
        assert_eq!(table.rows[0].len(), 3);
    }
}
