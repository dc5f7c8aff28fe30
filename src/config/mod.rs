use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, Result};

use crate::services::DEFAULT_TOP_K;

/// Runtime settings, read from the environment (and `.env` via dotenv).
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub data_file: Option<PathBuf>,
    pub layout: Option<String>, // forces a built-in layout instead of auto-detection
    pub top_k: usize,
    pub csv_delimiter: u8,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_file: None,
            layout: None,
            top_k: DEFAULT_TOP_K,
            csv_delimiter: b',',
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build settings from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        if let Some(path) = lookup("ODDSLAB_DATA_FILE") {
            settings.data_file = Some(PathBuf::from(path));
        }
        settings.layout = lookup("ODDSLAB_LAYOUT").filter(|l| !l.trim().is_empty());

        if let Some(raw) = lookup("ODDSLAB_TOP_K") {
            settings.top_k = raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|k| *k > 0)
                .ok_or_else(|| anyhow!("ODDSLAB_TOP_K must be a positive integer, got '{}'", raw))?;
        }

        if let Some(raw) = lookup("ODDSLAB_CSV_DELIMITER") {
            settings.csv_delimiter = match raw.as_str() {
                "\\t" | "tab" => b'\t',
                s if s.len() == 1 => s.as_bytes()[0],
                _ => return Err(anyhow!("ODDSLAB_CSV_DELIMITER must be a single byte, got '{}'", raw)),
            };
        }

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::from_lookup(lookup(&[])).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.top_k, 10);
    }

    #[test]
    fn test_overrides() {
        let settings = Settings::from_lookup(lookup(&[
            ("ODDSLAB_DATA_FILE", "data/serie_a.csv"),
            ("ODDSLAB_LAYOUT", "coded"),
            ("ODDSLAB_TOP_K", "5"),
            ("ODDSLAB_CSV_DELIMITER", ";"),
        ]))
        .unwrap();
        assert_eq!(settings.data_file, Some(PathBuf::from("data/serie_a.csv")));
        assert_eq!(settings.layout.as_deref(), Some("coded"));
        assert_eq!(settings.top_k, 5);
        assert_eq!(settings.csv_delimiter, b';');
    }

    #[test]
    fn test_invalid_values() {
        assert!(Settings::from_lookup(lookup(&[("ODDSLAB_TOP_K", "ten")])).is_err());
        assert!(Settings::from_lookup(lookup(&[("ODDSLAB_TOP_K", "0")])).is_err());
        assert!(Settings::from_lookup(lookup(&[("ODDSLAB_TOP_K", "-3")])).is_err());
        assert!(Settings::from_lookup(lookup(&[("ODDSLAB_CSV_DELIMITER", "::")])).is_err());
    }
}
