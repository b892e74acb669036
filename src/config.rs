use crate::error::{QueryError, Result};
use crate::export::OutputFormat;
use crate::insights::{GemThresholds, RankMetric};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Defaults for a query run, optionally read from a JSON settings file.
///
/// Every field has a default, so a settings file only needs the values it changes:
///
/// ```json
/// { "top_n": 5, "gem_thresholds": { "max_votes": 25000 } }
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Length of the top-N ranking (default: 10)
    pub top_n: usize,
    /// Metric the ranking orders by when `--metric` is not given
    pub top_metric: RankMetric,
    pub gem_thresholds: GemThresholds,
    /// Output format when neither `--format` nor the output extension decides
    pub default_format: OutputFormat,
    /// Log level used when `RUST_LOG` is unset ("error", "warn", "info", "debug", "trace")
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            top_n: 10,
            top_metric: RankMetric::ImdbRating,
            gem_thresholds: GemThresholds::default(),
            default_format: OutputFormat::Text,
            log_level: "info".to_owned(),
        }
    }
}

impl Settings {
    /// Reads settings from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::InvalidPath`] if the file is missing and
    /// [`QueryError::Config`] if it is not valid settings JSON.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(QueryError::InvalidPath(format!(
                "Settings file not found: {}",
                path.display()
            )));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parses settings from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::Config`] on malformed JSON or out-of-range values.
    pub fn from_json(content: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(content)
            .map_err(|e| QueryError::Config(format!("Failed to parse settings JSON: {e}")))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Loads `path` when given, otherwise the defaults.
    ///
    /// # Errors
    ///
    /// See [`Settings::load`].
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }

    fn validate(&self) -> Result<()> {
        if !self.gem_thresholds.min_rating.is_finite() {
            return Err(QueryError::Config(
                "gem_thresholds.min_rating must be a finite number".to_owned(),
            ));
        }
        if self.log_level.parse::<log::LevelFilter>().is_err() {
            return Err(QueryError::Config(format!(
                "Unknown log_level '{}'",
                self.log_level
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![expect(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.top_n, 10);
        assert_eq!(settings.gem_thresholds.max_votes, 50_000);
        assert_eq!(settings.top_metric, RankMetric::ImdbRating);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings =
            Settings::from_json(r#"{ "top_n": 5, "gem_thresholds": { "max_votes": 25000 }, "top_metric": "gross" }"#)
                .unwrap();
        assert_eq!(settings.top_n, 5);
        assert_eq!(settings.top_metric, RankMetric::Gross);
        assert_eq!(settings.gem_thresholds.max_votes, 25_000);
        assert_eq!(settings.gem_thresholds.min_rating, 8.0);
        assert_eq!(settings.default_format, OutputFormat::Text);
    }

    #[test]
    fn test_invalid_settings_rejected() {
        assert!(matches!(
            Settings::from_json("{ not json"),
            Err(QueryError::Config(_))
        ));
        assert!(matches!(
            Settings::from_json(r#"{ "log_level": "loud" }"#),
            Err(QueryError::Config(_))
        ));
    }

    #[test]
    fn test_missing_settings_file() {
        let missing = std::env::temp_dir().join("reelquery_missing_settings.json");
        assert!(matches!(
            Settings::load(&missing),
            Err(QueryError::InvalidPath(_))
        ));
        assert_eq!(Settings::load_or_default(None).unwrap(), Settings::default());
    }
}
