use crate::query::{MovieRecord, field, parse_float, parse_runtime_minutes};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric field a top-N ranking orders by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum RankMetric {
    #[default]
    #[value(name = "imdb_rating")]
    ImdbRating,
    #[value(name = "meta_score")]
    MetaScore,
    #[value(name = "no_of_votes")]
    #[serde(rename = "no_of_votes")]
    Votes,
    #[value(name = "gross")]
    Gross,
    #[value(name = "runtime")]
    Runtime,
    #[value(name = "released_year")]
    ReleasedYear,
}

impl RankMetric {
    pub fn field_name(self) -> &'static str {
        match self {
            Self::ImdbRating => field::IMDB_RATING,
            Self::MetaScore => field::META_SCORE,
            Self::Votes => field::NO_OF_VOTES,
            Self::Gross => field::GROSS,
            Self::Runtime => field::RUNTIME,
            Self::ReleasedYear => field::RELEASED_YEAR,
        }
    }

    /// Coerced value of this metric for `movie`, `None` when unparseable.
    ///
    /// Runtime carries a unit suffix and goes through the runtime coercion;
    /// every other metric is float-parsed.
    pub fn value(self, movie: &MovieRecord) -> Option<f64> {
        let raw = movie.get(self.field_name());
        match self {
            Self::Runtime => parse_runtime_minutes(raw).map(|m| m as f64),
            _ => parse_float(raw),
        }
    }
}

impl fmt::Display for RankMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

/// One row of a top-N ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedMovie {
    /// 1-based position.
    pub rank: usize,
    pub title: String,
    pub year: String,
    /// Metric value used for ordering; 0 when the field was unparseable.
    pub value: f64,
}

/// Averages for one genre over the filtered movies listing it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenreInsight {
    #[serde(skip)]
    pub genre: String,
    pub movie_count: usize,
    pub avg_rating: f64,
    pub avg_gross: f64,
    pub avg_runtime: f64,
}

/// Per-genre insights in first-encountered genre order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct GenreInsights {
    pub(crate) entries: IndexMap<String, GenreInsight>,
}

impl GenreInsights {
    pub fn iter(&self) -> indexmap::map::Values<'_, String, GenreInsight> {
        self.entries.values()
    }

    pub fn get(&self, genre: &str) -> Option<&GenreInsight> {
        self.entries.get(genre)
    }

    pub fn genres(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a GenreInsights {
    type Item = &'a GenreInsight;
    type IntoIter = indexmap::map::Values<'a, String, GenreInsight>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Joint thresholds a hidden gem must meet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GemThresholds {
    /// Inclusive lower bound on `imdb_rating`.
    pub min_rating: f64,
    /// Inclusive upper bound on `no_of_votes`.
    pub max_votes: i64,
}

impl Default for GemThresholds {
    fn default() -> Self {
        Self {
            min_rating: 8.0,
            max_votes: 50_000,
        }
    }
}

/// A hidden gem with its coerced rating and vote count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HiddenGem {
    pub title: String,
    pub year: String,
    pub rating: f64,
    pub votes: i64,
}
