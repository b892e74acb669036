//! Derived analytics over a filtered movie list.
//!
//! All passes borrow the same immutable `&[&MovieRecord]` snapshot produced by
//! [`crate::query::filter_movies`] and never reorder or mutate it.
//!
//! - [`ranking`]: top-N by a numeric metric (unparseable values rank as zero)
//! - [`genres`]: per-genre averages of rating, gross and runtime
//! - [`gems`]: highly rated movies with few votes
//! - [`report`]: assembles the requested passes and renders them

pub mod gems;
pub mod genres;
pub mod ranking;
pub mod report;
pub mod types;

pub use gems::{hidden_gem_entries, hidden_gems};
pub use genres::{GenreStats, genre_insights, mean};
pub use ranking::{metric_or_zero, ranked, top_n};
pub use report::{AnalyticsReport, ReportRequest, build_report};
pub use types::{GemThresholds, GenreInsight, GenreInsights, HiddenGem, RankMetric, RankedMovie};
