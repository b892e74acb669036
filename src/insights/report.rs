//! Analytics report assembly and text rendering.
//!
//! The report only holds structured results; [`AnalyticsReport::render_text`]
//! and [`AnalyticsReport::to_json`] turn it into something a person or another
//! tool can read.

use super::gems::hidden_gem_entries;
use super::genres::genre_insights;
use super::ranking::ranked;
use super::types::{GemThresholds, GenreInsights, HiddenGem, RankMetric, RankedMovie};
use crate::error::Result;
use crate::query::MovieRecord;
use crate::utils::fmt_grouped;
use serde::Serialize;
use std::fmt::Write as _;

/// Which analytics to run over the filtered movies.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportRequest {
    /// Metric and size of a top-N ranking.
    pub top: Option<(RankMetric, usize)>,
    pub genre_insights: bool,
    /// Thresholds of a hidden-gems scan.
    pub hidden_gems: Option<GemThresholds>,
}

impl ReportRequest {
    pub fn is_empty(&self) -> bool {
        self.top.is_none() && !self.genre_insights && self.hidden_gems.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopSection {
    pub metric: RankMetric,
    pub requested: usize,
    pub entries: Vec<RankedMovie>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HiddenGemsSection {
    pub thresholds: GemThresholds,
    pub entries: Vec<HiddenGem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnalyticsReport {
    /// Number of movies the analytics ran over.
    pub matched: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<TopSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre_insights: Option<GenreInsights>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden_gems: Option<HiddenGemsSection>,
}

/// Runs every analytics pass `request` asks for over `movies`.
pub fn build_report(movies: &[&MovieRecord], request: &ReportRequest) -> AnalyticsReport {
    let top = request.top.map(|(metric, n)| TopSection {
        metric,
        requested: n,
        entries: ranked(movies, metric, n),
    });
    let genres = request.genre_insights.then(|| genre_insights(movies));
    let hidden_gems = request.hidden_gems.map(|thresholds| HiddenGemsSection {
        thresholds,
        entries: hidden_gem_entries(movies, &thresholds),
    });

    AnalyticsReport {
        matched: movies.len(),
        top,
        genre_insights: genres,
        hidden_gems,
    }
}

fn fmt_metric(metric: RankMetric, value: f64) -> String {
    match metric {
        RankMetric::ImdbRating => format!("{value:.1}"),
        RankMetric::Gross | RankMetric::Votes => fmt_grouped(value, 0),
        RankMetric::Runtime => format!("{value:.0} min"),
        RankMetric::MetaScore | RankMetric::ReleasedYear => format!("{value:.0}"),
    }
}

fn fmt_title(title: &str, year: &str) -> String {
    if year.is_empty() {
        title.to_owned()
    } else {
        format!("{title} ({year})")
    }
}

impl AnalyticsReport {
    /// Renders the report as plain text, one section per requested analysis.
    pub fn render_text(&self) -> String {
        let mut out = String::new();

        if let Some(top) = &self.top {
            let _ = writeln!(out, "Top {} by {}", top.requested, top.metric);
            if top.entries.is_empty() {
                out.push_str("  (no movies)\n");
            }
            for entry in &top.entries {
                let _ = writeln!(
                    out,
                    "  {:>2}. {} - {}",
                    entry.rank,
                    fmt_title(&entry.title, &entry.year),
                    fmt_metric(top.metric, entry.value)
                );
            }
            out.push('\n');
        }

        if let Some(insights) = &self.genre_insights {
            out.push_str("Genre insights\n");
            if insights.is_empty() {
                out.push_str("  (no genres)\n");
            }
            for insight in insights {
                let _ = writeln!(
                    out,
                    "  {}: {} movies, avg rating {:.2}, avg gross {}, avg runtime {:.1} min",
                    insight.genre,
                    insight.movie_count,
                    insight.avg_rating,
                    fmt_grouped(insight.avg_gross, 2),
                    insight.avg_runtime
                );
            }
            out.push('\n');
        }

        if let Some(gems) = &self.hidden_gems {
            let _ = writeln!(
                out,
                "Hidden gems (rating >= {:.1}, votes <= {})",
                gems.thresholds.min_rating,
                fmt_grouped(gems.thresholds.max_votes as f64, 0)
            );
            if gems.entries.is_empty() {
                out.push_str("  (no movies)\n");
            }
            for gem in &gems.entries {
                let _ = writeln!(
                    out,
                    "  - {}: rating {:.1}, {} votes",
                    fmt_title(&gem.title, &gem.year),
                    gem.rating,
                    fmt_grouped(gem.votes as f64, 0)
                );
            }
            out.push('\n');
        }

        out
    }

    /// Pretty-printed JSON document of the report.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::QueryError::Serialization`] if encoding fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
