use super::types::{RankMetric, RankedMovie};
use crate::query::MovieRecord;

/// Ordering key for rankings. Unparseable values rank as zero; they are never dropped.
pub fn metric_or_zero(movie: &MovieRecord, metric: RankMetric) -> f64 {
    metric.value(movie).unwrap_or(0.0)
}

/// The first `n` movies by `metric`, descending.
///
/// The sort is stable, so movies with equal values keep their relative input
/// order. The input slice is left untouched.
pub fn top_n<'a>(movies: &[&'a MovieRecord], metric: RankMetric, n: usize) -> Vec<&'a MovieRecord> {
    let mut keyed: Vec<(f64, &'a MovieRecord)> = movies
        .iter()
        .map(|&movie| (metric_or_zero(movie, metric), movie))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| b.total_cmp(a));
    keyed.into_iter().take(n).map(|(_, movie)| movie).collect()
}

/// [`top_n`] as rank/title/year/value rows for reports.
pub fn ranked(movies: &[&MovieRecord], metric: RankMetric, n: usize) -> Vec<RankedMovie> {
    top_n(movies, metric, n)
        .into_iter()
        .enumerate()
        .map(|(i, movie)| RankedMovie {
            rank: i + 1,
            title: movie.title().to_owned(),
            year: movie.released_year().to_owned(),
            value: metric_or_zero(movie, metric),
        })
        .collect()
}
