use super::types::{GemThresholds, HiddenGem};
use crate::query::{MovieRecord, parse_float, parse_int};

/// Rating and vote count of `movie` if both parse and meet `thresholds`.
fn gem_values(movie: &MovieRecord, thresholds: &GemThresholds) -> Option<(f64, i64)> {
    let rating = parse_float(movie.imdb_rating())?;
    let votes = parse_int(movie.no_of_votes())?;
    (rating >= thresholds.min_rating && votes <= thresholds.max_votes).then_some((rating, votes))
}

/// Movies rated at least `min_rating` with at most `max_votes` votes, in input order.
///
/// Movies whose rating or vote count does not parse are left out.
pub fn hidden_gems<'a>(
    movies: &[&'a MovieRecord],
    thresholds: &GemThresholds,
) -> Vec<&'a MovieRecord> {
    movies
        .iter()
        .copied()
        .filter(|movie| gem_values(movie, thresholds).is_some())
        .collect()
}

/// [`hidden_gems`] with the coerced rating and votes attached, for reports.
pub fn hidden_gem_entries(movies: &[&MovieRecord], thresholds: &GemThresholds) -> Vec<HiddenGem> {
    movies
        .iter()
        .filter_map(|movie| {
            gem_values(movie, thresholds).map(|(rating, votes)| HiddenGem {
                title: movie.title().to_owned(),
                year: movie.released_year().to_owned(),
                rating,
                votes,
            })
        })
        .collect()
}
