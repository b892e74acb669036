//! Conjunctive record filter.
//!
//! Numeric fields go through one combinator, [`within_range`]: a field with no
//! bound set is never parsed, and a field with any bound set must parse or the
//! record is rejected. String fields use exact, case-sensitive comparison where
//! an empty value is unknown and never matches.

use super::coerce::{parse_float, parse_int, parse_runtime_minutes, parse_year};
use super::criteria::{FieldRange, FilterCriteria};
use super::record::MovieRecord;
use std::ops::{Bound, RangeBounds as _};

/// Applies `range` to the coerced value of `raw`.
///
/// An unbounded range accepts without parsing. Otherwise an unparseable value
/// rejects.
pub fn within_range<T, F>(raw: &str, range: &FieldRange<T>, parse: F) -> bool
where
    T: PartialOrd,
    F: FnOnce(&str) -> Option<T>,
{
    if matches!(range, (Bound::Unbounded, Bound::Unbounded)) {
        return true;
    }
    parse(raw).is_some_and(|value| range.contains(&value))
}

/// `wanted` must equal `actual` exactly; an empty `actual` never matches.
fn matches_exactly(actual: &str, wanted: Option<&str>) -> bool {
    match wanted {
        None => true,
        Some(wanted) => !actual.is_empty() && actual == wanted,
    }
}

/// `wanted` must equal one of `candidates`; empty candidates never match.
fn contains_exactly<'a>(
    mut candidates: impl Iterator<Item = &'a str>,
    wanted: Option<&str>,
) -> bool {
    match wanted {
        None => true,
        Some(wanted) => candidates.any(|c| !c.is_empty() && c == wanted),
    }
}

/// Returns true when `movie` satisfies every predicate set in `criteria`.
pub fn is_valid(movie: &MovieRecord, criteria: &FilterCriteria) -> bool {
    within_range(movie.released_year(), &criteria.year_range(), parse_year)
        && contains_exactly(movie.genres(), criteria.genre.as_deref())
        && within_range(movie.imdb_rating(), &criteria.rating_range(), parse_float)
        && matches_exactly(movie.director(), criteria.director.as_deref())
        && contains_exactly(movie.stars().into_iter(), criteria.actor.as_deref())
        && within_range(
            movie.runtime(),
            &criteria.runtime_range(),
            parse_runtime_minutes,
        )
        && within_range(movie.gross(), &criteria.gross_range(), parse_int)
}

/// Keeps the movies that pass `criteria`, in input order.
pub fn filter_movies<'a>(
    movies: &'a [MovieRecord],
    criteria: &FilterCriteria,
) -> Vec<&'a MovieRecord> {
    let filtered: Vec<&MovieRecord> = movies.iter().filter(|m| is_valid(m, criteria)).collect();
    log::debug!(
        "Filter pass kept {} of {} movies ({} predicates set)",
        filtered.len(),
        movies.len(),
        criteria.active_count()
    );
    filtered
}
