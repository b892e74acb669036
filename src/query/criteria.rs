use serde::{Deserialize, Serialize};
use std::ops::Bound;

/// The eleven optional predicates a movie must satisfy.
///
/// `None` means "no constraint". Year, rating and runtime bounds are
/// exclusive; the gross bounds are inclusive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    pub year_after: Option<i64>,
    pub year_before: Option<i64>,
    pub genre: Option<String>,
    pub rating_above: Option<f64>,
    pub rating_below: Option<f64>,
    pub director: Option<String>,
    pub actor: Option<String>,
    pub runtime_more_than: Option<i64>,
    pub runtime_less_than: Option<i64>,
    pub gross_min: Option<i64>,
    pub gross_max: Option<i64>,
}

/// Lower and upper bound over one numeric field.
pub type FieldRange<T> = (Bound<T>, Bound<T>);

fn exclusive<T>(value: Option<T>) -> Bound<T> {
    value.map_or(Bound::Unbounded, Bound::Excluded)
}

fn inclusive<T>(value: Option<T>) -> Bound<T> {
    value.map_or(Bound::Unbounded, Bound::Included)
}

impl FilterCriteria {
    /// True when no predicate is set, so every record passes.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn year_range(&self) -> FieldRange<i64> {
        (exclusive(self.year_after), exclusive(self.year_before))
    }

    pub fn rating_range(&self) -> FieldRange<f64> {
        (exclusive(self.rating_above), exclusive(self.rating_below))
    }

    pub fn runtime_range(&self) -> FieldRange<i64> {
        (
            exclusive(self.runtime_more_than),
            exclusive(self.runtime_less_than),
        )
    }

    pub fn gross_range(&self) -> FieldRange<i64> {
        (inclusive(self.gross_min), inclusive(self.gross_max))
    }

    /// Number of predicates that are set, for logging.
    pub fn active_count(&self) -> usize {
        [
            self.year_after.is_some(),
            self.year_before.is_some(),
            self.genre.is_some(),
            self.rating_above.is_some(),
            self.rating_below.is_some(),
            self.director.is_some(),
            self.actor.is_some(),
            self.runtime_more_than.is_some(),
            self.runtime_less_than.is_some(),
            self.gross_min.is_some(),
            self.gross_max.is_some(),
        ]
        .into_iter()
        .filter(|set| *set)
        .count()
    }
}
