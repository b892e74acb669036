//! Record model, field coercion and the conjunctive movie filter.
//!
//! ```
//! use reelquery::query::{FilterCriteria, MovieRecord, is_valid};
//!
//! let movie = MovieRecord::from_pairs([
//!     ("series_title", "The Dark Knight"),
//!     ("released_year", "2008"),
//!     ("genre", "Action, Crime, Drama"),
//!     ("imdb_rating", "9"),
//! ]);
//! let criteria = FilterCriteria {
//!     year_after: Some(2000),
//!     genre: Some("Action".to_owned()),
//!     ..Default::default()
//! };
//! assert!(is_valid(&movie, &criteria));
//! ```

pub mod coerce;
pub mod criteria;
pub mod filter;
pub mod record;

pub use coerce::{parse_float, parse_int, parse_runtime_minutes, parse_year};
pub use criteria::{FieldRange, FilterCriteria};
pub use filter::{filter_movies, is_valid, within_range};
pub use record::{GENRE_SEPARATOR, MovieRecord, field, normalize_header, normalize_headers};
