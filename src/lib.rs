//! # reelquery - movie dataset filtering and analytics
//!
//! reelquery loads a movie dataset from a delimited file, keeps the movies that
//! satisfy every filter the caller set, and optionally reports on the matches.
//!
//! ## Quick Start
//!
//! ```no_run
//! use reelquery::dataset::load_movies;
//! use reelquery::insights::{GemThresholds, RankMetric, genre_insights, hidden_gems, top_n};
//! use reelquery::query::{FilterCriteria, filter_movies};
//! use std::path::Path;
//!
//! # fn main() -> reelquery::error::Result<()> {
//! let dataset = load_movies(Path::new("imdb_top_1000.csv"))?;
//! let criteria = FilterCriteria {
//!     year_after: Some(2000),
//!     genre: Some("Drama".to_owned()),
//!     ..Default::default()
//! };
//! let matches = filter_movies(&dataset.movies, &criteria);
//!
//! for movie in top_n(&matches, RankMetric::Gross, 5) {
//!     println!("{} ({})", movie.title(), movie.released_year());
//! }
//! for insight in &genre_insights(&matches) {
//!     println!("{}: {:.2}", insight.genre, insight.avg_rating);
//! }
//! println!("{} hidden gems", hidden_gems(&matches, &GemThresholds::default()).len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Core Modules
//!
//! - [`query`]: record model, field coercion and the conjunctive filter
//! - [`insights`]: top-N ranking, genre insights, hidden gems, reports
//! - [`dataset`]: reading the delimited file
//! - [`export`]: writing the filtered list as text, CSV or JSON
//! - [`session`]: one end-to-end run
//! - [`config`], [`logging`], [`error`]: settings, logger setup, error types
//!
//! ## Missing and Malformed Values
//!
//! Every value is kept as raw text and coerced only where it is used. An empty
//! or unparseable numeric field excludes a movie from any filter over that
//! field, is skipped by genre averages and hidden-gem detection, and ranks as
//! zero in top-N orderings.

#![warn(clippy::all, rust_2018_idioms)]

pub mod config;
pub mod dataset;
pub mod error;
pub mod export;
pub mod insights;
pub mod logging;
pub mod query;
pub mod session;
pub mod utils;
