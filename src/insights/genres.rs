use super::types::{GenreInsight, GenreInsights};
use crate::query::{MovieRecord, parse_float, parse_int, parse_runtime_minutes};
use indexmap::IndexMap;

/// Values collected for one genre. Unparseable fields are left out, not zeroed.
#[derive(Debug, Clone, Default)]
pub struct GenreStats {
    pub movie_count: usize,
    pub ratings: Vec<f64>,
    pub gross: Vec<f64>,
    pub runtimes: Vec<f64>,
}

impl GenreStats {
    fn push(&mut self, movie: &MovieRecord) {
        self.movie_count += 1;
        if let Some(rating) = parse_float(movie.imdb_rating()) {
            self.ratings.push(rating);
        }
        if let Some(gross) = parse_int(movie.gross()) {
            self.gross.push(gross as f64);
        }
        if let Some(runtime) = parse_runtime_minutes(movie.runtime()) {
            self.runtimes.push(runtime as f64);
        }
    }

    fn into_insight(self, genre: String) -> GenreInsight {
        GenreInsight {
            genre,
            movie_count: self.movie_count,
            avg_rating: mean(&self.ratings),
            avg_gross: mean(&self.gross),
            avg_runtime: mean(&self.runtimes),
        }
    }
}

/// Arithmetic mean, or 0 for no values.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// Groups `movies` by each genre they list and averages rating, gross and runtime.
///
/// A movie listing several genres contributes to each of them. Genres appear in
/// the order they are first met.
pub fn genre_insights(movies: &[&MovieRecord]) -> GenreInsights {
    let mut stats: IndexMap<String, GenreStats> = IndexMap::new();
    for &movie in movies {
        for genre in movie.genres() {
            stats.entry(genre.to_owned()).or_default().push(movie);
        }
    }

    GenreInsights {
        entries: stats
            .into_iter()
            .map(|(genre, stats)| (genre.clone(), stats.into_insight(genre)))
            .collect(),
    }
}
