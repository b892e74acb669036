//! Loading the movie dataset from a delimited text file.
//!
//! The whole file is read into memory before any filtering happens. Header
//! cells are normalised with [`normalize_headers`] so `Series_Title` and
//! `series_title` name the same field; a header that collides after
//! normalisation gets a numeric suffix. Values are kept as raw text.

use crate::error::{QueryError, Result};
use crate::query::{MovieRecord, normalize_headers};
use std::io::Read;
use std::path::Path;

/// The loaded dataset: normalised header row plus one record per data row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    pub headers: Vec<String>,
    pub movies: Vec<MovieRecord>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

/// Reads a comma-delimited file with a header row.
///
/// # Errors
///
/// Returns [`QueryError::InvalidPath`] when `path` does not exist and
/// [`QueryError::Dataset`] when a row cannot be read (ragged rows, bad UTF-8).
pub fn load_movies(path: &Path) -> Result<Dataset> {
    if !path.is_file() {
        return Err(QueryError::InvalidPath(format!(
            "Input file not found: {}",
            path.display()
        )));
    }
    let file = std::fs::File::open(path)?;
    let dataset = read_movies(file, b',')?;
    log::info!(
        "Loaded {} movies with {} columns from {}",
        dataset.len(),
        dataset.headers.len(),
        path.display()
    );
    Ok(dataset)
}

/// Reads delimited records with a header row from any reader.
///
/// # Errors
///
/// Returns [`QueryError::Dataset`] when the header or a row is malformed.
pub fn read_movies<R: Read>(reader: R, delimiter: u8) -> Result<Dataset> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .from_reader(reader);

    let headers = normalize_headers(csv_reader.headers()?.iter());

    let mut movies = Vec::new();
    for (row, result) in csv_reader.records().enumerate() {
        let record = result.map_err(|e| QueryError::Dataset(format!("row {}: {e}", row + 1)))?;
        let fields = headers
            .iter()
            .cloned()
            .zip(record.iter().map(str::to_owned))
            .collect();
        movies.push(MovieRecord::new(fields));
    }
    log::debug!("Parsed {} data rows", movies.len());

    Ok(Dataset { headers, movies })
}
