//! Writing the filtered movie list as text, CSV or JSON.

use crate::error::{Result, ResultExt as _};
use crate::query::MovieRecord;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `key: value` lines, one blank line between movies
    #[default]
    Text,
    /// Header row from the first movie's column order
    Csv,
    /// Array of objects in column order
    Json,
}

impl OutputFormat {
    /// Format implied by a file extension, if any.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "csv" => Some(Self::Csv),
            "json" => Some(Self::Json),
            "txt" | "text" => Some(Self::Text),
            _ => None,
        }
    }
}

/// Writes `movies` to `writer` in `format`.
///
/// # Errors
///
/// Returns an error if the writer fails or JSON/CSV encoding fails.
pub fn write_movies<W: Write>(writer: W, movies: &[&MovieRecord], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => write_text(writer, movies),
        OutputFormat::Csv => write_csv(writer, movies),
        OutputFormat::Json => write_json(writer, movies),
    }
}

fn write_text<W: Write>(mut writer: W, movies: &[&MovieRecord]) -> Result<()> {
    for (i, movie) in movies.iter().enumerate() {
        if i > 0 {
            writeln!(writer)?;
        }
        for (name, value) in movie.fields() {
            writeln!(writer, "{name}: {value}")?;
        }
    }
    writer.flush()?;
    Ok(())
}

fn write_csv<W: Write>(writer: W, movies: &[&MovieRecord]) -> Result<()> {
    let Some(first) = movies.first() else {
        return Ok(());
    };
    let header: Vec<&str> = first.field_names().collect();

    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(&header)?;
    for movie in movies {
        csv_writer.write_record(header.iter().map(|name| movie.get(name)))?;
    }
    csv_writer.flush()?;
    Ok(())
}

fn write_json<W: Write>(mut writer: W, movies: &[&MovieRecord]) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, movies)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Writes `movies` to `path`, creating or truncating it.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn save_movies(path: &Path, movies: &[&MovieRecord], format: OutputFormat) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create output file {}", path.display()))?;
    write_movies(std::io::BufWriter::new(file), movies, format)?;
    log::info!(
        "Wrote {} movies as {:?} to {}",
        movies.len(),
        format,
        path.display()
    );
    Ok(())
}
