//! One query run: load, filter, analyse, write.
//!
//! ```text
//! load_movies ─> filter_movies ─┬─> export (filtered list)
//!                               └─> build_report (top-N, genres, gems)
//! ```

use crate::dataset::{Dataset, load_movies};
use crate::error::Result;
use crate::export::{OutputFormat, save_movies, write_movies};
use crate::insights::{AnalyticsReport, ReportRequest, build_report};
use crate::query::{FilterCriteria, MovieRecord, filter_movies};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Everything a run needs, already resolved against settings.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryRequest {
    pub input: PathBuf,
    pub criteria: FilterCriteria,
    /// Destination of the filtered list; stdout when `None`.
    pub output: Option<PathBuf>,
    pub format: OutputFormat,
    pub report: ReportRequest,
    /// Destination of the report; stdout when `None`. A `.json` path gets JSON.
    /// When both the JSON list and the report go to stdout they are written as
    /// one `{"movies": [...], "report": {...}}` document.
    pub report_output: Option<PathBuf>,
}

/// Counts from a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub loaded: usize,
    pub matched: usize,
}

/// Filters `dataset` and runs the requested analytics over the matches.
pub fn evaluate<'a>(
    dataset: &'a Dataset,
    criteria: &FilterCriteria,
    report: &ReportRequest,
) -> (Vec<&'a MovieRecord>, Option<AnalyticsReport>) {
    let filtered = filter_movies(&dataset.movies, criteria);
    log::info!(
        "{} of {} movies matched the filters",
        filtered.len(),
        dataset.len()
    );
    let analytics = (!report.is_empty()).then(|| build_report(&filtered, report));
    (filtered, analytics)
}

/// Runs `request` end to end, writing to files or to `stdout`.
///
/// # Errors
///
/// Returns an error if the input is missing or unreadable, or if any output
/// cannot be written. The core never runs when loading fails.
pub fn run<W: Write>(request: &QueryRequest, mut stdout: W) -> Result<RunSummary> {
    let dataset = load_movies(&request.input)?;
    let (filtered, analytics) = evaluate(&dataset, &request.criteria, &request.report);

    let json_on_stdout = request.output.is_none()
        && request.report_output.is_none()
        && request.format == OutputFormat::Json;
    match &analytics {
        Some(report) if json_on_stdout => write_json_document(&mut stdout, &filtered, report)?,
        _ => {
            match &request.output {
                Some(path) => save_movies(path, &filtered, request.format)?,
                None => write_movies(&mut stdout, &filtered, request.format)?,
            }
            if let Some(report) = &analytics {
                write_report(report, request.report_output.as_deref(), &mut stdout)?;
            }
        }
    }

    Ok(RunSummary {
        loaded: dataset.len(),
        matched: filtered.len(),
    })
}

/// Movies and report sharing stdout as JSON, written as one document.
#[derive(Serialize)]
struct JsonDocument<'a> {
    movies: &'a [&'a MovieRecord],
    report: &'a AnalyticsReport,
}

fn write_json_document<W: Write>(
    mut stdout: W,
    movies: &[&MovieRecord],
    report: &AnalyticsReport,
) -> Result<()> {
    serde_json::to_writer_pretty(&mut stdout, &JsonDocument { movies, report })?;
    writeln!(stdout)?;
    stdout.flush()?;
    Ok(())
}

fn write_report<W: Write>(report: &AnalyticsReport, path: Option<&Path>, stdout: W) -> Result<()> {
    match path {
        Some(path) => {
            let body = if OutputFormat::from_path(path) == Some(OutputFormat::Json) {
                report.to_json()?
            } else {
                report.render_text()
            };
            std::fs::write(path, body)?;
            log::info!("Wrote report to {}", path.display());
        }
        None => {
            let mut stdout = stdout;
            writeln!(stdout)?;
            stdout.write_all(report.render_text().as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
