//! End-to-end tests over the fixture dataset in `testdata/`.
//!
//! These load real CSV files, run the filter and analytics passes, and check
//! the written outputs.

use reelquery::dataset::{load_movies, read_movies};
use reelquery::error::QueryError;
use reelquery::export::OutputFormat;
use reelquery::insights::{
    GemThresholds, RankMetric, ReportRequest, genre_insights, hidden_gems, top_n,
};
use reelquery::query::{FilterCriteria, MovieRecord, filter_movies};
use reelquery::session::{self, QueryRequest};
use std::path::{Path, PathBuf};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("testdata").join(name)
}

fn titles(movies: &[&MovieRecord]) -> Vec<String> {
    movies.iter().map(|m| m.title().to_owned()).collect()
}

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("reelquery_{}_{name}", std::process::id()))
}

#[test]
fn test_load_normalises_headers() {
    let dataset = load_movies(&fixture("movies.csv")).expect("fixture loads");
    assert_eq!(dataset.len(), 9, "Should have 9 movies");
    assert_eq!(dataset.headers.len(), 16);
    assert_eq!(dataset.headers[1], "series_title");
    assert_eq!(dataset.headers[14], "no_of_votes");

    let dark_knight = &dataset.movies[2];
    assert_eq!(dark_knight.title(), "The Dark Knight");
    assert_eq!(dark_knight.stars()[1], "Heath Ledger");
    assert_eq!(dark_knight.gross(), "534,858,444");
}

#[test]
fn test_missing_input_is_reported() {
    let result = load_movies(&fixture("does_not_exist.csv"));
    match result {
        Err(QueryError::InvalidPath(msg)) => assert!(msg.contains("Input file not found")),
        other => panic!("expected InvalidPath, got {other:?}"),
    }
}

#[test]
fn test_ragged_rows_are_dataset_errors() {
    let result = load_movies(&fixture("ragged.csv"));
    assert!(matches!(result, Err(QueryError::Dataset(_))));
}

#[test]
fn test_colliding_headers_stay_addressable() {
    let dataset = read_movies("Genre,genre\nDrama,Comedy\n".as_bytes(), b',')
        .expect("duplicate headers load");
    assert_eq!(dataset.headers, ["genre", "genre_1"]);
    assert_eq!(dataset.movies[0].get("genre_1"), "Comedy");

    let matched = filter_movies(
        &dataset.movies,
        &FilterCriteria {
            genre: Some("Drama".to_owned()),
            ..Default::default()
        },
    );
    assert_eq!(matched.len(), 1);

    let mut out = Vec::new();
    reelquery::export::write_movies(&mut out, &matched, OutputFormat::Csv).expect("csv written");
    let csv = String::from_utf8(out).expect("utf-8");
    assert_eq!(csv.lines().collect::<Vec<_>>(), ["genre,genre_1", "Drama,Comedy"]);
}

#[test]
fn test_read_from_any_reader_with_custom_delimiter() {
    let data = "title;genre\nHeat;Crime, Drama\n";
    let dataset = read_movies(data.as_bytes(), b';').expect("semicolon data loads");
    assert_eq!(dataset.movies[0].title(), "Heat");
    assert_eq!(dataset.movies[0].genres().count(), 2);
}

#[test]
fn test_year_after_skips_unparseable_years() {
    let dataset = load_movies(&fixture("movies.csv")).expect("fixture loads");
    let criteria = FilterCriteria {
        year_after: Some(2000),
        ..Default::default()
    };
    let matched = filter_movies(&dataset.movies, &criteria);
    assert_eq!(
        titles(&matched),
        [
            "The Dark Knight",
            "Inception",
            "Hamilton",
            "Soorarai Pottru",
            "Drishyam",
            "Kis Uykusu"
        ]
    );
}

#[test]
fn test_string_and_gross_filters_on_fixture() {
    let dataset = load_movies(&fixture("movies.csv")).expect("fixture loads");

    let nolan = FilterCriteria {
        director: Some("Christopher Nolan".to_owned()),
        ..Default::default()
    };
    assert_eq!(filter_movies(&dataset.movies, &nolan).len(), 2);

    let ledger = FilterCriteria {
        actor: Some("Heath Ledger".to_owned()),
        ..Default::default()
    };
    assert_eq!(
        titles(&filter_movies(&dataset.movies, &ledger)),
        ["The Dark Knight"]
    );

    let blockbusters = FilterCriteria {
        gross_min: Some(134_966_411),
        ..Default::default()
    };
    assert_eq!(
        titles(&filter_movies(&dataset.movies, &blockbusters)),
        ["The Godfather", "The Dark Knight", "Inception", "Apollo 13"]
    );
}

#[test]
fn test_analytics_on_fixture() {
    let dataset = load_movies(&fixture("movies.csv")).expect("fixture loads");
    let everything = filter_movies(&dataset.movies, &FilterCriteria::default());

    assert_eq!(
        titles(&top_n(&everything, RankMetric::Gross, 3)),
        ["The Dark Knight", "Inception", "Apollo 13"]
    );

    assert_eq!(
        titles(&hidden_gems(&everything, &GemThresholds::default())),
        ["Drishyam", "Kis Uykusu"]
    );

    let nolan = FilterCriteria {
        director: Some("Christopher Nolan".to_owned()),
        ..Default::default()
    };
    let matched = filter_movies(&dataset.movies, &nolan);
    let insights = genre_insights(&matched);
    assert_eq!(
        insights.genres().collect::<Vec<_>>(),
        ["Action", "Crime", "Drama", "Adventure", "Sci-Fi"]
    );
    let action = insights.get("Action").expect("Action present");
    assert_eq!(action.movie_count, 2);
    assert!((action.avg_rating - 8.9).abs() < 1e-9);
    assert!((action.avg_runtime - 150.0).abs() < 1e-9);
}

#[test]
fn test_session_writes_csv_that_reloads() {
    let output = temp_path("drama.csv");
    let request = QueryRequest {
        input: fixture("movies.csv"),
        criteria: FilterCriteria {
            genre: Some("Drama".to_owned()),
            rating_above: Some(8.5),
            ..Default::default()
        },
        output: Some(output.clone()),
        format: OutputFormat::Csv,
        report: ReportRequest::default(),
        report_output: None,
    };

    let mut stdout = Vec::new();
    let summary = session::run(&request, &mut stdout).expect("run succeeds");
    assert_eq!(summary.loaded, 9);
    assert_eq!(summary.matched, 5);
    assert!(stdout.is_empty(), "Nothing should go to stdout");

    let reloaded = load_movies(&output).expect("written CSV reloads");
    assert_eq!(reloaded.len(), 5);
    assert_eq!(reloaded.headers[1], "series_title");
    assert_eq!(reloaded.movies[0].title(), "The Shawshank Redemption");
    assert_eq!(reloaded.movies[2].gross(), "534,858,444");

    let _ = std::fs::remove_file(output);
}

#[test]
fn test_session_prints_json_and_report_to_stdout() {
    let request = QueryRequest {
        input: fixture("movies.csv"),
        criteria: FilterCriteria {
            year_after: Some(2010),
            ..Default::default()
        },
        output: None,
        format: OutputFormat::Json,
        report: ReportRequest {
            top: Some((RankMetric::ImdbRating, 2)),
            genre_insights: false,
            hidden_gems: Some(GemThresholds::default()),
        },
        report_output: None,
    };

    let mut stdout = Vec::new();
    let summary = session::run(&request, &mut stdout).expect("run succeeds");
    assert_eq!(summary.matched, 4);

    let json: serde_json::Value =
        serde_json::from_slice(&stdout).expect("stdout is a single JSON document");
    assert_eq!(json["movies"].as_array().map(Vec::len), Some(4));
    assert_eq!(json["movies"][0]["series_title"], "Hamilton");
    assert_eq!(json["report"]["matched"], 4);
    assert_eq!(json["report"]["top"]["metric"], "imdb_rating");
    assert_eq!(json["report"]["top"]["entries"][0]["title"], "Hamilton");
    assert_eq!(json["report"]["hidden_gems"]["entries"][0]["title"], "Drishyam");
    assert_eq!(json["report"]["hidden_gems"]["entries"][0]["votes"], 30_722);
}

#[test]
fn test_session_prints_text_report_after_text_list() {
    let request = QueryRequest {
        input: fixture("movies.csv"),
        criteria: FilterCriteria {
            year_after: Some(2010),
            ..Default::default()
        },
        output: None,
        format: OutputFormat::Text,
        report: ReportRequest {
            top: Some((RankMetric::ImdbRating, 2)),
            genre_insights: false,
            hidden_gems: Some(GemThresholds::default()),
        },
        report_output: None,
    };

    let mut stdout = Vec::new();
    session::run(&request, &mut stdout).expect("run succeeds");
    let text = String::from_utf8(stdout).expect("utf-8 output");
    assert!(text.contains("series_title: Hamilton"));
    assert!(text.contains("Top 2 by imdb_rating"));
    assert!(text.contains(" 1. Hamilton (2020) - 8.6"));
    assert!(text.contains("- Drishyam (2013): rating 8.3, 30,722 votes"));
}

#[test]
fn test_session_writes_json_report_file() {
    let report_path = temp_path("report.json");
    let request = QueryRequest {
        input: fixture("movies.csv"),
        criteria: FilterCriteria::default(),
        output: Some(temp_path("all.txt")),
        format: OutputFormat::Text,
        report: ReportRequest {
            top: None,
            genre_insights: true,
            hidden_gems: None,
        },
        report_output: Some(report_path.clone()),
    };

    session::run(&request, std::io::sink()).expect("run succeeds");
    let body = std::fs::read_to_string(&report_path).expect("report written");
    let json: serde_json::Value = serde_json::from_str(&body).expect("report is JSON");
    assert_eq!(json["matched"], 9);
    assert_eq!(json["genre_insights"]["Drama"]["movie_count"], 8);

    let _ = std::fs::remove_file(report_path);
    let _ = std::fs::remove_file(temp_path("all.txt"));
}

#[test]
fn test_session_missing_input_runs_nothing() {
    let output = temp_path("never.csv");
    let request = QueryRequest {
        input: fixture("nope.csv"),
        criteria: FilterCriteria::default(),
        output: Some(output.clone()),
        format: OutputFormat::Csv,
        report: ReportRequest::default(),
        report_output: None,
    };
    assert!(session::run(&request, std::io::sink()).is_err());
    assert!(!output.exists());
}
