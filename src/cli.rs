use anyhow::{Context as _, Result};
use clap::{Args, Parser};
use reelquery::config::Settings;
use reelquery::export::OutputFormat;
use reelquery::insights::{RankMetric, ReportRequest};
use reelquery::query::FilterCriteria;
use reelquery::session::{self, QueryRequest};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "reelquery", about = "Filter a movie dataset and report on the matches")]
pub struct Cli {
    /// Path to the movie dataset (CSV with a header row)
    #[arg(long)]
    pub input: PathBuf,

    #[command(flatten)]
    pub filters: FilterArgs,

    /// Write the filtered movies here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format; inferred from the --output extension when omitted
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Report the top N movies (uses the settings default when no N is given)
    #[arg(long, value_name = "N", num_args = 0..=1)]
    pub top: Option<Option<usize>>,

    /// Metric for the top-N ranking
    #[arg(long, value_enum)]
    pub metric: Option<RankMetric>,

    /// Report average rating, gross and runtime per genre
    #[arg(long)]
    pub genre_insights: bool,

    /// Report highly rated movies with few votes
    #[arg(long)]
    pub hidden_gems: bool,

    /// Write the report here instead of stdout (a .json path writes JSON)
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// JSON settings file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Movie made after a given year
    #[arg(long)]
    pub year_after: Option<i64>,

    /// Movie made before a given year
    #[arg(long)]
    pub year_before: Option<i64>,

    /// Genre of movie
    #[arg(long)]
    pub genre: Option<String>,

    /// Movie with IMDb rating above a given value
    #[arg(long, allow_negative_numbers = true)]
    pub rating_above: Option<f64>,

    /// Movie with IMDb rating below a given value
    #[arg(long, allow_negative_numbers = true)]
    pub rating_below: Option<f64>,

    /// Director of movie
    #[arg(long)]
    pub director: Option<String>,

    /// One of the four billed stars
    #[arg(long)]
    pub actor: Option<String>,

    /// Movie longer in minutes than a given value
    #[arg(long)]
    pub runtime_more_than: Option<i64>,

    /// Movie shorter in minutes than a given value
    #[arg(long)]
    pub runtime_less_than: Option<i64>,

    /// Minimum gross revenue (inclusive)
    #[arg(long)]
    pub gross_min: Option<i64>,

    /// Maximum gross revenue (inclusive)
    #[arg(long)]
    pub gross_max: Option<i64>,
}

impl FilterArgs {
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            year_after: self.year_after,
            year_before: self.year_before,
            genre: self.genre.clone(),
            rating_above: self.rating_above,
            rating_below: self.rating_below,
            director: self.director.clone(),
            actor: self.actor.clone(),
            runtime_more_than: self.runtime_more_than,
            runtime_less_than: self.runtime_less_than,
            gross_min: self.gross_min,
            gross_max: self.gross_max,
        }
    }
}

impl Cli {
    /// Resolves flags against `settings`: flags win, settings fill the gaps.
    pub fn to_request(&self, settings: &Settings) -> QueryRequest {
        let format = self
            .format
            .or_else(|| self.output.as_deref().and_then(OutputFormat::from_path))
            .unwrap_or(settings.default_format);

        let top = self.top.map(|n| {
            (
                self.metric.unwrap_or(settings.top_metric),
                n.unwrap_or(settings.top_n),
            )
        });

        QueryRequest {
            input: self.input.clone(),
            criteria: self.filters.criteria(),
            output: self.output.clone(),
            format,
            report: ReportRequest {
                top,
                genre_insights: self.genre_insights,
                hidden_gems: self.hidden_gems.then_some(settings.gem_thresholds),
            },
            report_output: self.report.clone(),
        }
    }
}

pub fn run(cli: &Cli, settings: &Settings) -> Result<()> {
    let request = cli.to_request(settings);
    log::debug!("Resolved request: {request:?}");

    let summary = session::run(&request, std::io::stdout().lock())
        .with_context(|| format!("Query over {} failed", request.input.display()))?;
    log::info!(
        "Done: {} loaded, {} matched",
        summary.loaded,
        summary.matched
    );
    Ok(())
}
