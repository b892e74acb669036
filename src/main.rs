//! # reelquery entry point
//!
//! ```text
//! main()
//!   │
//!   ├─> Parse CLI arguments (clap)
//!   ├─> Load settings (--config, else defaults)
//!   ├─> Initialise logging (settings level, -v, RUST_LOG)
//!   └─> cli::run: load → filter → export → report
//! ```
//!
//! ```bash
//! reelquery --input imdb_top_1000.csv --year-after 2000 --genre Drama \
//!     --top 5 --metric gross --genre-insights --hidden-gems
//! ```

#![warn(clippy::all, rust_2018_idioms)]

mod cli;

use anyhow::{Context as _, Result};
use clap::Parser as _;
use reelquery::config::Settings;
use reelquery::logging;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    let settings = Settings::load_or_default(cli.config.as_deref())
        .context("Failed to load settings")?;

    let base_level = settings
        .log_level
        .parse()
        .unwrap_or(log::LevelFilter::Info);
    logging::init(logging::effective_level(base_level, cli.verbose));

    cli::run(&cli, &settings)
}
