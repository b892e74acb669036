//! Logger setup for the `reelquery` binary.
//!
//! Library code logs through the `log` facade; the binary installs
//! `env_logger` as the backend. The default level comes from settings and the
//! `-v` flag, and `RUST_LOG` always wins when set:
//!
//! ```bash
//! RUST_LOG=debug reelquery --input movies.csv --genre Drama
//! ```
//!
//! Log lines go to stderr so they never mix with exported data on stdout.

use log::LevelFilter;

/// Raises `base` by `verbosity` steps (`-v` → debug, `-vv` → trace).
pub fn effective_level(base: LevelFilter, verbosity: u8) -> LevelFilter {
    let levels = [
        LevelFilter::Off,
        LevelFilter::Error,
        LevelFilter::Warn,
        LevelFilter::Info,
        LevelFilter::Debug,
        LevelFilter::Trace,
    ];
    let start = levels.iter().position(|l| *l == base).unwrap_or(3);
    let raised = (start + usize::from(verbosity)).min(levels.len() - 1);
    levels.get(raised).copied().unwrap_or(LevelFilter::Trace)
}

/// Builds the `env_logger` backend with `default_level` unless `RUST_LOG` overrides it.
///
/// Calling this twice is harmless: the second logger is discarded.
pub fn init(default_level: LevelFilter) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(default_level)
        .format_timestamp_millis()
        .target(env_logger::Target::Stderr);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    if builder.try_init().is_ok() {
        log::debug!("Logging initialised at {default_level}");
    }
}
