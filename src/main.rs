use clap::Parser;
use classrank::calc::roster_scores;
use classrank::config::Config;
use classrank::ranking::rank_scores;
use classrank::{checks, display, loaders, stats};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{Level, info};

#[derive(Parser)]
#[command(author, version, about)]
struct Options {
    /// Use FILE as configuration file instead of the defaults
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Write the ranking as CSV on the standard output
    #[arg(long)]
    csv: bool,
    /// Set verbosity level
    #[arg(short, action = clap::ArgAction::Count)]
    verbose: u8,
    /// Roster file
    roster: PathBuf,
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    let options = Options::parse();
    let level = match options.verbose {
        0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        3 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
    let config = match &options.config {
        Some(file_name) => Config::load(file_name)?,
        None => Config::default(),
    };
    let weights = config.weights();
    info!(?weights, tie_policy = ?config.tie_policy(), "configuration loaded");
    let students = loaders::load_roster(&options.roster)?;
    checks::ensure_unique_ids(&students)?;
    let warnings = checks::check_exam_bounds(&students)
        + checks::check_proactiveness_bounds(&students, weights.total_meetings);
    if warnings > 0 {
        info!(warnings, "roster contains out of range values");
    }
    let scores = roster_scores(&students, &weights);
    let ranking = rank_scores(&scores, config.tie_policy());
    info!(students = ranking.len(), "ranking computed");
    let rows = display::rows(&students, &scores, &ranking);
    if options.csv {
        display::write_csv(io::stdout().lock(), &rows)?;
    } else {
        let mut out = io::stdout().lock();
        display::display_ranking(&mut out, &rows)?;
        writeln!(out)?;
        display::display_stats(&mut out, &stats::class_statistics(&scores), &students)?;
    }
    Ok(())
}
