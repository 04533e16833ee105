mod commands;
mod render;
mod template;

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use repeatcal_core::config::GlobalConfig;
use repeatcal_core::event::parse_date;
use repeatcal_core::{Expander, RepeatType};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "repeatcal")]
#[command(about = "Preview and save recurring calendar events")]
struct Cli {
    /// Config file (defaults to ~/.config/repeatcal/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log expansion details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every event a template expands to
    Expand {
        /// Event template (.json or .toml)
        template: PathBuf,

        /// Print events as JSON
        #[arg(long)]
        json: bool,

        /// End date for repeat rules without one (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date_arg)]
        horizon: Option<NaiveDate>,
    },
    /// Show how many events a template would create
    Preview {
        template: PathBuf,

        #[arg(long, value_parser = parse_date_arg)]
        horizon: Option<NaiveDate>,
    },
    /// Expand a template and save the events to the event store
    Save {
        template: PathBuf,

        /// Event store file (defaults to store_path from config)
        #[arg(long)]
        store: Option<PathBuf>,

        #[arg(long, value_parser = parse_date_arg)]
        horizon: Option<NaiveDate>,
    },
    /// Delete every saved event of a series
    DeleteSeries {
        series_id: String,

        #[arg(long)]
        store: Option<PathBuf>,
    },
    /// Compute the next candidate date of a repeat rule
    Next {
        /// Current date (YYYY-MM-DD)
        #[arg(value_parser = parse_date_arg)]
        date: NaiveDate,

        /// none, daily, weekly, monthly or yearly
        #[arg(short, long)]
        repeat: RepeatType,

        #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
        interval: i32,

        /// First date of the series (defaults to DATE)
        #[arg(short, long, value_parser = parse_date_arg)]
        anchor: Option<NaiveDate>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => GlobalConfig::load_from(path),
        None => GlobalConfig::load(),
    }
    .context("Failed to load config")?;

    match cli.command {
        Commands::Expand {
            template,
            json,
            horizon,
        } => {
            let form = template::load(&template)?;
            commands::expand::run(&expander(&config, horizon), &form, json)
        }
        Commands::Preview { template, horizon } => {
            let form = template::load(&template)?;
            commands::preview::run(&expander(&config, horizon), &form)
        }
        Commands::Save {
            template,
            store,
            horizon,
        } => {
            let form = template::load(&template)?;
            let store = resolve_store(&config, store);
            commands::save::run(&expander(&config, horizon), &form, store)
        }
        Commands::DeleteSeries { series_id, store } => {
            let store = resolve_store(&config, store);
            commands::delete_series::run(&series_id, store)
        }
        Commands::Next {
            date,
            repeat,
            interval,
            anchor,
        } => commands::next::run(date, repeat, interval, anchor),
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Build an expander, preferring the --horizon flag over the config file.
fn expander(config: &GlobalConfig, horizon: Option<NaiveDate>) -> Expander {
    match horizon.or(config.horizon) {
        Some(horizon) => Expander::new().with_horizon(horizon),
        None => Expander::new(),
    }
}

fn resolve_store(config: &GlobalConfig, store: Option<PathBuf>) -> PathBuf {
    let path = store.unwrap_or_else(|| config.store_path());
    debug!(path = %path.display(), "using event store");
    path
}

fn parse_date_arg(s: &str) -> Result<NaiveDate, String> {
    parse_date(s).map_err(|e| e.to_string())
}
