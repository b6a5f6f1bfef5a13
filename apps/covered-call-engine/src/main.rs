//! Covered Call Engine Binary
//!
//! Reads a JSON backup of positions and prints enriched metrics, a portfolio
//! summary or a roll analysis.
//!
//! # Usage
//!
//! ```bash
//! covered-call-engine --as-of 2025-01-16 positions --backup data/positions-backup.json
//! covered-call-engine summary
//! covered-call-engine roll --position 7 --new-expiration 2025-03-02 \
//!     --new-strike 460 --close-cost 1.50 --new-premium 3.20
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Log filter, overrides `observability.logging.level`

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use covered_call_engine::application::{
    AnalyzeRollUseCase, EnrichPositionsUseCase, RollProposalForm,
};
use covered_call_engine::domain::shared::{Clock, FixedClock, SystemClock};
use covered_call_engine::infrastructure::backup::{BackupInfo, read_backup_file};
use covered_call_engine::infrastructure::config::{Config, load_config};
use covered_call_engine::infrastructure::telemetry::init_tracing;
use covered_call_engine::metrics::{
    PortfolioSummary, format_currency, format_currency_whole, format_percent,
};
use covered_call_engine::Position;

#[derive(Parser)]
#[command(
    name = "covered-call-engine",
    about = "Covered-call metrics and roll recommendations"
)]
struct Cli {
    /// Path to the YAML config file. Defaults to ./covered-call.yaml if present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Reference date (YYYY-MM-DD) used as "today".
    #[arg(long, global = true)]
    as_of: Option<NaiveDate>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every position with derived metrics as JSON.
    Positions {
        /// Backup file. Defaults to `backup.path` from the config.
        #[arg(long)]
        backup: Option<PathBuf>,
    },
    /// Print portfolio totals.
    Summary {
        /// Backup file. Defaults to `backup.path` from the config.
        #[arg(long)]
        backup: Option<PathBuf>,
    },
    /// Print record counts of a backup file.
    Info {
        /// Backup file. Defaults to `backup.path` from the config.
        #[arg(long)]
        backup: Option<PathBuf>,
    },
    /// Analyze rolling an open position and print the result as JSON.
    Roll {
        /// Backup file. Defaults to `backup.path` from the config.
        #[arg(long)]
        backup: Option<PathBuf>,

        /// ID of the position to roll.
        #[arg(long)]
        position: String,

        /// New expiration date (YYYY-MM-DD).
        #[arg(long)]
        new_expiration: String,

        /// New strike.
        #[arg(long)]
        new_strike: f64,

        /// Per-share cost to buy back the current call.
        #[arg(long)]
        close_cost: f64,

        /// Per-share premium of the new call.
        #[arg(long)]
        new_premium: f64,

        /// Delta of the new call (0-1).
        #[arg(long)]
        new_delta: Option<f64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .as_deref()
        .map(|p| p.to_str().context("config path is not valid UTF-8"))
        .transpose()?;
    let config = load_config(config_path).context("failed to load configuration")?;
    init_tracing(&config.observability.logging);

    let today = match cli.as_of {
        Some(date) => date,
        None => config
            .clock
            .as_of_date()?
            .unwrap_or_else(|| SystemClock.today()),
    };
    let clock = Arc::new(FixedClock::new(today));
    tracing::debug!(%today, "Reference date");

    match cli.command {
        Commands::Positions { backup } => {
            let positions = load_positions(backup.as_deref(), &config)?;
            let enriched = EnrichPositionsUseCase::new(clock).execute(&positions);
            println!("{}", serde_json::to_string_pretty(&enriched)?);
        }
        Commands::Summary { backup } => {
            let positions = load_positions(backup.as_deref(), &config)?;
            let summary = EnrichPositionsUseCase::new(clock).summarize(&positions);
            print_summary(&summary);
        }
        Commands::Info { backup } => {
            let positions = load_positions(backup.as_deref(), &config)?;
            println!("{}", serde_json::to_string_pretty(&BackupInfo::of(&positions))?);
        }
        Commands::Roll {
            backup,
            position,
            new_expiration,
            new_strike,
            close_cost,
            new_premium,
            new_delta,
        } => {
            let positions = load_positions(backup.as_deref(), &config)?;
            let Some(target) = positions.iter().find(|p| p.id().as_str() == position) else {
                bail!("no position with id '{position}'");
            };
            let form = RollProposalForm {
                new_expiration_date: new_expiration,
                new_strike_price: new_strike,
                estimated_close_cost: close_cost,
                new_premium_per_contract: new_premium,
                new_delta,
            };
            let analysis = AnalyzeRollUseCase::new(clock).execute_form(target, &form)?;
            println!("{}", serde_json::to_string_pretty(&analysis)?);
        }
    }

    Ok(())
}

fn load_positions(backup: Option<&Path>, config: &Config) -> Result<Vec<Position>> {
    let path = backup.unwrap_or_else(|| Path::new(&config.backup.path));
    let report = read_backup_file(path)
        .with_context(|| format!("failed to read backup {}", path.display()))?;
    if report.skipped > 0 {
        tracing::warn!(
            skipped = report.skipped,
            total = report.total,
            "Some backup records were invalid"
        );
    }
    Ok(report.imported)
}

fn print_summary(summary: &PortfolioSummary) {
    if let Some(as_of) = summary.as_of {
        println!("As of:                  {as_of}");
    }
    println!("Open positions:         {}", summary.open_positions);
    println!("Closed positions:       {}", summary.closed_positions);
    println!(
        "Total premium (net):    {}",
        format_currency(summary.total_net_premium)
    );
    println!("Total P&L:              {}", format_currency(summary.total_pnl));
    println!(
        "Unrealized P&L:         {}",
        format_currency(summary.unrealized_pnl)
    );
    println!(
        "Realized P&L:           {}",
        format_currency(summary.realized_pnl)
    );
    println!(
        "Capital at risk:        {}",
        format_currency_whole(summary.capital_at_risk)
    );
    println!(
        "Avg annualized yield:   {}",
        format_percent(summary.average_annualized_yield)
    );
}
