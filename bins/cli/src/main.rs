//! Blinkbank CLI
//!
//! Runs budget progress, summaries and insights over a JSON snapshot of
//! budgets and transactions exported from the document store.
//!
//! Usage: `blinkbank progress snapshot.json --now 2024-01-15`

mod commands;
mod snapshot;

use std::path::PathBuf;

use anyhow::Context;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use blinkbank_shared::AppConfig;
use blinkbank_shared::config::{LogFormat, LoggingConfig};
use blinkbank_shared::types::UserId;

use snapshot::Snapshot;

/// Budget progress and spending analytics over a snapshot file.
#[derive(Parser)]
#[command(name = "blinkbank")]
#[command(version)]
#[command(about = "Budget progress and spending analytics over a JSON snapshot", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Report spend-vs-limit progress for every budget in the snapshot
    Progress {
        /// Snapshot file with `budgets` and `transactions`
        snapshot: PathBuf,
        /// Evaluate as of this date (UTC midnight) instead of now
        #[arg(long)]
        now: Option<NaiveDate>,
        /// Only report budgets owned by this user
        #[arg(long)]
        user: Option<UserId>,
    },

    /// Totals, balance, category breakdown and savings rate for one user
    Summary {
        /// Snapshot file with `budgets` and `transactions`
        snapshot: PathBuf,
        /// User to summarise
        #[arg(long)]
        user: UserId,
    },

    /// Rule-based insights for one user
    Insights {
        /// Snapshot file with `budgets` and `transactions`
        snapshot: PathBuf,
        /// User to analyse
        #[arg(long)]
        user: UserId,
    },
}

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = AppConfig::load().context("Failed to load configuration")?;
    init_tracing(&config.logging);
    debug!(
        currency = %config.report.currency,
        savings_target = config.report.insight_savings_target,
        "Configuration loaded"
    );

    let now = Utc::now();
    let output = match cli.command {
        Command::Progress {
            snapshot,
            now: as_of,
            user,
        } => {
            let snapshot = Snapshot::load(&snapshot)?;
            let as_of = as_of.map_or(now, start_of_day);
            serde_json::to_value(commands::progress(&snapshot, as_of, user))?
        }
        Command::Summary { snapshot, user } => {
            let snapshot = Snapshot::load(&snapshot)?;
            serde_json::to_value(commands::summary(&snapshot, user, now, &config.report))?
        }
        Command::Insights { snapshot, user } => {
            let snapshot = Snapshot::load(&snapshot)?;
            serde_json::to_value(commands::insights(&snapshot, user, &config.report))?
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| logging.filter.as_str().into());
    let registry = tracing_subscriber::registry().with(filter);

    // stdout carries command output; logs go to stderr
    match logging.format {
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    #[test]
    fn test_now_flag_means_utc_midnight() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();

        let at = start_of_day(date);

        assert_eq!(at, Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap());
        assert_eq!(at.date_naive(), date);
        assert_eq!(at.num_seconds_from_midnight(), 0);
    }

    #[test]
    fn test_now_flag_parses_iso_date() {
        let cli = Cli::try_parse_from([
            "blinkbank",
            "progress",
            "snapshot.json",
            "--now",
            "2024-02-29",
        ])
        .unwrap();

        let Command::Progress { now, .. } = cli.command else {
            panic!("expected progress command");
        };
        assert_eq!(now, NaiveDate::from_ymd_opt(2024, 2, 29));
    }
}
