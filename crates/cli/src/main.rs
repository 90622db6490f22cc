//! boundq CLI - Command-line interface for the boundq queue

use anyhow::{Context, Result};
use boundq_sdk::{Offered, QueueClient, SdkError, ServiceStats};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tabled::{Table, Tabled};

const DEFAULT_URL: &str = "http://127.0.0.1:9527";

#[derive(Parser)]
#[command(name = "boundq")]
#[command(about = "boundq queue CLI", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Server URL
    #[arg(long, env = "BOUNDQ_URL", default_value = DEFAULT_URL)]
    url: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Offer a value (sent verbatim; the server validates it)
    Offer {
        /// Decimal integer
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Take the value at the head of the queue
    Poll,

    /// Show queue statistics
    Status,
}

#[derive(Tabled)]
struct StatsRow {
    capacity: usize,
    size: usize,
    accepted: u64,
    rejected_full: u64,
    delivered: u64,
    rejected_empty: u64,
    malformed: u64,
    other: u64,
    uptime_seconds: u64,
}

impl From<ServiceStats> for StatsRow {
    fn from(s: ServiceStats) -> Self {
        Self {
            capacity: s.capacity,
            size: s.size,
            accepted: s.accepted,
            rejected_full: s.rejected_full,
            delivered: s.delivered,
            rejected_empty: s.rejected_empty,
            malformed: s.malformed,
            other: s.other,
            uptime_seconds: s.uptime_seconds,
        }
    }
}

/// Print an offer result. Invalid input is an error so scripts see a
/// non-zero exit; a full queue is not.
fn report_offer(value: &str, result: boundq_sdk::Result<Offered>) -> Result<()> {
    match result {
        Ok(Offered::Accepted) => {
            println!("{}", format!("✓ {} accepted", value).green().bold());
            Ok(())
        }
        Ok(Offered::Full) => {
            println!("{}", "Queue full, try again later".yellow());
            Ok(())
        }
        Err(SdkError::Rejected { message, .. }) => {
            anyhow::bail!("Invalid value {:?}: {}", value, message)
        }
        Err(e) => Err(e).context("Failed to reach server"),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let client = QueueClient::new(&cli.url).context("Invalid server URL")?;

    match cli.command {
        Commands::Offer { value } => report_offer(&value, client.offer_raw(&value).await)?,

        Commands::Poll => match client.poll().await.context("Failed to reach server")? {
            Some(value) => println!("{}", value),
            None => println!("{}", "Queue empty, try again later".yellow()),
        },

        Commands::Status => {
            println!("{}", "Queue Status".cyan().bold());
            println!();

            match client.stats().await {
                Ok(stats) => {
                    println!("  {} {}", "URL:".bold(), cli.url);
                    println!("  {} {}", "Status:".bold(), "ONLINE".green());
                    println!();
                    println!("{}", Table::new(vec![StatsRow::from(stats)]));
                }
                Err(e) => {
                    println!("  {} {}", "Status:".bold(), "ERROR".red());
                    println!("  {} {}", "Error:".bold(), e);
                }
            }
        }
    }

    Ok(())
}
