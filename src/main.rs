use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use salary_stats::api::{AppState, create_router};
use salary_stats::calculation::run_payroll;
use salary_stats::config::ConfigLoader;
use salary_stats::data::{DEFAULT_ROSTER_PATH, RosterLoader};
use salary_stats::report::{export_csv, write_global_statistics, write_statistics};

#[derive(Parser, Debug)]
#[command(name = "salary-stats", version, about = "Monthly salary statistics per subsidiary")]
struct Cli {
    /// Payroll configuration file (YAML); standard rules when omitted
    #[arg(short, long, global = true, env = "SALARY_STATS_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute statistics for a roster and print them
    Report {
        /// Employee roster (JSON)
        #[arg(short, long, default_value = DEFAULT_ROSTER_PATH)]
        data: PathBuf,

        /// Also write the CSV export to this path
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Write the CSV export to the configured default path
        #[arg(long, conflicts_with = "csv")]
        export: bool,

        /// Print the full report as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Serve the HTTP API
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1:3000")]
        addr: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ConfigLoader::load(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => ConfigLoader::default(),
    };

    match cli.command {
        Command::Report {
            data,
            csv,
            export,
            json,
        } => {
            let roster = RosterLoader::load(&data)
                .with_context(|| format!("loading employee data from {}", data.display()))?;
            let report = run_payroll(&roster, config.rules())?;
            let currency = &config.output().currency_symbol;

            let stdout = io::stdout();
            let mut out = stdout.lock();
            if json {
                serde_json::to_writer_pretty(&mut out, &report)?;
                writeln!(out)?;
            } else {
                write_statistics(&mut out, &report.subsidiary_statistics, currency)?;
                write_global_statistics(&mut out, &report.global_statistics, currency)?;
                for warning in &report.warnings {
                    writeln!(out, "warning: {}", warning.message())?;
                }
            }
            out.flush()?;

            let csv_path = csv.or_else(|| export.then(|| PathBuf::from(&config.output().csv_path)));
            if let Some(path) = csv_path {
                export_csv(&path, &report.subsidiary_statistics, currency)?;
            }
        }
        Command::Serve { addr } => serve(config, &addr)?,
    }

    Ok(())
}

#[tokio::main]
async fn serve(config: ConfigLoader, addr: &str) -> Result<()> {
    let router = create_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {}", addr))?;

    info!(addr = %addr, "Salary statistics API listening");
    axum::serve(listener, router).await?;
    Ok(())
}
