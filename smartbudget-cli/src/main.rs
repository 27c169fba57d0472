use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use smartbudget_core::categorize;
use smartbudget_finance::Session;
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{prelude::*, EnvFilter};

mod config;
mod fmt;
mod report;
mod state;
mod tui;

use crate::config::load_config;

#[derive(Parser, Debug)]
#[command(name = "smartbudget", version, about = "SmartBudget personal finance dashboard")]
struct Cli {
    /// Debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug, Clone)]
struct SourceArgs {
    /// Statement CSV to import
    #[arg(long, conflicts_with = "sample")]
    csv: Option<PathBuf>,

    /// Use generated demo data instead of a statement
    #[arg(long, default_value_t = false)]
    sample: bool,

    /// Reference date (YYYY-MM-DD); defaults to today in the configured timezone
    #[arg(long)]
    today: Option<NaiveDate>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Full-screen dashboard: health score, metrics, forecast and charts
    Dashboard {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Print the dashboard numbers as text or JSON
    Report {
        #[command(flatten)]
        source: SourceArgs,

        /// Emit pretty JSON instead of text
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Show the category each description would be assigned
    Categorize {
        #[arg(required = true)]
        descriptions: Vec<String>,
    },

    /// Manage ~/.smartbudget/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write the default config if none exists
    Init,
    /// Print the resolved config
    Show,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // The dashboard owns the terminal, so its logs go to a file
    let log_file = match &cli.command {
        Command::Dashboard { .. } => {
            let p = state::dashboard_log_path()?;
            Some(File::create(&p).with_context(|| format!("create {}", p.display()))?)
        }
        _ => None,
    };
    init_logging(cli.verbose, log_file);

    match cli.command {
        Command::Dashboard { source } => dashboard(source)?,
        Command::Report { source, json } => report(source, json)?,
        Command::Categorize { descriptions } => {
            for d in &descriptions {
                println!("{:<14} {}", categorize(d).label(), d);
            }
        }
        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => config::show_config()?,
        },
    }

    Ok(())
}

fn init_logging(verbose: bool, log_file: Option<File>) {
    // Priority: RUST_LOG env var > --verbose flag > default (warn)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    let registry = tracing_subscriber::registry().with(filter);
    match log_file {
        Some(file) => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init(),
        None => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .compact()
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}

fn dashboard(source: SourceArgs) -> Result<()> {
    let cfg = load_config()?;
    let now = cfg.resolve_today(source.today)?;

    if let Some(csv) = &source.csv {
        if !csv.exists() {
            bail!("CSV not found: {} (pass --csv <path>)", csv.display());
        }
    }

    tui::run_dashboard(tui::DashboardOptions {
        now,
        csv: source.csv,
        sample: source.sample,
        sample_opts: cfg.sample_options(),
        currency_symbol: cfg.general.currency_symbol.clone(),
    })
}

fn report(source: SourceArgs, json: bool) -> Result<()> {
    let cfg = load_config()?;
    let now = cfg.resolve_today(source.today)?;

    let mut session = Session::new();
    match (&source.csv, source.sample) {
        (Some(csv), _) => {
            let summary = session
                .import_file(csv)
                .with_context(|| format!("importing {}", csv.display()))?;
            if summary.dropped > 0 {
                eprintln!("Dropped {} malformed rows from {}", summary.dropped, csv.display());
            }
        }
        (None, true) => {
            session.load_sample(now, cfg.sample_options());
        }
        (None, false) => bail!("no data source: pass --csv <path> or --sample"),
    }

    let dash = session.dashboard(now);
    if json {
        println!("{}", serde_json::to_string_pretty(&dash)?);
    } else {
        print!(
            "{}",
            report::render_text(&dash, session.source(), &cfg.general.currency_symbol)
        );
    }
    Ok(())
}
