use std::{path::PathBuf, process::ExitCode};

use anyhow::Context;
use chrono::{Local, NaiveDate};
use clap::{Parser, ValueEnum};
use tracing::{debug, info, warn};

use solar_cli::{
    csv_loader, edition_config,
    logging::{self, LogOptions},
    report::Report,
    sample,
};
use solar_core::{CustomerType, ValidationMode};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Solar proposal calculator.
///
/// Reads customer rows from a CSV file (or the built-in sample form), checks
/// them, and prints the generation, savings and pricing figures of each
/// proposal.
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    /// CSV file of customer rows, headed by the form's field names.
    #[arg(long, required_unless_present = "sample", conflicts_with = "sample")]
    input: Option<PathBuf>,

    /// Render the pre-filled "add new customer" form instead of a CSV file.
    #[arg(long)]
    sample: bool,

    /// Customer type used by `--sample`.
    #[arg(long, value_enum, default_value_t = CustomerTypeArg::Residential)]
    customer_type: CustomerTypeArg,

    /// Edition preset name (`proposal-document`, `roi-calculator`,
    /// `quick-quote`) or a path to an edition TOML file.
    #[arg(long, default_value = "proposal-document")]
    edition: String,

    /// How strictly the rows are checked.
    #[arg(long, value_enum, default_value_t = ModeArg::NewCustomer)]
    mode: ModeArg,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Proposal date (YYYY-MM-DD). Defaults to today.
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Log level or EnvFilter directive. Overrides `RUST_LOG`.
    #[arg(long)]
    log_level: Option<String>,

    /// Also append logs to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    NewCustomer,
    StoredRender,
}

impl From<ModeArg> for ValidationMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::NewCustomer => ValidationMode::NewCustomer,
            ModeArg::StoredRender => ValidationMode::StoredRender,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CustomerTypeArg {
    Residential,
    Commercial,
}

impl From<CustomerTypeArg> for CustomerType {
    fn from(value: CustomerTypeArg) -> Self {
        match value {
            CustomerTypeArg::Residential => CustomerType::Residential,
            CustomerTypeArg::Commercial => CustomerType::Commercial,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    logging::init_logging(&LogOptions {
        level: cli.log_level.clone(),
        file: cli.log_file.clone(),
    })?;

    let edition = edition_config::resolve_edition(&cli.edition)?;

    let rows = match &cli.input {
        Some(path) => {
            debug!(path = %path.display(), "loading proposal rows");
            csv_loader::load_from_file(path)?
        }
        None => vec![sample::sample_fields(cli.customer_type.into())],
    };
    info!(rows = rows.len(), "loaded proposal rows");

    let date = cli.date.unwrap_or_else(|| Local::now().date_naive());
    let report = Report::build(&rows, &edition, cli.mode.into(), date);

    match cli.format {
        OutputFormat::Text => print!("{report}"),
        OutputFormat::Json => {
            println!("{}", report.to_json().context("failed to serialize report")?)
        }
    }

    let rejected = report.rejected();
    if rejected > 0 {
        warn!(rejected, total = report.rows.len(), "some rows were rejected");
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
