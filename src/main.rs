use std::path::PathBuf;

use clap::Parser;
use outlet_hours::{
    batch::{self, Outlet},
    config::Config,
    HoursError,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Turn scraped opening hours into per-day JSON records.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON file holding a list of {"name", "raw_operating_hours"} outlets
    #[arg(long, conflicts_with = "hours")]
    input: Option<PathBuf>,

    /// Outlet name used with --hours
    #[arg(long, default_value = "Outlet")]
    name: String,

    /// Raw hours text of a single outlet
    #[arg(long)]
    hours: Option<String>,

    /// Output file, standard output when absent
    #[arg(long)]
    output: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

impl Cli {
    fn into_config(self) -> Result<(Config, Option<Outlet>), HoursError> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };
        if self.input.is_some() {
            config.input = self.input;
        }
        if self.output.is_some() {
            config.output = self.output;
        }
        config.pretty |= self.pretty;
        let single = self
            .hours
            .map(|hours| Outlet::new(&self.name, Some(&hours)));
        Ok((config, single))
    }
}

async fn run(config: Config, single: Option<Outlet>) -> Result<(), HoursError> {
    let outlets = match (single, &config.input) {
        (Some(outlet), _) => vec![outlet],
        (None, Some(path)) => batch::load_outlets(path)?,
        (None, None) => {
            return Err(HoursError::Config(
                "Either --hours or an input file is required.".to_string(),
            ))
        }
    };
    info!(outlets = outlets.len(), "Processing operating hours");

    let report = batch::process_outlets(outlets).await?;
    info!(
        parsed = report.outlets_parsed,
        skipped = report.outlets_skipped,
        records = report.records.len(),
        dropped_lines = report.dropped_lines,
        ambiguous_lines = report.ambiguous_lines,
        "Finished processing operating hours"
    );
    batch::write_records(&report.records, config.output.as_deref(), config.pretty)
}

#[tokio::main]
async fn main() {
    let (config, single) = match Cli::parse().into_config() {
        Ok(data) => data,
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(2);
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(config, single).await {
        tracing::error!("{}", err);
        std::process::exit(1);
    }
}
