use std::{io::Write, path::Path};

use serde::Deserialize;
use tracing::{info, warn};

use crate::{
    error::{HoursError, Result},
    parser::parser::{parse_hours_report, ParseReport},
    timing::daily::Daily,
};

/// One store-locator listing as handed over by the scraper.
#[derive(Deserialize, Debug, Clone)]
pub struct Outlet {
    pub name: String,
    #[serde(default)]
    pub raw_operating_hours: Option<String>,
}

impl Outlet {
    pub fn new(name: &str, raw_operating_hours: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            raw_operating_hours: raw_operating_hours.map(str::to_string),
        }
    }
}

/// All records of a batch, in the order the outlets were given.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub records: Vec<Daily>,
    pub outlets_parsed: usize,
    pub outlets_skipped: usize,
    pub dropped_lines: usize,
    pub ambiguous_lines: usize,
}

fn process_outlet(outlet: Outlet) -> Option<ParseReport> {
    let raw_hours = outlet
        .raw_operating_hours
        .as_deref()
        .map(str::trim)
        .filter(|raw| !raw.is_empty());
    let Some(raw_hours) = raw_hours else {
        warn!(outlet_name = %outlet.name, "Outlet has empty operating hours, skipping");
        return None;
    };

    let report = parse_hours_report(&outlet.name, raw_hours);
    info!(
        outlet_name = %outlet.name,
        records = report.records.len(),
        dropped = report.dropped_lines.len(),
        "Processed hour records"
    );
    Some(report)
}

/// Parses every outlet on the blocking pool.
///
/// Outlets are independent so they all run at once; results are collected
/// back in input order.
pub async fn process_outlets(outlets: Vec<Outlet>) -> Result<BatchReport> {
    let handles: Vec<_> = outlets
        .into_iter()
        .map(|outlet| tokio::task::spawn_blocking(move || process_outlet(outlet)))
        .collect();

    let mut batch = BatchReport::default();
    for handle in handles {
        let Some(report) = handle.await? else {
            batch.outlets_skipped += 1;
            continue;
        };
        batch.outlets_parsed += 1;
        batch.dropped_lines += report.dropped_lines.len();
        batch.ambiguous_lines += report.ambiguous_lines.len();
        batch.records.extend(report.records);
    }
    Ok(batch)
}

pub fn load_outlets(path: &Path) -> Result<Vec<Outlet>> {
    let data = std::fs::read_to_string(path)
        .map_err(|err| HoursError::io(path.display().to_string(), err))?;
    Ok(serde_json::from_str(&data)?)
}

/// Writes records as a JSON array to `output`, or standard output.
pub fn write_records(records: &[Daily], output: Option<&Path>, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(records)?
    } else {
        serde_json::to_string(records)?
    };
    match output {
        Some(path) => std::fs::write(path, json + "\n")
            .map_err(|err| HoursError::io(path.display().to_string(), err)),
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", json).map_err(|err| HoursError::io("<stdout>", err))
        }
    }
}
