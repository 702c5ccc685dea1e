//! Config-driven extinction run.
//!
//! Usage: `unred_batch <config.json>` (see `unred::config` for the format).
//! Relative paths in the config are resolved against the config's directory.

use log::info;
use std::env;
use std::io;
use std::path::Path;
use unred::config::{self, BatchConfig};
use unred::io::{
    read_reference_sequence, read_stars, write_json_file, write_report, write_report_file,
};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn usage() -> String {
    "Usage: unred_batch <config.json>".to_string()
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = config::load_config(Path::new(&config_path))?;
    execute(&config)
}

fn execute(config: &BatchConfig) -> Result<(), String> {
    let stars = read_stars(&config.stars).map_err(|e| e.to_string())?;
    let sequence = read_reference_sequence(&config.sequence).map_err(|e| e.to_string())?;

    let records = config.evaluator.run(&stars, &sequence, config.mode);
    info!(
        "slope={} R={} mode={:?}: {} records for {} stars",
        config.evaluator.reddening_slope,
        config.evaluator.r_param,
        config.mode,
        records.len(),
        stars.len()
    );

    match &config.output.report {
        Some(path) => {
            write_report_file(path, &records)?;
            info!("Report written to {}", path.display());
        }
        None => write_report(io::stdout().lock(), &records)
            .map_err(|e| format!("Failed to write report: {e}"))?,
    }

    if let Some(path) = &config.output.json {
        write_json_file(path, &records)?;
        info!("JSON report written to {}", path.display());
    }

    Ok(())
}
