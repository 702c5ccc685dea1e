//! `unred_stars`: unredden stars on the colour-colour plane.

use clap::Parser;
use log::{info, LevelFilter};
use std::io;
use std::path::PathBuf;
use unred::io::{read_reference_sequence, read_stars, write_json_file, write_report};
use unred::{Evaluator, SelectionMode};

#[derive(Parser, Debug)]
#[command(
    name = "unred_stars",
    version,
    disable_version_flag = true,
    about = "Unreddens stars on the colour-colour plane",
    long_about = None
)]
struct Args {
    /// Stars: id(int) x_color y_color err_x_color err_y_color
    list_with_stars: PathBuf,

    /// Unreddened sequence: x_color y_color, ordered by temperature
    unred_sequence: PathBuf,

    /// Slope of the reddening line, E(y_color)/E(x_color), e.g. E(U-B)/E(B-V) = 0.72
    #[arg(allow_negative_numbers = true)]
    red_slope: f64,

    /// A/E(x_color), e.g. Av/E(B-V) = 3.1
    #[arg(allow_negative_numbers = true)]
    r_param: f64,

    /// For each star print only the minimum value of extinction
    #[arg(long, conflicts_with = "max")]
    min: bool,

    /// For each star print only the maximum value of extinction
    #[arg(long)]
    max: bool,

    /// Also write the selected records as JSON
    #[arg(long, value_name = "PATH")]
    json: Option<PathBuf>,

    /// Verbose logging (--verbose info, repeated for debug)
    #[arg(long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print version
    #[arg(short = 'v', long, action = clap::ArgAction::Version)]
    version: Option<bool>,
}

fn main() {
    let args = Args::parse();
    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    if let Err(err) = run(&args) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), String> {
    let mode = SelectionMode::from_flags(args.min, args.max)
        .ok_or("--min and --max are mutually exclusive")?;

    let stars = read_stars(&args.list_with_stars).map_err(|e| e.to_string())?;
    let sequence = read_reference_sequence(&args.unred_sequence).map_err(|e| e.to_string())?;

    let evaluator = Evaluator::new(args.red_slope, args.r_param);
    let records = evaluator.run(&stars, &sequence, mode);
    info!(
        "{} stars, {} reference points, mode {:?}: {} records",
        stars.len(),
        sequence.len(),
        mode,
        records.len()
    );

    write_report(io::stdout().lock(), &records)
        .map_err(|e| format!("Failed to write report: {e}"))?;

    if let Some(path) = &args.json {
        write_json_file(path, &records)?;
        info!("JSON report written to {}", path.display());
    }

    Ok(())
}
