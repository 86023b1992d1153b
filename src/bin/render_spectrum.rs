use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;

use rusty_prism::config::SpectralConfig;
use rusty_prism::data::analysis::{analyze, SpectrumAnalysis};
use rusty_prism::data::export::{write_csv, write_json};
use rusty_prism::data::model::{Archetype, FilterKind};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Csv,
    Json,
}

/// Generate one synthetic spectrum, filter it and print it to stdout.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// emission, absorption or interferometric
    #[arg(long, default_value = "emission")]
    archetype: Archetype,

    /// kalman, gaussian, median or none
    #[arg(long, default_value = "kalman")]
    filter: FilterKind,

    /// Seed for the noise source (random if omitted).
    #[arg(long)]
    seed: Option<u64>,

    /// JSON file overriding generator / filter constants.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,

    /// Rescale raw and filtered traces to [0, 1].
    #[arg(long)]
    normalize: bool,

    /// Lower wavelength bound of the printed range, in nm.
    #[arg(long)]
    range_min: Option<f64>,

    /// Upper wavelength bound of the printed range, in nm.
    #[arg(long)]
    range_max: Option<f64>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let out = BufWriter::new(io::stdout().lock());
    render(&args, out)
}

/// Generate, filter, crop then normalise, as requested by `args`.
fn build_analysis(args: &Args) -> Result<SpectrumAnalysis> {
    let range = match (args.range_min, args.range_max) {
        (None, None) => None,
        (min, max) => {
            let min = min.unwrap_or(f64::NEG_INFINITY);
            let max = max.unwrap_or(f64::INFINITY);
            if min > max {
                bail!("--range-min ({min}) is above --range-max ({max})");
            }
            Some((min, max))
        }
    };

    let config = match &args.config {
        Some(path) => SpectralConfig::from_json_file(path)?,
        None => SpectralConfig::default(),
    };
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut analysis = analyze(args.archetype, args.filter, &config, &mut rng)?;

    if let Some((min, max)) = range {
        analysis = analysis.within_range(min, max);
        if analysis.raw.is_empty() {
            log::warn!("no samples between {min} and {max} nm");
        }
    }
    if args.normalize {
        analysis = analysis.normalized();
    }
    Ok(analysis)
}

fn render<W: Write>(args: &Args, out: W) -> Result<()> {
    let analysis = build_analysis(args)?;
    match args.format {
        OutputFormat::Csv => write_csv(&analysis, out),
        OutputFormat::Json => write_json(&analysis, out),
    }
}
