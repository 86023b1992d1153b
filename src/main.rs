mod app;
mod color;
mod state;
mod ui;

use std::path::PathBuf;

use app::RustyPrismApp;
use clap::Parser;
use eframe::egui;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rusty_prism::config::SpectralConfig;
use state::AppState;

/// Interactive viewer for synthetic spectra and smoothing filters.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// JSON file overriding generator / filter constants.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Fixed seed for the noise source (random if omitted).
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => SpectralConfig::from_json_file(path)?,
        None => SpectralConfig::default(),
    };
    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut state = AppState::with_rng(config, rng);
    state.seed = args.seed.unwrap_or_default();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Rusty Prism – Spectral Filters",
        options,
        Box::new(move |_cc| Ok(Box::new(RustyPrismApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("viewer failed: {e}"))
}
