mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::Path;

use anyhow::{Context, Result};
use app::BrownstoneApp;
use eframe::egui;

/// The one dataset this dashboard explores, expected in the working
/// directory. Run the `generate_sample` binary to produce a synthetic one.
const DATASET_PATH: &str = "NY-House-Dataset.csv";

fn main() -> Result<()> {
    env_logger::init();

    // Load-time failures are the only fatal ones: no file, no app.
    let dataset = data::loader::load_csv(Path::new(DATASET_PATH))
        .with_context(|| format!("loading {DATASET_PATH}"))?;
    log::info!(
        "Loaded {} listings across {} boroughs from {} brokers",
        dataset.len(),
        dataset.boroughs.len(),
        dataset.brokers.len()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([700.0, 450.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Brownstone – NYC House Listings",
        options,
        Box::new(move |_cc| Ok(Box::new(BrownstoneApp::new(dataset)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))
}
