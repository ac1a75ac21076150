mod app;
mod config;
mod data;
mod state;
mod ui;

use anyhow::Context;
use app::WindroseApp;
use config::AppConfig;
use eframe::egui;
use state::AppState;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = AppConfig::default();
    let dataset = data::loader::load_csv(&config.csv_path)
        .with_context(|| format!("loading {}", config.csv_path.display()))?;
    log::info!(
        "Loaded {} observations from {}",
        dataset.len(),
        config.csv_path.display()
    );

    let mut state = AppState::default();
    state.set_dataset(dataset)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1150.0, 880.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Wind Data Visualization",
        options,
        Box::new(|_cc| Ok(Box::new(WindroseApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))
}
