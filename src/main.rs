mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::Path;

use app::RacquetScoutApp;
use eframe::egui;
use state::AppState;

/// Dataset loaded once at startup; File → Open can replace it later.
const DATA_PATH: &str = "data/racquets.csv";

fn main() -> eframe::Result {
    env_logger::init();

    let mut state = AppState {
        loading: true,
        ..AppState::default()
    };
    match data::loader::load_csv(Path::new(DATA_PATH)) {
        Ok(dataset) => {
            log::info!("Loaded {} racquets from {DATA_PATH}", dataset.len());
            state.set_dataset(dataset);
        }
        Err(e) => {
            // Degrade to an empty working set; the UI stays usable.
            log::error!("Failed to load {DATA_PATH}: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
            state.loading = false;
        }
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 840.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Racquet Scout – Tennis Racquet Explorer",
        options,
        Box::new(move |cc| {
            // Install image loaders so egui can render the brand logos.
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(RacquetScoutApp::new(state)))
        }),
    )
}
