mod app;
mod color;
mod data;
mod state;
mod ui;

use app::InsightHubApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    // The dataset is loaded exactly once, before the render loop starts.
    // A missing or malformed file is fatal; there is no recovery path.
    let dataset = match data::loader::load_default() {
        Ok(ds) => ds.clone(),
        Err(e) => {
            log::error!("Failed to load dataset: {e:#}");
            eprintln!("Error: {e:#}");
            std::process::exit(1);
        }
    };
    log::info!(
        "Loaded {} companies across {} industries",
        dataset.len(),
        dataset.industries.len()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Insight Hub – Company Review Explorer",
        options,
        Box::new(|_cc| Ok(Box::new(InsightHubApp::new(dataset)))),
    )
}
