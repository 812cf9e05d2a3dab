//! StockSense desktop dashboard.

use std::error::Error;

use terminal::app::App;
use terminal::debug::{self, AppConfig};
use terminal::ui::StockSenseApp;
use terminal::utils::runtime;

const WINDOW_TITLE: &str = "StockSense";

fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::from_env();
    let _log_guard = debug::init_logger(&config);

    if let Err(e) = config.validate() {
        tracing::error!(error = %e, "Invalid configuration");
        return Err(e.into());
    }

    // Tasks spawned from the UI thread land on this runtime
    let rt = runtime::get()?;
    let _rt_guard = rt.enter();

    tracing::info!(api_url = %config.api_url, "Starting StockSense");
    let app = App::new(&config);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([1366.0, 768.0])
            .with_min_inner_size([960.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(StockSenseApp::new(cc, app)))),
    )?;

    tracing::info!("StockSense closed");
    Ok(())
}
