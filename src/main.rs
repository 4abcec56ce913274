//! Checkers board GUI
//!
//! Select one of your pieces and move it to a highlighted square.

use checkers::ui::CheckersApp;
use checkers::GameConfig;

fn main() -> Result<(), eframe::Error> {
    // Log to stderr (run with RUST_LOG=debug for pick and move tracing)
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 680.0])
            .with_min_inner_size([600.0, 480.0])
            .with_title("Checkers"),
        ..Default::default()
    };

    eframe::run_native(
        "Checkers",
        options,
        Box::new(|cc| Ok(Box::new(CheckersApp::new(cc, GameConfig::default())?))),
    )
}
