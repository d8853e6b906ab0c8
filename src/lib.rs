pub mod app;
pub mod config;
pub mod error;
pub mod model;
pub mod quota;
pub mod scoring;
pub mod source;
pub mod timer;
pub mod ui;

pub use app::QuizApp;

use config::Settings;
use model::SourceKind;

/// Arranca la ventana. Con `pinned` la fuente queda fija.
pub fn run(title: &str, pinned: Option<SourceKind>) -> eframe::Result<()> {
    let settings = Settings::load();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([900.0, 720.0]),
        ..Default::default()
    };
    eframe::run_native(
        title,
        options,
        Box::new(move |cc| {
            let saved: QuizApp = cc
                .storage
                .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
                .unwrap_or_default();
            Ok(Box::new(QuizApp::restore(saved, settings, pinned)))
        }),
    )
}
