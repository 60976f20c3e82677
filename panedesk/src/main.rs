//! panedesk — desk accessory demonstrating the pane window helpers
//!
//! Runs as a normal application, or as its own modal dialog program when
//! spawned by `FrameHost::modal` (the dialog result path is present in
//! the environment).

mod app;

use app::DeskApp;
use eframe::NativeOptions;
use panecore::frame::DialogSession;

fn main() -> eframe::Result<()> {
    let dialog = DialogSession::from_env();

    let size = dialog
        .as_ref()
        .and_then(|d| d.size())
        .unwrap_or(egui::vec2(520.0, 380.0));
    let title = if dialog.is_some() {
        "panedesk dialog"
    } else {
        "panedesk"
    };

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size(size)
        .with_title(title);
    let options = NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "panedesk",
        options,
        Box::new(move |cc| Box::new(DeskApp::new(cc, dialog))),
    )
}
