// src/gui/actions/copy.rs
use eframe::egui;

use crate::gui::app::App;

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    if app.snapshot.is_none() && !app.fetch_failed {
        app.status("Nothing to copy (refresh first)");
        logd!("Copy: Clicked, but there's no snapshot yet");
        return;
    }

    let txt = super::current_page_html(app);
    logf!("Copy: page chars={}", txt.len());

    ui_ctx.copy_text(txt);
    app.status("Copied page to clipboard");
}
