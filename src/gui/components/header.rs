// src/gui/components/header.rs
//
// Team name + last-updated line, mirroring the page header regions.

use eframe::egui::{self, RichText};

use crate::config::consts::DEFAULT_TEAM_NAME;
use crate::gui::app::App;
use crate::render::page::ERROR_MESSAGE;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let team_name = app
        .snapshot
        .as_ref()
        .map(|s| s!(s.team_name()))
        .unwrap_or_else(|| s!(DEFAULT_TEAM_NAME));

    ui.heading(join!(&team_name, " Wrestling"));

    if app.fetch_failed {
        ui.label(RichText::new(ERROR_MESSAGE).color(egui::Color32::from_rgb(0xC6, 0x28, 0x28)));
    } else {
        ui.label(join!("Last updated: ", &app.last_updated));
    }
}
