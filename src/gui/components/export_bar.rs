// src/gui/components/export_bar.rs

use eframe::egui;

use crate::config::options::SectionKind;
use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let kind = app.current_section().kind();

    // --- Toggles + Output field ---
    ui.horizontal(|ui| {
        let export = &mut app.state.options.export;
        let before = export.inline_styles;
        ui.checkbox(&mut export.inline_styles, "Inline styles");
        if export.inline_styles != before {
            logf!("UI: inline_styles → {}", export.inline_styles);
        }

        // Section-specific toggle
        if kind == SectionKind::Roster {
            let before = app.state.gui.roster_show_record;
            ui.checkbox(&mut app.state.gui.roster_show_record, "Show record column");
            if app.state.gui.roster_show_record != before {
                logf!("UI: roster_show_record → {}", app.state.gui.roster_show_record);
            }
        }

        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_path_text)
                .font(egui::TextStyle::Monospace))
            .changed()
        {
            app.out_path_dirty = true;
            logd!("UI: out_path_text changed (dirty=true) → {}", app.out_path_text);
        }
    });

    // --- Actions (Copy / Export / REFRESH) ---
    ui.horizontal(|ui| {
        if ui.button("Copy").clicked() {
            actions::copy(app, ui.ctx());
        }

        if ui.button("Export").clicked() {
            actions::export(app);
        }

        let red = egui::Color32::from_rgb(220, 30, 30);
        let black = egui::Color32::BLACK;
        if ui
            .add(
                egui::Button::new(egui::RichText::new("REFRESH").color(black).strong())
                    .fill(red),
            )
            .clicked()
        {
            actions::refresh(app);
        }

        let status = app.status.lock().unwrap().clone();
        ui.label(format!("Status: {status}"));
    });
}
