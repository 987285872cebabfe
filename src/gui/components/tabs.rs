// src/gui/components/tabs.rs
//
// Renders the section tabs and performs the switch itself: set the index,
// rebuild the display rows from the in-memory snapshot. Display is literal —
// there is no per-tab cache; rows come straight from the snapshot.

use eframe::egui;

use crate::gui::app::App;
use crate::render;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let sections = render::all();
        let cur = app.current_index();

        for (idx, section) in sections.iter().enumerate() {
            let selected = idx == cur;

            if ui.selectable_label(selected, section.title()).clicked() && !selected {
                let prev = app.current_section().kind();
                app.set_current_index(idx);
                logf!("UI: Tab switch {:?} → {:?}", prev, section.kind());

                app.rebuild_view();
            }
        }
    });
}
