// src/gui/components/data_table.rs
//
// Draws the current section's table. Purely a view over App.rows; the rows
// come from the same Section impl the HTML renderer uses.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::config::options::SectionKind;
use crate::gui::app::App;
use crate::render::page::ERROR_MESSAGE;
use crate::snapshot::Outcome;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let section = app.current_section();

    // Roster can hide its Record column (always the last one).
    let hide_last =
        section.kind() == SectionKind::Roster && !app.state.gui.roster_show_record;
    let cols = section.headers().len() - usize::from(hide_last);

    let widths: Vec<f32> = section
        .preferred_column_widths()
        .map(|ws| ws.iter().map(|&w| w as f32).collect())
        .unwrap_or_else(|| vec![120.0; cols]);

    let strong_col = section.strong_col();
    let result_col = section.result_col();
    let avail_h = ui.available_height();
    let rows = &app.rows;
    // Empty table collapses to its header so the placeholder text stays visible
    let reserve_h = if rows.is_empty() { 0.0 } else { avail_h };

    egui::ScrollArea::new([true, false])
        .id_salt("section_table_hscroll")
        .min_scrolled_height(reserve_h)
        .max_height(avail_h)
        .show(ui, |ui| {
            let mut table = TableBuilder::new(ui)
                .striped(true)
                .min_scrolled_height(0.0)
                .id_salt((section.anchor(), cols));
            for ci in 0..cols {
                let w = widths.get(ci).copied().unwrap_or(120.0);
                table = table.column(Column::initial(w).resizable(true).clip(true).at_least(20.0));
            }

            table
                .header(24.0, |mut header| {
                    for ci in 0..cols {
                        header.col(|ui| {
                            ui.scope(|ui| {
                                ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                                ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                                    ui.add(
                                        egui::Label::new(
                                            RichText::new(section.headers()[ci]).strong(),
                                        )
                                        .selectable(false),
                                    );
                                });
                            });
                        });
                    }
                })
                .body(|body| {
                    body.rows(20.0, rows.len(), |mut row| {
                        let row_idx = row.index();
                        for ci in 0..cols {
                            let cell = rows
                                .get(row_idx)
                                .and_then(|r| r.get(ci))
                                .map(|c| c.as_str())
                                .unwrap_or("");
                            row.col(|ui| {
                                ui.scope(|ui| {
                                    ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                                    let mut rt = RichText::new(cell);
                                    if strong_col == Some(ci) {
                                        rt = rt.strong();
                                    }
                                    if result_col == Some(ci) {
                                        rt = rt.color(outcome_color(Outcome::classify(Some(cell))));
                                    }
                                    ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                                        ui.label(rt);
                                    });
                                });
                            });
                        }
                    });
                });
        });

    if app.rows.is_empty() {
        let msg = if app.fetch_failed {
            ERROR_MESSAGE
        } else if app.snapshot.is_none() {
            "No snapshot loaded. Hit REFRESH."
        } else {
            section.empty_message()
        };
        ui.add_space(8.0);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(msg).italics());
        });
    }
}

// Colors matched to the page stylesheet (site.css result classes)
fn outcome_color(outcome: Outcome) -> egui::Color32 {
    match outcome {
        Outcome::Win => egui::Color32::from_rgb(0x2E, 0x7D, 0x32),
        Outcome::Loss => egui::Color32::from_rgb(0xC6, 0x28, 0x28),
        Outcome::Pending => egui::Color32::from_rgb(0x75, 0x75, 0x75),
    }
}
