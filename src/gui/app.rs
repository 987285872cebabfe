// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::state::AppState,
    render::{self, Section},
    snapshot::TeamSnapshot,
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Shawnee Wrestling",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // current in-memory snapshot; replaced wholesale by Refresh
    pub snapshot: Option<TeamSnapshot>,
    pub fetch_failed: bool,
    pub last_updated: String,

    // display rows for the CURRENT section
    pub rows: Vec<Vec<String>>,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    pub status: Arc<Mutex<String>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let out_path_text = state.options.export.out_path().to_string_lossy().into();

        logf!("Init: sections={}, default section={:?}",
            render::all().len(),
            render::all()[0].kind()
        );

        Self {
            state,
            snapshot: None,
            fetch_failed: false,
            last_updated: s!("Not fetched yet"),
            rows: Vec::new(),
            out_path_text,
            out_path_dirty: false,
            status: Arc::new(Mutex::new(s!("Idle"))),
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize { self.state.gui.current_section_index }

    #[inline]
    pub fn set_current_index(&mut self, idx: usize) { self.state.gui.current_section_index = idx; }

    #[inline]
    pub fn current_section(&self) -> &'static dyn Section { render::all()[self.current_index()] }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        *self.status.lock().unwrap() = msg.into();
    }

    /// Rebuild display rows for the current section from the snapshot.
    pub fn rebuild_view(&mut self) {
        let section = self.current_section();
        self.rows = match &self.snapshot {
            Some(snap) => section.rows(snap),
            None => Vec::new(),
        };
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        eframe::egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::header::draw(ui, self);

            ui.separator();

            crate::gui::components::tabs::draw(ui, self);

            ui.separator();

            crate::gui::components::export_bar::draw(ui, self);

            ui.separator();

            crate::gui::components::data_table::draw(ui, self);
        });
    }
}
