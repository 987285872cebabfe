// src/gui/actions/export.rs
use crate::{file, gui::app::App};

pub fn export(app: &mut App) {
    if app.snapshot.is_none() && !app.fetch_failed {
        app.status("Nothing to export (refresh first)");
        logd!("Export: Clicked, but there's no snapshot yet");
        return;
    }

    // normalize out_path first (mutates app) before rendering
    if app.out_path_dirty {
        app.state.options.export.set_path(&app.out_path_text);
        logf!(
            "Export: Out path set → {}",
            app.state.options.export.out_path().display()
        );
        app.out_path_dirty = false;
    }

    let html = super::current_page_html(app);
    logf!(
        "Export: Begin chars={} inline_styles={}",
        html.len(),
        app.state.options.export.inline_styles
    );

    match file::write_page(&app.state.options.export, &html) {
        Ok(path) => {
            logf!("Export: OK → {}", path.display());
            app.status(format!("Exported page: {}", path.display()));
        }
        Err(e) => {
            loge!("Export: Error: {}", e);
            app.status(format!("Export error: {e}"));
        }
    }
}
