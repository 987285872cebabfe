// src/gui/actions/refresh.rs
use crate::{fetch, gui::app::App, render::timestamp};

pub fn refresh(app: &mut App) {
    logf!("Refresh: Begin source={:?}", app.state.options.fetch.source);
    app.status("Fetching…");

    // → This is where the fetch happens ←
    match fetch::load(&app.state.options.fetch) {
        Ok(snap) => {
            logf!(
                "Refresh: OK roster={} schedule={} results={}",
                snap.roster.len(),
                snap.schedule.len(),
                snap.results.len()
            );

            app.last_updated =
                timestamp::format_last_updated(snap.metadata.last_updated.as_deref());
            app.snapshot = Some(snap);
            app.fetch_failed = false;

            app.rebuild_view();
            app.status("Ready");
        }
        Err(e) => {
            loge!("Refresh: Error: {}", e);

            // Uniform failure state: drop any stale snapshot entirely.
            app.snapshot = None;
            app.fetch_failed = true;
            app.last_updated = s!("Error loading data");

            app.rebuild_view();
            app.status(format!("Error: {e}"));
        }
    }
}
