// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{copy,export,refresh}.

mod copy;    // src/gui/actions/copy.rs
mod export;  // src/gui/actions/export.rs
mod refresh; // src/gui/actions/refresh.rs

pub use copy::copy;
pub use export::export;
pub use refresh::refresh;

use crate::gui::app::App;
use crate::render::page;

/// Page HTML for the current app state: the rendered snapshot, or the
/// uniform error page after a failed fetch.
#[inline]
pub(super) fn current_page_html(app: &App) -> String {
    let inline = app.state.options.export.inline_styles;
    match &app.snapshot {
        Some(snap) => page::render_page(snap, inline),
        None => page::render_error_page(inline),
    }
}
