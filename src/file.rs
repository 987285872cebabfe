// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::options::ExportOptions;
use crate::render::page::STYLESHEET;

/// Write the rendered page according to ExportOptions. When styles are
/// linked rather than inlined, site.css lands next to the page.
/// Returns the page path written to.
pub fn write_page(
    export: &ExportOptions,
    html: &str,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let path = export.out_path();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    fs::write(&path, html)?;

    if !export.inline_styles {
        fs::write(export.stylesheet_path(), STYLESHEET)?;
    }

    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}

/// Interpret a user-supplied `-o` value: an existing directory (or a
/// trailing-separator hint) keeps the default page filename inside it;
/// anything else names the page file itself.
pub fn apply_out_path(export: &mut ExportOptions, user_out: &Path) {
    if user_out.is_dir() || looks_like_dir_hint(user_out) {
        export.set_dir(user_out);
    } else {
        export.set_path(&user_out.to_string_lossy());
    }
}
