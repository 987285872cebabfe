// src/config/options.rs
use std::ffi::OsString;
use std::path::{ Path, PathBuf };
use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub fetch: FetchOptions,
    pub export: ExportOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            fetch: FetchOptions::default(),
            export: ExportOptions::default(),
        }
    }
}

/// One table of the team page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Roster,
    Schedule,
    Results,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SnapshotSource {
    /// GET the published snapshot from the team site.
    Remote,
    /// Read a snapshot JSON from disk (testing, or a pre-downloaded copy).
    LocalFile(PathBuf),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    pub source: SnapshotSource,
    pub host: String,
    /// Append `?v=<unix-seconds>` so intermediaries never serve a stale snapshot.
    pub cache_bust: bool,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            source: SnapshotSource::Remote,
            host: s!(HOST),
            cache_bust: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    out_path: OutputPath,
    /// Embed the stylesheet in the page vs. referencing site.css next to it.
    pub inline_styles: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            out_path: OutputPath::default(),
            inline_styles: true,
        }
    }
}

impl ExportOptions {
    /// Full path of the page file. The extension is always ours.
    pub fn out_path(&self) -> PathBuf {
        let mut path = self.out_path.dir.clone();
        let stem = self.out_path.file_stem.to_string_lossy();
        path.push(join!(stem, ".", PAGE_EXT));
        path
    }

    /// Sibling path for the stylesheet when styles are linked.
    pub fn stylesheet_path(&self) -> PathBuf {
        self.out_path.dir.join(STYLESHEET_FILENAME)
    }

    /// Parse user text into dir + stem. Ignores pasted extension; we always emit .html.
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        let p = Path::new(s);
        if let Some(parent) = p.parent() {
            self.out_path.dir = parent.to_path_buf();
        }
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
        }
    }

    /// Point output at a directory, keeping the default page filename.
    pub fn set_dir(&mut self, dir: &Path) {
        self.out_path.dir = dir.to_path_buf();
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_PAGE_STEM),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_path_defaults_to_out_index_html() {
        let export = ExportOptions::default();
        assert_eq!(export.out_path(), PathBuf::from("out").join("index.html"));
    }

    #[test]
    fn set_path_keeps_stem_and_forces_html() {
        let mut export = ExportOptions::default();
        export.set_path("site/wrestling.htm");
        assert_eq!(export.out_path(), PathBuf::from("site").join("wrestling.html"));
        assert_eq!(export.stylesheet_path(), PathBuf::from("site").join("site.css"));
    }

    #[test]
    fn set_dir_keeps_default_filename() {
        let mut export = ExportOptions::default();
        export.set_dir(Path::new("public"));
        assert_eq!(export.out_path(), PathBuf::from("public").join("index.html"));
    }
}
