// src/fetch.rs
//
// One snapshot fetch per load: GET (or local read) → serde_json → TeamSnapshot.
// Any transport, status or decode failure collapses into FetchError; callers
// turn that into the uniform error state.

use std::fs;
use std::path::Path;
use std::time::Instant;

use crate::config::consts::DATA_PATH;
use crate::config::options::{FetchOptions, SnapshotSource};
use crate::core::net;
use crate::snapshot::TeamSnapshot;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("snapshot fetch failed: {0}")]
    Transport(String),

    #[error("snapshot read failed: {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("snapshot not decodable: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Fetch and decode the current snapshot.
pub fn load(opts: &FetchOptions) -> Result<TeamSnapshot, FetchError> {
    let body = match &opts.source {
        SnapshotSource::Remote => {
            let path = request_path(opts.cache_bust);
            let t = Instant::now();
            let body = net::http_get(&opts.host, &path)
                .map_err(|e| FetchError::Transport(e.to_string()))?;
            logd!("Fetch: GET {}{} in {:?}", opts.host, path, t.elapsed());
            body
        }
        SnapshotSource::LocalFile(p) => read_local(p)?,
    };

    let snap: TeamSnapshot = serde_json::from_str(&body)?;
    logf!(
        "Fetch: snapshot ok (roster={}, schedule={}, results={})",
        snap.roster.len(),
        snap.schedule.len(),
        snap.results.len()
    );
    Ok(snap)
}

/// Data path, with the same cache-busting query the site page uses.
fn request_path(cache_bust: bool) -> String {
    if cache_bust {
        join!(DATA_PATH, "?v=", &chrono::Utc::now().timestamp().to_string())
    } else {
        s!(DATA_PATH)
    }
}

fn read_local(path: &Path) -> Result<String, FetchError> {
    fs::read_to_string(path).map_err(|e| FetchError::Read {
        path: path.display().to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_path_carries_cache_buster() {
        let p = request_path(true);
        assert!(p.starts_with("/data/wrestling_data.json?v="));
        assert!(p["/data/wrestling_data.json?v=".len()..].chars().all(|c| c.is_ascii_digit()));

        assert_eq!(request_path(false), "/data/wrestling_data.json");
    }

    #[test]
    fn local_file_roundtrip() {
        let mut path = std::env::temp_dir();
        path.push("mat_page_fetch_roundtrip.json");
        fs::write(&path, r#"{"roster":[{"name":"A","weight_class":"106","grade":"9"}]}"#).unwrap();

        let opts = FetchOptions {
            source: SnapshotSource::LocalFile(path.clone()),
            ..FetchOptions::default()
        };
        let snap = load(&opts).unwrap();
        assert_eq!(snap.roster.len(), 1);
        assert_eq!(snap.roster[0].name, "A");

        let _ = fs::remove_file(path);
    }

    #[test]
    fn malformed_body_is_a_parse_error() {
        let mut path = std::env::temp_dir();
        path.push("mat_page_fetch_malformed.json");
        fs::write(&path, "<html>not json</html>").unwrap();

        let opts = FetchOptions {
            source: SnapshotSource::LocalFile(path.clone()),
            ..FetchOptions::default()
        };
        match load(&opts) {
            Err(FetchError::Parse(_)) => {}
            other => panic!("expected parse error, got {:?}", other.map(|_| ())),
        }

        let _ = fs::remove_file(path);
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let opts = FetchOptions {
            source: SnapshotSource::LocalFile(std::path::PathBuf::from("definitely/not/here.json")),
            ..FetchOptions::default()
        };
        assert!(matches!(load(&opts), Err(FetchError::Read { .. })));
    }
}
