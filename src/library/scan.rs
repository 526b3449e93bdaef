use std::path::{Path, PathBuf};
use std::time::Duration;

use lofty::prelude::AudioFile;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::config::LibrarySettings;

use super::model::{Catalog, Track};

fn normalized_extensions(settings: &LibrarySettings) -> Vec<String> {
    let mut exts: Vec<String> = Vec::new();
    for e in &settings.extensions {
        let e = e.trim().trim_start_matches('.').to_ascii_lowercase();
        if !e.is_empty() && !exts.contains(&e) {
            exts.push(e);
        }
    }
    exts
}

fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| ext.to_ascii_lowercase())
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// Enumerate the playable files directly inside `dir`.
///
/// Files are grouped by extension in the order given by `settings.extensions`,
/// and sorted by file name inside each group. Subdirectories are not visited.
/// An unreadable directory yields an empty catalog.
pub fn scan(dir: &Path, settings: &LibrarySettings) -> Catalog {
    let exts = normalized_extensions(settings);
    let mut groups: Vec<Vec<PathBuf>> = vec![Vec::new(); exts.len()];

    let walker = WalkDir::new(dir)
        .follow_links(settings.follow_links)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();

    for entry in walker.into_iter() {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                warn!(dir = %dir.display(), error = %err, "skipping unreadable entry");
                continue;
            }
        };
        let path = entry.path();
        if !path.is_file() || (!settings.include_hidden && is_hidden(path)) {
            continue;
        }
        let Some(ext) = extension_of(path) else {
            continue;
        };
        if let Some(group) = exts.iter().position(|e| *e == ext) {
            groups[group].push(path.to_path_buf());
        }
    }

    let tracks: Vec<Track> = groups.into_iter().flatten().map(Track::new).collect();
    info!(dir = %dir.display(), count = tracks.len(), "scanned music directory");
    Catalog::new(tracks)
}

/// Read the playback length of `path` from its container header.
pub fn probe_duration(path: &Path) -> Option<Duration> {
    match lofty::read_from_path(path) {
        Ok(tagged) => Some(tagged.properties().duration()),
        Err(err) => {
            debug!(path = %path.display(), error = %err, "duration probe failed");
            None
        }
    }
}
