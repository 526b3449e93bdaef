use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Track {
    pub path: PathBuf,
    /// Resolved lazily the first time the track is loaded.
    pub duration: Option<Duration>,
}

impl Track {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            duration: None,
        }
    }

    /// File name shown in status messages.
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Ordered list of playable tracks found in one directory.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tracks: Vec<Track>,
}

impl Catalog {
    pub fn new(tracks: Vec<Track>) -> Self {
        Self { tracks }
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Track> {
        self.tracks.iter()
    }

    /// Return the duration of the track at `index`, calling `probe` only when
    /// it has not been resolved yet.
    pub fn resolve_duration(
        &mut self,
        index: usize,
        probe: impl FnOnce(&Path) -> Duration,
    ) -> Option<Duration> {
        let track = self.tracks.get_mut(index)?;
        if let Some(d) = track.duration {
            return Some(d);
        }
        let d = probe(&track.path);
        track.duration = Some(d);
        Some(d)
    }
}
