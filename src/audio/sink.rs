//! Utilities for creating `rodio` sinks from track files.
//!
//! The helper here encapsulates opening/decoding a file and preparing a
//! paused `Sink`, optionally looping forever.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use rodio::{Decoder, OutputStream, Sink, Source};

use super::types::{EngineError, Repeat};

/// Check that `path` can be opened, without decoding it.
pub(super) fn ensure_readable(path: &Path) -> Result<(), EngineError> {
    File::open(path).map(drop).map_err(|source| EngineError::Open {
        path: path.to_path_buf(),
        source,
    })
}

/// Create a paused `Sink` playing `path` from the start.
pub(super) fn create_sink(
    stream: &OutputStream,
    path: &Path,
    repeat: Repeat,
) -> Result<Sink, EngineError> {
    let file = File::open(path).map_err(|source| EngineError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let source = Decoder::new(BufReader::new(file)).map_err(|e| EngineError::Decode {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let sink = Sink::connect_new(stream.mixer());
    sink.pause();
    match repeat {
        Repeat::Once => sink.append(source),
        Repeat::Forever => sink.append(source.repeat_infinite()),
    }
    Ok(sink)
}
