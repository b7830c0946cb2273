//! Creating `rodio` sinks for a source path.
//!
//! Opening and decoding the file and preparing a paused `Sink` at the
//! requested start position.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink, Source};

use crate::error::PlayerError;

/// Open the default output device.
pub(super) fn open_output() -> Result<OutputStream, PlayerError> {
    let mut stream = OutputStreamBuilder::open_default_stream()
        .map_err(|e| PlayerError::Output(e.to_string()))?;
    // rodio logs to stderr when OutputStream is dropped; the TUI owns stderr.
    stream.log_on_drop(false);
    Ok(stream)
}

/// Create a paused `Sink` for `path` that starts playback at `start_at`.
pub(super) fn create_sink_at(
    stream: &OutputStream,
    path: &Path,
    start_at: Duration,
    volume: f32,
) -> Result<Sink, PlayerError> {
    let file = File::open(path).map_err(|source| PlayerError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let source = Decoder::new(BufReader::new(file))
        .map_err(|e| PlayerError::Decode {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?
        // `skip_duration` is the seeking primitive; Duration::ZERO is fine.
        .skip_duration(start_at);

    let sink = Sink::connect_new(stream.mixer());
    sink.set_volume(volume);
    sink.append(source);
    sink.pause();
    Ok(sink)
}
