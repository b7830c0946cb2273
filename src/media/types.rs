//! Audio-related small types and handles.
//!
//! Commands sent to the audio thread, notifications it emits, and the shared
//! position the element reads back.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Debug)]
pub(super) enum AudioCmd {
    /// Open a new source; `path` is `None` when the locator is not a local
    /// file. Events about it carry `generation`.
    Load {
        path: Option<PathBuf>,
        generation: u64,
    },
    Play,
    Pause,
    /// Jump to an absolute position.
    SeekTo(Duration),
    SetVolume(f32),
    Quit,
}

/// Notifications emitted by a playback primitive.
///
/// Every event is stamped with the generation of the source it describes, so
/// events still queued when the source changes can be recognised as stale.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaEvent {
    /// Periodic progress while playing.
    TimeUpdate {
        generation: u64,
        current_time: f64,
        duration: Option<f64>,
    },
    /// Metadata for the current source resolved.
    LoadedMetadata {
        generation: u64,
        duration: Option<f64>,
    },
    /// The current source played to its natural end.
    Ended { generation: u64 },
}

impl MediaEvent {
    pub fn generation(&self) -> u64 {
        match *self {
            MediaEvent::TimeUpdate { generation, .. }
            | MediaEvent::LoadedMetadata { generation, .. }
            | MediaEvent::Ended { generation } => generation,
        }
    }
}

/// Position and length published by the audio thread.
#[derive(Debug, Clone, Default)]
pub(super) struct PlaybackInfo {
    /// Elapsed playback time for the current source.
    pub elapsed: Duration,
    /// Source length once known.
    pub duration: Option<Duration>,
}

pub(super) type PlaybackHandle = Arc<Mutex<PlaybackInfo>>;
