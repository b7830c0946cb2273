//! Playback controller and playlist renderer.
//!
//! `PlaybackController` owns the cursor into the fixed track list and the
//! play/pause flag, drives a `MediaElement`, and writes everything the user
//! sees through a `Surface`. All methods run on the event-loop thread;
//! asynchronous work (audio, duration probes) reports back through channels
//! that the loop drains.

mod events;
mod format;
mod playback;
mod playlist;
mod probe;
mod state;
mod surface;

pub use events::{EventCallback, PlayerEvent, SubscriptionId};
pub use format::{format_clock, progress_percent, valid_duration};
pub use playback::PlaybackController;
pub use probe::{CancelToken, ProbeResult, ProbeSet, Prober, default_prober};
pub use state::PlaybackState;
pub use surface::{Affordance, NowPlayingView, PlaylistRow, Surface};
