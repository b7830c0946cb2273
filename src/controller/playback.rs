use crate::catalog::Track;
use crate::error::PlayerError;
use crate::media::{MediaElement, MediaEvent};

use super::events::{EventBus, EventCallback, PlayerEvent, SubscriptionId};
use super::format::{format_clock, progress_percent, valid_duration};
use super::probe::{ProbeSet, Prober, default_prober};
use super::state::PlaybackState;
use super::surface::{Affordance, NowPlayingView, Surface};

/// Keeps the playback primitive, the now-playing display and the playlist
/// highlight consistent with one cursor and one play/pause flag.
pub struct PlaybackController<M: MediaElement, S: Surface = NowPlayingView> {
    pub(super) tracks: Vec<Track>,
    pub(super) state: PlaybackState,
    volume: f32,
    pub(super) media: M,
    pub(super) surface: S,
    events: EventBus,
    pub(super) prober: Prober,
    pub(super) probes: Option<ProbeSet>,
}

impl<M: MediaElement, S: Surface> PlaybackController<M, S> {
    /// Create a controller at index 0, not playing. Nothing is loaded yet.
    pub fn new(tracks: Vec<Track>, media: M, surface: S) -> Result<Self, PlayerError> {
        if tracks.is_empty() {
            return Err(PlayerError::EmptyCatalog);
        }
        Ok(Self {
            tracks,
            state: PlaybackState::default(),
            volume: 1.0,
            media,
            surface,
            events: EventBus::default(),
            prober: default_prober(),
            probes: None,
        })
    }

    /// Replace the duration prober used by `build_playlist`.
    pub fn with_prober(mut self, prober: Prober) -> Self {
        self.prober = prober;
        self
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn track_index(&self) -> usize {
        self.state.track_index
    }

    pub fn is_playing(&self) -> bool {
        self.state.is_playing
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn current_track(&self) -> &Track {
        &self.tracks[self.state.track_index]
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn media(&self) -> &M {
        &self.media
    }

    pub fn subscribe(&mut self, callback: EventCallback) -> SubscriptionId {
        self.events.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }

    fn emit(&mut self, event: PlayerEvent) {
        self.events.emit(&event);
    }

    /// Load the track under the cursor without starting it.
    ///
    /// Reassigning the source stops whatever was playing.
    pub fn load_track(&mut self) {
        let index = self.state.track_index;
        let track = &self.tracks[index];
        log::debug!("load track {index}: {}", track.display_name);

        self.surface.set_title(&track.display_name);
        self.surface.set_artist(&track.artist);
        self.surface.set_cover(&track.cover);
        self.surface.set_progress_percent(0.0);
        self.surface.set_elapsed_text("0:00");
        self.surface.set_total_text("0:00");
        self.media.set_source(&track.src);

        self.refresh_active_highlight();
        self.emit(PlayerEvent::TrackChanged { index });
    }

    pub fn play(&mut self) {
        self.state.is_playing = true;
        self.surface.set_affordance(Affordance::Pause);
        self.media.play();
        self.emit(PlayerEvent::PlaybackChanged { playing: true });
    }

    pub fn pause(&mut self) {
        self.state.is_playing = false;
        self.surface.set_affordance(Affordance::Play);
        self.media.pause();
        self.emit(PlayerEvent::PlaybackChanged { playing: false });
    }

    /// The single play/pause control.
    pub fn toggle(&mut self) {
        if self.state.is_playing {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Previous track (wrapping), always playing afterwards.
    pub fn previous(&mut self) {
        self.state.retreat(self.tracks.len());
        self.load_track();
        self.play();
    }

    /// Next track (wrapping), always playing afterwards.
    pub fn next(&mut self) {
        self.state.advance(self.tracks.len());
        self.load_track();
        self.play();
    }

    /// Jump to `index` and play it. Out-of-range indices are ignored.
    pub fn select_track(&mut self, index: usize) {
        if index >= self.tracks.len() {
            log::warn!(
                "select_track: index {index} out of range ({} tracks)",
                self.tracks.len()
            );
            return;
        }
        self.state.track_index = index;
        self.load_track();
        self.play();
    }

    /// Seek to `fraction` (0.0..=1.0) of the duration. No-op while the
    /// duration is unknown.
    pub fn seek(&mut self, fraction: f64) {
        let Some(duration) = valid_duration(self.media.duration()) else {
            log::debug!("seek ignored: duration unknown");
            return;
        };
        if !fraction.is_finite() {
            return;
        }
        self.media.set_current_time(fraction.clamp(0.0, 1.0) * duration);
    }

    /// Scrub by `seconds` relative to the current position.
    pub fn seek_by(&mut self, seconds: f64) {
        let Some(duration) = valid_duration(self.media.duration()) else {
            return;
        };
        let target = (self.media.current_time() + seconds).clamp(0.0, duration);
        self.seek(target / duration);
    }

    /// Set output volume directly, clamped to `[0.0, 1.0]`.
    pub fn set_volume(&mut self, level: f32) {
        let level = if level.is_finite() {
            level.clamp(0.0, 1.0)
        } else {
            self.volume
        };
        self.volume = level;
        self.media.set_volume(level);
        self.surface.set_volume_level(level);
    }

    pub fn step_volume(&mut self, delta: f32) {
        self.set_volume(self.volume + delta);
    }

    /// Progress tick from the playback primitive.
    pub fn on_time_update(&mut self, current_time: f64, duration: Option<f64>) {
        if let Some(percent) = progress_percent(current_time, duration) {
            self.surface.set_progress_percent(percent);
        }
        self.surface.set_elapsed_text(&format_clock(current_time));
        let total = valid_duration(duration)
            .map(format_clock)
            .unwrap_or_else(|| "0:00".to_string());
        self.surface.set_total_text(&total);
        self.emit(PlayerEvent::ProgressChanged {
            current_time,
            duration,
        });
    }

    /// Metadata for the active source resolved.
    pub fn on_loaded_metadata(&mut self, duration: Option<f64>) {
        let total = valid_duration(duration)
            .map(format_clock)
            .unwrap_or_else(|| "0:00".to_string());
        self.surface.set_total_text(&total);
    }

    /// Natural end of the current track: auto-advance.
    pub fn on_ended(&mut self) {
        let index = self.state.track_index;
        log::debug!("track {index} ended, advancing");
        self.emit(PlayerEvent::PlaybackEnded { index });
        self.next();
    }

    /// Apply a notification from the media element. Events about an earlier
    /// source are dropped: a new `load_track` supersedes them.
    pub fn handle_media_event(&mut self, event: MediaEvent) {
        let current = self.media.generation();
        if event.generation() != current {
            log::debug!("dropping stale media event {event:?} (current source {current})");
            return;
        }
        match event {
            MediaEvent::TimeUpdate {
                current_time,
                duration,
                ..
            } => self.on_time_update(current_time, duration),
            MediaEvent::LoadedMetadata { duration, .. } => self.on_loaded_metadata(duration),
            MediaEvent::Ended { .. } => self.on_ended(),
        }
    }
}
