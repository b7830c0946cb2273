use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;

use crate::catalog::Track;
use crate::config::AudioSettings;

use super::element::MediaElement;
use super::thread::spawn_audio_thread;
use super::types::{AudioCmd, MediaEvent, PlaybackHandle, PlaybackInfo};

/// `MediaElement` backed by a rodio audio thread.
///
/// Commands are queued to the thread; position and duration are read from the
/// shared `PlaybackHandle` the thread publishes into.
pub struct AudioElement {
    tx: Sender<AudioCmd>,
    playback: PlaybackHandle,
    generation: u64,
    join: Mutex<Option<JoinHandle<()>>>,
}

impl AudioElement {
    /// Spawn the audio thread. The returned receiver carries the element's
    /// notifications and must be drained by the event loop.
    pub fn new(audio_settings: AudioSettings) -> (Self, Receiver<MediaEvent>) {
        let (tx, rx) = mpsc::channel::<AudioCmd>();
        let (events_tx, events_rx) = mpsc::channel::<MediaEvent>();
        let playback_info: PlaybackHandle = Arc::new(Mutex::new(PlaybackInfo::default()));

        let audio_handle = spawn_audio_thread(rx, events_tx, playback_info.clone(), audio_settings);

        let element = Self {
            tx,
            playback: playback_info,
            generation: 0,
            join: Mutex::new(Some(audio_handle)),
        };
        (element, events_rx)
    }

    fn send(&self, cmd: AudioCmd) {
        if let Err(e) = self.tx.send(cmd) {
            log::warn!("audio: thread is gone, dropped {:?}", e.0);
        }
    }

    /// Stop output and wait for the audio thread to exit.
    pub fn shutdown(&self) {
        let _ = self.tx.send(AudioCmd::Quit);

        if let Ok(mut j) = self.join.lock() {
            if let Some(h) = j.take() {
                let _ = h.join();
            }
        }
    }
}

impl Drop for AudioElement {
    fn drop(&mut self) {
        self.shutdown();
    }
}

impl MediaElement for AudioElement {
    fn set_source(&mut self, src: &str) {
        self.generation += 1;
        if let Ok(mut info) = self.playback.lock() {
            *info = PlaybackInfo::default();
        }
        let path = Track::locator_path(src).map(|p| p.to_path_buf());
        self.send(AudioCmd::Load {
            path,
            generation: self.generation,
        });
    }

    fn generation(&self) -> u64 {
        self.generation
    }

    fn play(&mut self) {
        self.send(AudioCmd::Play);
    }

    fn pause(&mut self) {
        self.send(AudioCmd::Pause);
    }

    fn current_time(&self) -> f64 {
        self.playback
            .lock()
            .map(|info| info.elapsed.as_secs_f64())
            .unwrap_or(0.0)
    }

    fn set_current_time(&mut self, secs: f64) {
        if !secs.is_finite() {
            return;
        }
        let target = Duration::from_secs_f64(secs.max(0.0));
        if let Ok(mut info) = self.playback.lock() {
            info.elapsed = target;
        }
        self.send(AudioCmd::SeekTo(target));
    }

    fn duration(&self) -> Option<f64> {
        self.playback
            .lock()
            .ok()
            .and_then(|info| info.duration)
            .map(|d| d.as_secs_f64())
    }

    fn set_volume(&mut self, level: f32) {
        self.send(AudioCmd::SetVolume(level));
    }
}
