use std::path::PathBuf;
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use rodio::{OutputStream, Sink};

use crate::config::AudioSettings;

use super::clock::{PlayClock, clamp_seek, tick_event};
use super::metadata::probe_duration;
use super::sink::{create_sink_at, open_output};
use super::types::{AudioCmd, MediaEvent, PlaybackHandle};

/// Audio-thread state: one output stream, at most one sink.
struct Deck {
    stream: Option<OutputStream>,
    sink: Option<Sink>,
    path: Option<PathBuf>,
    generation: u64,
    clock: PlayClock,
    duration: Option<Duration>,
    volume: f32,
    info: PlaybackHandle,
    events: Sender<MediaEvent>,
}

impl Deck {
    fn publish(&self) {
        if let Ok(mut info) = self.info.lock() {
            info.elapsed = self.clock.elapsed_at(Instant::now());
            info.duration = self.duration;
        }
    }

    fn emit(&self, event: MediaEvent) {
        // The receiver only goes away during shutdown.
        let _ = self.events.send(event);
    }

    fn stop_sink(&mut self) {
        if let Some(s) = self.sink.take() {
            s.stop();
        }
    }

    /// Build a paused sink for the current path at `start_at`.
    fn open_at(&self, start_at: Duration) -> Option<Sink> {
        let stream = self.stream.as_ref()?;
        let path = self.path.as_ref()?;
        match create_sink_at(stream, path, start_at, self.volume) {
            Ok(sink) => Some(sink),
            Err(e) => {
                log::warn!("audio: {e}");
                None
            }
        }
    }

    fn load(&mut self, path: Option<PathBuf>, generation: u64) {
        self.stop_sink();
        self.clock.reset();
        self.duration = None;
        self.path = path;
        self.generation = generation;

        let Some(path) = self.path.clone() else {
            log::warn!("audio: source is not a local file, nothing to load");
            self.publish();
            return;
        };

        self.sink = self.open_at(Duration::ZERO);
        if self.sink.is_some() {
            self.duration = probe_duration(&path);
            log::debug!(
                "audio: loaded {} (duration {:?}, generation {generation})",
                path.display(),
                self.duration
            );
            self.emit(MediaEvent::LoadedMetadata {
                generation,
                duration: self.duration.map(|d| d.as_secs_f64()),
            });
        }
        self.publish();
    }

    fn play(&mut self) {
        if self.clock.is_running() {
            return;
        }
        // A finished sink restarts from the top, like an ended media element.
        if self.sink.as_ref().is_some_and(|s| s.empty()) {
            self.clock.reset();
            self.sink = self.open_at(Duration::ZERO);
        }
        let Some(ref s) = self.sink else {
            return;
        };
        s.play();
        self.clock.resume(Instant::now());
        self.publish();
    }

    fn pause(&mut self) {
        if !self.clock.is_running() {
            return;
        }
        if let Some(ref s) = self.sink {
            s.pause();
        }
        self.clock.pause(Instant::now());
        self.publish();
    }

    /// Scrubbing: rebuild the current sink and skip into the file.
    fn seek_to(&mut self, target: Duration) {
        if self.sink.is_none() {
            return;
        }
        let target = clamp_seek(target, self.duration);
        self.stop_sink();

        let Some(new_sink) = self.open_at(target) else {
            self.clock.pause(Instant::now());
            self.publish();
            return;
        };
        if self.clock.is_running() {
            new_sink.play();
        }
        self.sink = Some(new_sink);
        self.clock.jump_to(target, Instant::now());
        self.publish();
    }

    fn set_volume(&mut self, level: f32) {
        self.volume = level.clamp(0.0, 1.0);
        if let Some(ref s) = self.sink {
            s.set_volume(self.volume);
        }
    }

    /// Periodic progress tick; detects the natural end of the source.
    fn tick(&mut self) {
        let Some(drained) = self.sink.as_ref().map(|s| s.empty()) else {
            return;
        };
        let event = tick_event(
            &mut self.clock,
            drained,
            self.duration,
            self.generation,
            Instant::now(),
        );
        if let Some(event) = event {
            self.publish();
            self.emit(event);
        }
    }
}

pub(super) fn spawn_audio_thread(
    rx: Receiver<AudioCmd>,
    events: Sender<MediaEvent>,
    playback_info: PlaybackHandle,
    audio_settings: AudioSettings,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let stream = match open_output() {
            Ok(stream) => Some(stream),
            Err(e) => {
                log::error!("audio: {e}; playback disabled");
                None
            }
        };

        let mut deck = Deck {
            stream,
            sink: None,
            path: None,
            generation: 0,
            clock: PlayClock::default(),
            duration: None,
            volume: audio_settings.volume.clamp(0.0, 1.0),
            info: playback_info,
            events,
        };

        let tick = Duration::from_millis(audio_settings.tick_ms.max(1));
        let mut last_tick = Instant::now();

        loop {
            match rx.recv_timeout(tick) {
                Ok(cmd) => match cmd {
                    AudioCmd::Load { path, generation } => deck.load(path, generation),
                    AudioCmd::Play => deck.play(),
                    AudioCmd::Pause => deck.pause(),
                    AudioCmd::SeekTo(target) => deck.seek_to(target),
                    AudioCmd::SetVolume(level) => deck.set_volume(level),
                    AudioCmd::Quit => {
                        deck.stop_sink();
                        break;
                    }
                },
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => break,
            }

            // Commands arriving faster than the tick must not starve progress.
            if last_tick.elapsed() >= tick {
                deck.tick();
                last_tick = Instant::now();
            }
        }
    })
}
