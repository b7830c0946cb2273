//! Elapsed-time accounting for the audio thread.
//!
//! rodio does not report a position, so the thread keeps its own: time
//! accumulated while paused plus the wall clock since the last resume. All
//! functions take `now` explicitly.

use std::time::{Duration, Instant};

use super::types::MediaEvent;

/// Clamp a seek target into the source; unknown durations only clamp at zero.
pub(super) fn clamp_seek(target: Duration, duration: Option<Duration>) -> Duration {
    match duration {
        Some(d) => target.min(d),
        None => target,
    }
}

/// Position of the current source. Running while `started_at` is set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(super) struct PlayClock {
    started_at: Option<Instant>,
    accumulated: Duration,
}

impl PlayClock {
    pub(super) fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    pub(super) fn elapsed_at(&self, now: Instant) -> Duration {
        self.accumulated
            + self
                .started_at
                .map_or(Duration::ZERO, |st| now.saturating_duration_since(st))
    }

    pub(super) fn resume(&mut self, now: Instant) {
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
    }

    pub(super) fn pause(&mut self, now: Instant) {
        if let Some(st) = self.started_at.take() {
            self.accumulated += now.saturating_duration_since(st);
        }
    }

    /// Move to `position`, keeping the running state.
    pub(super) fn jump_to(&mut self, position: Duration, now: Instant) {
        self.accumulated = position;
        if self.started_at.is_some() {
            self.started_at = Some(now);
        }
    }

    /// Stop at `position`.
    pub(super) fn stop_at(&mut self, position: Duration) {
        self.accumulated = position;
        self.started_at = None;
    }

    pub(super) fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Progress tick for a source of `generation`.
///
/// Nothing is reported while paused. A drained sink ends the source: the
/// clock stops at the known duration (or wherever it got to) and `Ended` is
/// returned.
pub(super) fn tick_event(
    clock: &mut PlayClock,
    sink_drained: bool,
    duration: Option<Duration>,
    generation: u64,
    now: Instant,
) -> Option<MediaEvent> {
    if !clock.is_running() {
        return None;
    }
    if sink_drained {
        let end = duration.unwrap_or_else(|| clock.elapsed_at(now));
        clock.stop_at(end);
        return Some(MediaEvent::Ended { generation });
    }
    Some(MediaEvent::TimeUpdate {
        generation,
        current_time: clock.elapsed_at(now).as_secs_f64(),
        duration: duration.map(|d| d.as_secs_f64()),
    })
}
