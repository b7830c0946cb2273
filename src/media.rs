//! The playback primitive.
//!
//! `MediaElement` is the narrow transport surface the controller drives
//! (source, play/pause, position, duration, volume). `AudioElement` implements
//! it on top of `rodio`, running decoding and output on a dedicated thread and
//! reporting progress back as `MediaEvent`s.

mod clock;
mod element;
mod metadata;
mod player;
mod sink;
mod thread;
mod types;

pub use element::MediaElement;
pub use metadata::probe_duration;
pub use player::AudioElement;
pub use types::MediaEvent;

#[cfg(test)]
mod tests;
