/// Transport commands accepted by a playback primitive.
///
/// Times are in seconds. Implementations report asynchronous outcomes
/// (progress, metadata, end of track) as `MediaEvent`s on their own channel;
/// none of these calls block or fail.
pub trait MediaElement {
    /// Replace the current source. Stops whatever was playing and resets the
    /// position; duration is unknown until metadata loads.
    fn set_source(&mut self, src: &str);

    /// Identifies the current source. Advances on every `set_source`; events
    /// about an earlier source carry an older value.
    fn generation(&self) -> u64;

    fn play(&mut self);

    fn pause(&mut self);

    /// Current playback position.
    fn current_time(&self) -> f64;

    fn set_current_time(&mut self, secs: f64);

    /// Track length, `None` until metadata for the current source has loaded.
    fn duration(&self) -> Option<f64>;

    /// Output volume in `[0.0, 1.0]`.
    fn set_volume(&mut self, level: f32);
}
