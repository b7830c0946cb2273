/// Cursor and transport flag of one controller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlaybackState {
    /// Always a valid index into the controller's track list.
    pub track_index: usize,
    pub is_playing: bool,
}

impl PlaybackState {
    /// Step forward, wrapping to 0 past the last track. `len` must be non-zero.
    pub fn advance(&mut self, len: usize) {
        self.track_index = (self.track_index + 1) % len;
    }

    /// Step back, wrapping to `len - 1` below 0. `len` must be non-zero.
    pub fn retreat(&mut self, len: usize) {
        self.track_index = (self.track_index + len - 1) % len;
    }
}
