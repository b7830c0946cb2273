//! Application model: the playlist cursor and whether it follows playback.
//!
//! The cursor is what `j`/`k`/`enter` act on. It is independent from the
//! controller's track index, which only changes on transport operations.

/// The playlist cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct App {
    pub selected: usize,
    /// When set, the cursor jumps to whatever track starts playing.
    pub follow_playback: bool,
    track_count: usize,
}

impl App {
    /// Create a cursor over `track_count` rows, following playback.
    pub fn new(track_count: usize) -> Self {
        Self {
            selected: 0,
            follow_playback: true,
            track_count,
        }
    }

    /// Enable following playback (cursor follows currently playing track).
    pub fn follow_playback_on(&mut self) {
        self.follow_playback = true;
    }

    /// Disable following playback (free-roam cursor).
    pub fn follow_playback_off(&mut self) {
        self.follow_playback = false;
    }

    /// Set the cursor, ignoring indices outside the list.
    pub fn set_selected(&mut self, idx: usize) {
        if idx < self.track_count {
            self.selected = idx;
        }
    }

    /// Called when a track starts; moves the cursor there when following.
    pub fn on_track_changed(&mut self, idx: usize) {
        if self.follow_playback {
            self.set_selected(idx);
        }
    }

    /// Move the cursor down, wrapping to the first row.
    pub fn next(&mut self) {
        if self.track_count > 0 {
            self.selected = (self.selected + 1) % self.track_count;
        }
    }

    /// Move the cursor up, wrapping to the last row.
    pub fn prev(&mut self) {
        if self.track_count > 0 {
            self.selected = (self.selected + self.track_count - 1) % self.track_count;
        }
    }

    pub fn first(&mut self) {
        self.selected = 0;
    }

    pub fn last(&mut self) {
        self.selected = self.track_count.saturating_sub(1);
    }
}
