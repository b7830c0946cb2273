/// What the single play/pause control currently offers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Affordance {
    /// Nothing is playing; the control starts playback.
    #[default]
    Play,
    /// Playback is running; the control pauses it.
    Pause,
}

/// One row of the rendered playlist.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaylistRow {
    pub title: String,
    pub artist: String,
    /// `None` until the row's duration probe resolves (possibly forever).
    pub duration: Option<String>,
    pub active: bool,
}

/// Addressable display regions the controller writes to.
pub trait Surface {
    fn set_title(&mut self, text: &str);
    fn set_artist(&mut self, text: &str);
    fn set_cover(&mut self, locator: &str);
    fn set_affordance(&mut self, affordance: Affordance);
    fn set_elapsed_text(&mut self, text: &str);
    fn set_total_text(&mut self, text: &str);
    /// Seek-bar fill width in percent.
    fn set_progress_percent(&mut self, percent: f64);
    fn set_volume_level(&mut self, level: f32);

    /// Replace the playlist rows.
    fn set_rows(&mut self, rows: Vec<PlaylistRow>);
    fn set_row_duration(&mut self, index: usize, text: &str);
    fn set_row_active(&mut self, index: usize, active: bool);
}

/// In-memory display state, rendered by the terminal UI each frame.
#[derive(Debug, Clone, PartialEq)]
pub struct NowPlayingView {
    pub title: String,
    pub artist: String,
    pub cover: String,
    pub affordance: Affordance,
    pub elapsed_text: String,
    pub total_text: String,
    pub progress_percent: f64,
    pub volume: f32,
    pub rows: Vec<PlaylistRow>,
}

impl Default for NowPlayingView {
    fn default() -> Self {
        Self {
            title: String::new(),
            artist: String::new(),
            cover: String::new(),
            affordance: Affordance::Play,
            elapsed_text: "0:00".to_string(),
            total_text: "0:00".to_string(),
            progress_percent: 0.0,
            volume: 1.0,
            rows: Vec::new(),
        }
    }
}

impl NowPlayingView {
    /// Index of the highlighted row, if any.
    pub fn active_row(&self) -> Option<usize> {
        self.rows.iter().position(|r| r.active)
    }
}

impl Surface for NowPlayingView {
    fn set_title(&mut self, text: &str) {
        self.title = text.to_string();
    }

    fn set_artist(&mut self, text: &str) {
        self.artist = text.to_string();
    }

    fn set_cover(&mut self, locator: &str) {
        self.cover = locator.to_string();
    }

    fn set_affordance(&mut self, affordance: Affordance) {
        self.affordance = affordance;
    }

    fn set_elapsed_text(&mut self, text: &str) {
        self.elapsed_text = text.to_string();
    }

    fn set_total_text(&mut self, text: &str) {
        self.total_text = text.to_string();
    }

    fn set_progress_percent(&mut self, percent: f64) {
        self.progress_percent = percent;
    }

    fn set_volume_level(&mut self, level: f32) {
        self.volume = level;
    }

    fn set_rows(&mut self, rows: Vec<PlaylistRow>) {
        self.rows = rows;
    }

    fn set_row_duration(&mut self, index: usize, text: &str) {
        if let Some(row) = self.rows.get_mut(index) {
            row.duration = Some(text.to_string());
        }
    }

    fn set_row_active(&mut self, index: usize, active: bool) {
        if let Some(row) = self.rows.get_mut(index) {
            row.active = active;
        }
    }
}
