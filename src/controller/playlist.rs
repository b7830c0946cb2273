use crate::media::MediaElement;

use super::format::format_clock;
use super::playback::PlaybackController;
use super::probe::ProbeSet;
use super::surface::{PlaylistRow, Surface};

impl<M: MediaElement, S: Surface> PlaybackController<M, S> {
    /// Render one row per track and start a duration probe for each.
    ///
    /// Rebuilding cancels the probes of the previous build.
    pub fn build_playlist(&mut self) {
        let rows = self
            .tracks
            .iter()
            .map(|t| PlaylistRow {
                title: t.display_name.clone(),
                artist: t.artist.clone(),
                duration: None,
                active: false,
            })
            .collect();
        self.surface.set_rows(rows);

        let sources = self
            .tracks
            .iter()
            .enumerate()
            .map(|(i, t)| (i, t.src.clone()))
            .collect();
        // Dropping the old set cancels it.
        self.probes = Some(ProbeSet::spawn(sources, self.prober.clone()));

        self.refresh_active_highlight();
    }

    /// Highlight exactly the row under the cursor.
    pub fn refresh_active_highlight(&mut self) {
        let current = self.state.track_index;
        for i in 0..self.tracks.len() {
            self.surface.set_row_active(i, i == current);
        }
    }

    /// Apply resolved duration probes. Returns how many rows were filled.
    pub fn poll_probes(&mut self) -> usize {
        let Some(ref probes) = self.probes else {
            return 0;
        };
        let results = probes.try_results();
        for r in &results {
            self.surface
                .set_row_duration(r.index, &format_clock(r.duration.as_secs_f64()));
        }
        results.len()
    }

    /// Cancel outstanding probes; their results are discarded.
    pub fn cancel_probes(&mut self) {
        if let Some(probes) = self.probes.take() {
            probes.cancel();
        }
    }
}
