use std::path::Path;
use std::time::Duration;

use lofty::prelude::AudioFile;

/// Read the container's duration. `None` for unreadable files and for
/// containers that report a zero length.
pub fn probe_duration(path: &Path) -> Option<Duration> {
    let tagged = match lofty::read_from_path(path) {
        Ok(t) => t,
        Err(e) => {
            log::debug!("metadata: cannot read {}: {e}", path.display());
            return None;
        }
    };
    Some(tagged.properties().duration()).filter(|d| !d.is_zero())
}
