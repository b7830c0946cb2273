//! Static track catalog.
//!
//! The catalog is built once at startup, either from `[[catalog.tracks]]`
//! entries in the config file or by scanning a directory, and never changes
//! afterwards.

mod model;
mod scan;

pub use model::Track;
pub use scan::scan;

use std::path::Path;

use crate::config::CatalogSettings;

/// Build the catalog. Explicit config entries win over any directory; the
/// `dir_override` (CLI argument) wins over `catalog.dir`.
pub fn load(settings: &CatalogSettings, dir_override: Option<&Path>) -> Vec<Track> {
    if !settings.tracks.is_empty() && dir_override.is_none() {
        log::info!("catalog: {} tracks from config", settings.tracks.len());
        return settings.tracks.iter().cloned().map(Track::from).collect();
    }

    let Some(dir) = dir_override.or(settings.dir.as_deref()) else {
        log::warn!("catalog: no tracks configured and no directory to scan");
        return Vec::new();
    };

    let tracks = scan(dir, settings);
    log::info!("catalog: {} tracks scanned from {}", tracks.len(), dir.display());
    tracks
}
