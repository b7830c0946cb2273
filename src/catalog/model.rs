use std::path::Path;

use crate::config::TrackEntry;

/// One playable item with its display metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    /// Internal identifier.
    pub name: String,
    pub display_name: String,
    pub artist: String,
    /// Audio resource locator (a local path).
    pub src: String,
    /// Cover image locator; empty when unknown.
    pub cover: String,
}

impl Track {
    /// Map a resource locator to a local path. Remote (`scheme://`) and blank
    /// locators have none.
    pub fn locator_path(src: &str) -> Option<&Path> {
        let src = src.trim();
        if src.is_empty() || src.contains("://") {
            None
        } else {
            Some(Path::new(src))
        }
    }
}

impl From<TrackEntry> for Track {
    fn from(e: TrackEntry) -> Self {
        Self {
            name: e.name,
            display_name: e.display_name,
            artist: e.artist,
            src: e.src,
            cover: e.cover,
        }
    }
}
