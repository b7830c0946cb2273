//! Terminal-side UI state that is not part of playback: the playlist cursor.

mod model;

pub use model::App;

#[cfg(test)]
mod tests;
