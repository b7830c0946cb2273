//! Configuration loader and schema types.
//!
//! This module exposes the settings schema that drives the player (audio,
//! ui, controls, catalog, logging) and helpers to load it from disk.

mod load;
mod schema;

pub use schema::*;
