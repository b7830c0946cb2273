use std::{env, path::PathBuf};

use super::schema::Settings;
use crate::error::PlayerError;

/// Configuration loading helpers.
///
/// `Settings::load` reads an optional config file, then environment variables
/// (prefix `PLAYDECK__`), and falls back to struct defaults.
impl Settings {
    /// Load settings from the optional config file and the environment.
    pub fn load() -> Result<Self, PlayerError> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("PLAYDECK")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Reject values the player cannot work with.
    pub fn validate(&self) -> Result<(), PlayerError> {
        if !(0.0..=1.0).contains(&self.audio.volume) {
            return Err(PlayerError::InvalidConfig(
                "audio.volume must be within 0.0..=1.0".to_string(),
            ));
        }
        if self.audio.tick_ms == 0 {
            return Err(PlayerError::InvalidConfig(
                "audio.tick_ms must be >= 1".to_string(),
            ));
        }
        if !(self.controls.volume_step > 0.0 && self.controls.volume_step <= 1.0) {
            return Err(PlayerError::InvalidConfig(
                "controls.volume_step must be within (0.0, 1.0]".to_string(),
            ));
        }
        if let Some(entry) = self.catalog.tracks.iter().find(|t| t.src.trim().is_empty()) {
            return Err(PlayerError::InvalidConfig(format!(
                "catalog track {:?} has an empty src",
                entry.name
            )));
        }
        Ok(())
    }
}

/// Resolve the config path from `PLAYDECK_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("PLAYDECK_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/playdeck/config.toml`
/// or `~/.config/playdeck/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
    };

    config_home.map(|d| d.join("playdeck").join("config.toml"))
}
