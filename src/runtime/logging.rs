use std::fs::OpenOptions;
use std::path::PathBuf;

use env_logger::{Builder, Env, Target};

use crate::config::LoggingSettings;

pub fn log_file_path(logging: &LoggingSettings) -> PathBuf {
    logging
        .file
        .clone()
        .unwrap_or_else(|| std::env::temp_dir().join("playdeck.log"))
}

/// Route `log` output to the log file. `RUST_LOG` overrides the configured
/// level. If the file cannot be opened logging stays off.
pub fn init(logging: &LoggingSettings) {
    let path = log_file_path(logging);
    let file = match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(f) => f,
        Err(_) => return,
    };

    let _ = Builder::from_env(Env::default().default_filter_or(logging.level.as_str()))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_log_file_lives_in_temp_dir() {
        let path = log_file_path(&LoggingSettings::default());
        assert_eq!(path, std::env::temp_dir().join("playdeck.log"));
    }

    #[test]
    fn configured_log_file_wins() {
        let logging = LoggingSettings {
            file: Some(PathBuf::from("/var/tmp/deck.log")),
            ..LoggingSettings::default()
        };
        assert_eq!(log_file_path(&logging), PathBuf::from("/var/tmp/deck.log"));
    }
}
