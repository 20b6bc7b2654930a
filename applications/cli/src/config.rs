/// CLI configuration
use crate::error::{CliError, Result};
use musiq_playback::{PlaybackConfig, RepeatMode};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "musiq.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CliConfig {
    #[serde(default)]
    pub storage: StorageSettings,

    #[serde(default)]
    pub playback: PlaybackSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    /// Directory holding one JSON document per storage key
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlaybackSettings {
    #[serde(default = "default_volume")]
    pub volume: f32,

    #[serde(default)]
    pub shuffle: bool,

    #[serde(default)]
    pub repeat: RepeatMode,

    #[serde(default = "default_history_size")]
    pub history_size: usize,

    /// Fixed shuffle seed for reproducible sessions
    #[serde(default)]
    pub seed: Option<u64>,
}

impl CliConfig {
    /// Load configuration from `musiq.toml` (if present) and the environment
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration from `path` (required when given) and the environment
    ///
    /// Environment variables use the `MUSIQ_` prefix and `__` between
    /// sections, e.g. `MUSIQ_PLAYBACK__HISTORY_SIZE=20`.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()).required(true));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix("MUSIQ")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let volume = self.playback.volume;
        if !volume.is_finite() || !(0.0..=1.0).contains(&volume) {
            return Err(CliError::Config(format!(
                "playback.volume must be between 0.0 and 1.0 (got {})",
                volume
            )));
        }

        if self.playback.history_size == 0 {
            return Err(CliError::Config(
                "playback.history_size must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    /// Settings for a new playback controller
    pub fn playback_config(&self) -> PlaybackConfig {
        PlaybackConfig {
            history_size: self.playback.history_size,
            volume: self.playback.volume,
            shuffle: self.playback.shuffle,
            repeat: self.playback.repeat,
            seed: self.playback.seed,
            ..PlaybackConfig::default()
        }
    }
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            volume: default_volume(),
            shuffle: false,
            repeat: RepeatMode::Off,
            history_size: default_history_size(),
            seed: None,
        }
    }
}

// Default values
fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_volume() -> f32 {
    0.7
}

fn default_history_size() -> usize {
    50
}
