//! Configuration for the bar item, colors and alert sound
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// SketchyBar item whose label is updated
    pub item: String,
    pub bar_command: String,
    pub sound_command: String,
    pub sound: String,
    pub normal_color: String,
    pub alert_color: String,
    /// How many times the sound plays when a countdown expires
    pub alert_repeats: usize,
    /// Remaining seconds below which the label turns to the alert color
    pub alert_threshold_secs: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            item: "timer".to_string(),
            bar_command: "sketchybar".to_string(),
            sound_command: "afplay".to_string(),
            sound: "/System/Library/Sounds/Funk.aiff".to_string(),
            normal_color: "0xffcad3f5".to_string(),
            alert_color: "0xffed8796".to_string(),
            alert_repeats: 3,
            alert_threshold_secs: 60,
        }
    }
}

/// Label color, resolved to a bar color code through [`Config`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Normal,
    Alert,
}

impl Config {
    pub fn color_code(&self, color: Color) -> &str {
        match color {
            Color::Normal => &self.normal_color,
            Color::Alert => &self.alert_color,
        }
    }
}

/// Countdown alert policy, split out of [`Config`] for the timer loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlertPolicy {
    pub threshold_secs: i64,
    pub repeats: usize,
    pub tick: Duration,
}

impl Config {
    pub fn alert_policy(&self) -> AlertPolicy {
        AlertPolicy {
            threshold_secs: self.alert_threshold_secs,
            repeats: self.alert_repeats,
            tick: Duration::from_secs(1),
        }
    }
}

pub fn default_config_path() -> PathBuf {
    if let Some(home) = env::var_os("HOME") {
        PathBuf::from(home)
            .join(".config")
            .join("bartimer")
            .join("config.json")
    } else {
        PathBuf::from("bartimer-config.json")
    }
}

/// Read a config file strictly.
pub fn read_config(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|source| Error::Config {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| Error::ConfigFormat {
        path: path.to_path_buf(),
        source,
    })
}

/// Write the default config so it can be edited later.
pub fn write_default_config(path: &Path) -> Result<Config> {
    let config = Config::default();
    let io_err = |source| Error::Config {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    let json = serde_json::to_string_pretty(&config).map_err(|source| Error::ConfigFormat {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(io_err)?;
    Ok(config)
}

/// Load the config, falling back to defaults on any problem.
///
/// A missing file is created with the defaults. A broken file is left
/// alone.
pub fn load_config(path: &Path) -> Config {
    if !path.exists() {
        debug!("No config at {}, writing defaults", path.display());
        return write_default_config(path).unwrap_or_else(|err| {
            warn!("{err}, using defaults");
            Config::default()
        });
    }

    read_config(path).unwrap_or_else(|err| {
        warn!("{err}, using defaults");
        Config::default()
    })
}
