//! Application-level configuration loading, including the default blind schedule.

use std::{env, fs, io::ErrorKind, path::PathBuf};

use serde::Deserialize;
use tracing::{info, warn};

use crate::state::tournament::{Level, LevelId};

/// Default location on disk where the server looks for the JSON configuration.
const DEFAULT_CONFIG_PATH: &str = "config/app.json";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
const CONFIG_PATH_ENV: &str = "POKER_CLOCK_CONFIG_PATH";
/// Default path of the persisted tournament document.
const DEFAULT_DATA_PATH: &str = "tournament_data.json";
/// Default directory holding the tournament and settings pages.
const DEFAULT_PAGES_DIR: &str = "pages";

#[derive(Debug, Clone)]
/// Immutable runtime configuration shared across the application.
pub struct AppConfig {
    /// Where the tournament document is persisted.
    pub data_path: PathBuf,
    /// Directory the page routes serve `index.html`, `settings.html`
    /// and `static/` assets from.
    pub pages_dir: PathBuf,
    /// Schedule a fresh tournament starts with when no document exists.
    pub schedule: Vec<Level>,
}

impl AppConfig {
    /// Load the application configuration from disk, falling back to the
    /// baked-in defaults when no config file is present.
    pub fn load() -> Self {
        let path = resolve_config_path();
        match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<RawConfig>(&contents) {
                Ok(raw) => {
                    let config: Self = raw.into();
                    info!(
                        path = %path.display(),
                        levels = config.schedule.len(),
                        "loaded configuration"
                    );
                    config
                }
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to parse config; falling back to defaults"
                    );
                    Self::default()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    path = %path.display(),
                    "config file not found; using built-in defaults"
                );
                Self::default()
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read config; falling back to defaults"
                );
                Self::default()
            }
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            pages_dir: PathBuf::from(DEFAULT_PAGES_DIR),
            schedule: default_schedule(),
        }
    }
}

#[derive(Debug, Deserialize)]
/// JSON representation of the configuration file located at [`DEFAULT_CONFIG_PATH`].
struct RawConfig {
    data_path: Option<PathBuf>,
    pages_dir: Option<PathBuf>,
    schedule: Option<Vec<Level>>,
}

impl From<RawConfig> for AppConfig {
    fn from(value: RawConfig) -> Self {
        let defaults = AppConfig::default();
        Self {
            data_path: value.data_path.unwrap_or(defaults.data_path),
            pages_dir: value.pages_dir.unwrap_or(defaults.pages_dir),
            schedule: value.schedule.unwrap_or(defaults.schedule),
        }
    }
}

/// Resolve the configuration path taking the environment override into account.
fn resolve_config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

fn blind_level(number: u64, sb: u64, bb: u64, ante: u64) -> Level {
    Level {
        level: LevelId::Number(number),
        sb,
        bb,
        ante,
        duration: 900,
        is_pause: false,
    }
}

fn pause(label: &str) -> Level {
    Level {
        level: LevelId::Label(label.into()),
        sb: 0,
        bb: 0,
        ante: 0,
        duration: 300,
        is_pause: true,
    }
}

/// Built-in schedule shipped with the binary: four 15-minute levels, a
/// break, four more levels, a break.
fn default_schedule() -> Vec<Level> {
    vec![
        blind_level(1, 25, 50, 0),
        blind_level(2, 50, 100, 0),
        blind_level(3, 75, 150, 25),
        blind_level(4, 100, 200, 25),
        pause("Pause 1"),
        blind_level(5, 150, 300, 50),
        blind_level(6, 200, 400, 50),
        blind_level(7, 300, 600, 100),
        blind_level(8, 400, 800, 100),
        pause("Pause 2"),
    ]
}
