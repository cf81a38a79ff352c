//! Driver configuration.

use anyhow::Result;
use kintai_core::MarkerConfig;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// JSONL export file the message source reads
    #[serde(default = "default_source_path")]
    pub source_path: PathBuf,
    /// Directory summaries and the rollup are written to
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Marker texts that open a session
    #[serde(default = "default_start_markers")]
    pub start_markers: Vec<String>,
    /// Marker texts that close a session
    #[serde(default = "default_end_markers")]
    pub end_markers: Vec<String>,
    /// Fixed offset all timestamps are interpreted in, hours east of UTC
    #[serde(default = "default_offset_hours")]
    pub utc_offset_hours: i32,
}

fn default_source_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("kintai")
        .join("messages.jsonl")
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./docs/data")
}

fn default_start_markers() -> Vec<String> {
    kintai_core::DEFAULT_START_MARKERS
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_end_markers() -> Vec<String> {
    kintai_core::DEFAULT_END_MARKERS
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_offset_hours() -> i32 {
    kintai_core::DEFAULT_OFFSET_HOURS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_path: default_source_path(),
            data_dir: default_data_dir(),
            start_markers: default_start_markers(),
            end_markers: default_end_markers(),
            utc_offset_hours: default_offset_hours(),
        }
    }
}

impl Config {
    /// Load config from a specific file path.
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load config from the default location (config/default.toml) or fall
    /// back to defaults.
    pub fn load() -> Result<Self> {
        let config_path = PathBuf::from("config/default.toml");
        if config_path.exists() {
            return Self::load_from(&config_path);
        }
        Ok(Config::default())
    }

    /// The marker vocabulary and offset the core pipeline runs with.
    pub fn marker_config(&self) -> Result<MarkerConfig> {
        Ok(MarkerConfig::new(
            self.start_markers.clone(),
            self.end_markers.clone(),
            self.utc_offset_hours,
        )?)
    }
}
