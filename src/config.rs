//! Configuration management for placement prep

use crate::error::{PrepError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub storage: StorageConfig,
    pub scoring: ScoringConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub history_path: PathBuf,
    /// Oldest analyses are dropped once the history grows past this many entries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_entries: Option<usize>,
}

/// Readiness score terms. Defaults reproduce the standard formula.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub base_score: u32,
    pub category_bonus: u32,
    pub max_category_bonus: u32,
    pub company_bonus: u32,
    pub role_bonus: u32,
    pub detail_bonus: u32,
    /// Trimmed job description must be longer than this many characters
    pub detailed_jd_chars: usize,
    pub confidence_step: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color_output: bool,
    pub pretty_json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
    Html,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            base_score: 35,
            category_bonus: 5,
            max_category_bonus: 30,
            company_bonus: 10,
            role_bonus: 10,
            detail_bonus: 10,
            detailed_jd_chars: 800,
            confidence_step: 2,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let history_path = dirs::data_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("placement-prep")
            .join("history.json");

        Self {
            storage: StorageConfig {
                history_path,
                max_entries: None,
            },
            scoring: ScoringConfig::default(),
            output: OutputConfig {
                format: OutputFormat::Console,
                color_output: true,
                pretty_json: true,
            },
        }
    }
}

impl Config {
    /// Load from the default location, writing defaults on first run
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = toml::from_str(&content)
                .map_err(|e| PrepError::Configuration(format!("Failed to parse config: {}", e)))?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to(config_path)?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| PrepError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("placement-prep")
            .join("config.toml")
    }

    pub fn history_path(&self) -> &Path {
        &self.storage.history_path
    }
}
