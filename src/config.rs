//! Configuration management for the skill-gap advisor

use crate::error::{AdvisorError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub data: DataConfig,
    pub ranking: RankingConfig,
    pub output: OutputConfig,
}

/// Catalog locations. Unset paths fall back to the built-in catalog.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DataConfig {
    pub profiles_path: Option<PathBuf>,
    pub courses_path: Option<PathBuf>,
    pub skill_guide_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    pub strategy: RankingStrategy,
    pub top_n: usize,
    /// Number of fitted TF-IDF models kept in memory; 0 disables caching.
    pub cache_capacity: usize,
}

/// Course ranking policy used by `recommend`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankingStrategy {
    /// Rating-sorted courses filtered by specialization or missing skill.
    Heuristic,
    /// TF-IDF cosine similarity against the missing skills.
    Content,
}

impl std::fmt::Display for RankingStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RankingStrategy::Heuristic => write!(f, "heuristic"),
            RankingStrategy::Content => write!(f, "content"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            strategy: RankingStrategy::Heuristic,
            top_n: 3,
            cache_capacity: 8,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            detailed: false,
            color_output: true,
        }
    }
}

impl Config {
    /// Load from the default location, writing defaults on first use.
    pub fn load() -> Result<Self> {
        Self::load_or_create(&Self::config_path())
    }

    /// Load from an explicit file; a missing file is an error here.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(AdvisorError::Configuration(format!(
                "Config file does not exist: {}",
                path.display()
            )));
        }
        Self::read(path)
    }

    fn load_or_create(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::read(path)
        } else {
            let config = Self::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    fn read(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| AdvisorError::Configuration(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| AdvisorError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("skill-gap-advisor")
            .join("config.toml")
    }

    pub fn validate(&self) -> Result<()> {
        if self.ranking.top_n == 0 {
            return Err(AdvisorError::Configuration(
                "ranking.top_n must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
