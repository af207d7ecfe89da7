use crate::model::ProcessorKind;
use crate::utils::is_valid_site_name;

use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetcherConfig {
    pub user_agent: String,
    pub timeout_seconds: u64,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) SiteScraper/0.1".to_string(),
            timeout_seconds: 30,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TargetConfig {
    pub url: String,
    pub website_name: String,
    #[serde(default = "default_processors")]
    pub processors: Vec<ProcessorKind>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_outputs_root")]
    pub outputs_root: PathBuf,
    #[serde(default)]
    pub fetcher: FetcherConfig,
    pub targets: Vec<TargetConfig>,
}

fn default_outputs_root() -> PathBuf {
    PathBuf::from("./outputs")
}

fn default_processors() -> Vec<ProcessorKind> {
    vec![ProcessorKind::Text]
}

pub fn load_config(path: impl AsRef<Path>) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

pub fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    let config: AppConfig = serde_json::from_str(content)?;
    config.validate()?;
    Ok(config)
}

impl AppConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.targets.is_empty() {
            return Err(ConfigError::Invalid("no targets configured".into()));
        }

        let mut names = HashSet::new();
        for target in &self.targets {
            if !is_valid_site_name(&target.website_name) {
                return Err(ConfigError::Invalid(format!(
                    "website_name {:?} is not a valid folder name",
                    target.website_name
                )));
            }
            if target.processors.is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "target {} has no processors",
                    target.website_name
                )));
            }
            if !names.insert(target.website_name.as_str()) {
                warn!(
                    "Several targets write to {}; the last one to finish wins",
                    target.website_name
                );
            }
        }

        Ok(())
    }
}
