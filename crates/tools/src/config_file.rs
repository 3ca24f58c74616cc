//! Reading and writing `LevelConfig` as TOML.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use levelgen::LevelConfig;

/// Defaults when `path` is `None`. Missing keys fall back to their defaults.
pub fn load(path: Option<&Path>) -> Result<LevelConfig> {
    let Some(path) = path else {
        return Ok(LevelConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: LevelConfig = toml::from_str(&text)
        .with_context(|| format!("Failed to parse config TOML: {}", path.display()))?;
    config.validate().with_context(|| format!("Invalid config: {}", path.display()))?;
    Ok(config)
}

pub fn render(config: &LevelConfig) -> Result<String> {
    toml::to_string_pretty(config).with_context(|| "Failed to serialize config TOML")
}
