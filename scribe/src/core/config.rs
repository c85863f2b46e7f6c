use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::time::Duration;
use anyhow::Result;

use crate::core::tone::ToneStyle;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub generation: GenerationConfig,
    /// Extra or replacement tones, keyed by tone name.
    #[serde(default)]
    pub tones: BTreeMap<String, ToneStyle>,
    /// Extra or replacement topics, keyed by topic name.
    #[serde(default)]
    pub topics: BTreeMap<String, TopicConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GenerationConfig {
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

impl GenerationConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self { delay_ms: default_delay_ms() }
    }
}

fn default_delay_ms() -> u64 {
    2000
}

#[derive(Debug, Deserialize, Clone)]
pub struct TopicConfig {
    pub fact: String,
    pub importance: String,
    pub myth: Option<String>, // falls back to the generic myth
}

pub fn load_config(path: &str) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    log::info!(
        "Loaded config from {} ({} tone overrides, {} topic overrides)",
        path,
        config.tones.len(),
        config.topics.len()
    );
    Ok(config)
}
