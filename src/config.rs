use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::core::key::DEFAULT_MAX_WORDS;
use crate::core::namespace::{DEFAULT_ANCHOR, DEFAULT_SEGMENT_COUNT, DefaultNamespace};
use crate::core::scan::MarkupOptions;

pub const CONFIG_FILE_NAME: &str = ".romakeyrc.json";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_anchor")]
    pub anchor: String,
    #[serde(default)]
    pub default_namespace: DefaultNamespace,
    #[serde(default = "default_segment_count")]
    pub segment_count: usize,
    #[serde(default = "default_max_key_words")]
    pub max_key_words: usize,
    #[serde(default = "default_title_elements")]
    pub title_elements: Vec<String>,
    #[serde(default = "default_tooltip_elements")]
    pub tooltip_elements: Vec<String>,
    #[serde(default = "default_tooltip_attributes")]
    pub tooltip_attributes: Vec<String>,
}

fn default_anchor() -> String {
    DEFAULT_ANCHOR.to_string()
}

fn default_segment_count() -> usize {
    DEFAULT_SEGMENT_COUNT
}

fn default_max_key_words() -> usize {
    DEFAULT_MAX_WORDS
}

fn default_title_elements() -> Vec<String> {
    MarkupOptions::default().title_elements
}

fn default_tooltip_elements() -> Vec<String> {
    MarkupOptions::default().tooltip_elements
}

fn default_tooltip_attributes() -> Vec<String> {
    MarkupOptions::default().tooltip_attributes
}

impl Default for Config {
    fn default() -> Self {
        Self {
            anchor: default_anchor(),
            default_namespace: DefaultNamespace::default(),
            segment_count: default_segment_count(),
            max_key_words: default_max_key_words(),
            title_elements: default_title_elements(),
            tooltip_elements: default_tooltip_elements(),
            tooltip_attributes: default_tooltip_attributes(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.anchor.is_empty() {
            bail!("'anchor' must not be empty");
        }
        if self.segment_count == 0 {
            bail!("'segmentCount' must be at least 1");
        }
        if self.max_key_words == 0 {
            bail!("'maxKeyWords' must be at least 1");
        }
        Ok(())
    }

    pub fn markup_options(&self) -> MarkupOptions {
        MarkupOptions {
            title_elements: self.title_elements.clone(),
            tooltip_elements: self.tooltip_elements.clone(),
            tooltip_attributes: self.tooltip_attributes.clone(),
        }
    }
}

/// Looks for the config file from `start_dir` upwards, stopping at a git
/// repository root.
pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// The file the config came from, `None` when using defaults.
    pub path: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            config
                .validate()
                .with_context(|| format!("Invalid config file: {}", path.display()))?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
