//! Site configuration (_config.yml)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::Result;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub author: String,
    pub language: String,

    // Appearance
    pub default_theme: String,

    // Date format (strftime-style, used for entry dates)
    pub date_format: String,

    // Directory
    pub entries_dir: String,
    pub assets_dir: String,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Reflections".to_string(),
            author: "John Doe".to_string(),
            language: "en".to_string(),

            default_theme: "dark".to_string(),

            date_format: "%B %d, %Y".to_string(),

            entries_dir: "entries".to_string(),
            assets_dir: "assets".to_string(),

            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}
