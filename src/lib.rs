//! quill-rs: a tiny static blog publisher
//!
//! Reads a plain-text entry (title and body separated by `---` lines),
//! renders it into a styled HTML page, prepends it to the JSON-backed
//! entry list, and regenerates the homepage and archive listing from that
//! list. Single-threaded and run-to-completion; the on-disk files are the
//! only state between runs.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod generator;
pub mod helpers;
pub mod store;
pub mod templates;

use std::fs;
use std::path::{Path, PathBuf};

use error::Result;

/// The main publisher application
#[derive(Clone)]
pub struct Blog {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Blog root directory
    pub base_dir: PathBuf,
    /// Directory holding per-entry pages
    pub entries_dir: PathBuf,
    /// Directory holding shared assets
    pub assets_dir: PathBuf,
}

impl Blog {
    /// Create a Blog rooted at a directory, reading `_config.yml` when present
    pub fn open<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let entries_dir = base_dir.join(&config.entries_dir);
        let assets_dir = base_dir.join(&config.assets_dir);

        Ok(Self {
            config,
            base_dir,
            entries_dir,
            assets_dir,
        })
    }

    /// Ensure the on-disk layout exists: the entry and asset directories,
    /// the shared stylesheet, and the `.nojekyll` marker for GitHub Pages.
    pub fn prepare(&self) -> Result<()> {
        fs::create_dir_all(&self.entries_dir)?;
        fs::create_dir_all(&self.assets_dir)?;

        let css_path = self.assets_dir.join("styles.css");
        if !css_path.exists() {
            fs::write(&css_path, templates::STYLESHEET)?;
        }

        let nojekyll = self.base_dir.join(".nojekyll");
        if !nojekyll.exists() {
            fs::write(&nojekyll, "")?;
        }

        Ok(())
    }

    /// Publish one entry file
    pub fn publish(&self, file: &Path) -> Result<content::Entry> {
        commands::publish::run(self, file)
    }

    /// Regenerate the homepage and archive without creating an entry
    pub fn update(&self) -> Result<()> {
        commands::update::run(self)
    }
}
