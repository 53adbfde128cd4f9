//! Configuration
//!
//! Loaded in order of precedence:
//! 1. CLI flags (highest priority)
//! 2. Config file (~/.config/headline/config.toml)
//! 3. Built-in defaults (lowest priority)

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Effective application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Large title shown in the header (and compact in the toolbar)
    pub title: String,

    /// Number of list rows to generate
    pub items: usize,

    /// Theme name: "dark", "light", "nord"
    pub theme: String,

    /// Render tick interval in milliseconds (drives the fade)
    pub tick_rate_ms: u64,

    /// Cross-fade duration in milliseconds
    pub fade_ms: u64,

    /// Height of the fixed toolbar region in rows (the top inset)
    pub toolbar_height: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "Library".to_string(),
            items: 60,
            theme: "dark".to_string(),
            tick_rate_ms: 50,
            fade_ms: 250,
            toolbar_height: 3,
        }
    }
}

/// Raw config file shape: every field optional so partial files work
#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    pub title: Option<String>,
    pub items: Option<usize>,
    pub theme: Option<String>,
    pub tick_rate_ms: Option<u64>,
    pub fade_ms: Option<u64>,
    pub toolbar_height: Option<u16>,
}

impl Config {
    /// Default config file location (~/.config/headline/config.toml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("headline").join("config.toml"))
    }

    /// Load configuration, merging the file (if present) over defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => Some(p.to_path_buf()),
            None => Self::default_path(),
        };

        let mut config = Config::default();
        if let Some(path) = path {
            if path.exists() {
                let raw = fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read config file {}", path.display()))?;
                let file: FileConfig = toml::from_str(&raw)
                    .with_context(|| format!("Failed to parse config file {}", path.display()))?;
                config.merge_file(file);
            }
        }

        Ok(config)
    }

    /// Apply file values over the current configuration
    pub fn merge_file(&mut self, file: FileConfig) {
        if let Some(title) = file.title {
            self.title = title;
        }
        if let Some(items) = file.items {
            self.items = items;
        }
        if let Some(theme) = file.theme {
            self.theme = theme;
        }
        if let Some(tick) = file.tick_rate_ms {
            self.tick_rate_ms = tick;
        }
        if let Some(fade) = file.fade_ms {
            self.fade_ms = fade;
        }
        if let Some(height) = file.toolbar_height {
            // A zero-height toolbar has no boundary to cross
            self.toolbar_height = height.max(1);
        }
    }

    /// Render the effective configuration as TOML (for `config --show`)
    pub fn to_display_toml(&self) -> String {
        format!(
            "title = {:?}\nitems = {}\ntheme = {:?}\ntick_rate_ms = {}\nfade_ms = {}\ntoolbar_height = {}\n",
            self.title, self.items, self.theme, self.tick_rate_ms, self.fade_ms, self.toolbar_height
        )
    }

    /// Default config file contents written by `config --reset`
    pub fn template() -> &'static str {
        "# headline configuration\n\
         #\n\
         # title = \"Library\"\n\
         # items = 60\n\
         # theme = \"dark\"        # dark, light, nord\n\
         # tick_rate_ms = 50\n\
         # fade_ms = 250\n\
         # toolbar_height = 3\n"
    }
}
