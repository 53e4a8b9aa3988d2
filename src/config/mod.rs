//! Configuration management for Engawa.
//!
//! Configuration is read from `~/.config/engawa/config.toml` at startup.
//! If the file doesn't exist, a default configuration with comments is created.

pub mod colors;

pub use colors::{ColorConfig, TagPalette};

use serde::Deserialize;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Main configuration struct.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub site: SiteConfig,
    pub paging: PagingConfig,
    pub recommend: RecommendConfig,
    pub colors: ColorConfig,
    pub tags: TagPalette,
}

/// Where the site's content comes from.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Base URL of the publishing site's dynamic endpoints.
    pub base_url: String,
    /// Directory holding the static snapshot (`posts.json`,
    /// `products.json`, legacy body files). Defaults to
    /// `~/.local/share/engawa/snapshot`.
    pub snapshot_dir: Option<PathBuf>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            snapshot_dir: None,
        }
    }
}

impl SiteConfig {
    /// Effective snapshot directory, if one can be determined.
    pub fn snapshot_dir(&self) -> Option<PathBuf> {
        self.snapshot_dir.clone().or_else(|| {
            dirs::data_dir().map(|d| d.join("engawa").join("snapshot"))
        })
    }
}

/// Pagination and disclosure policy knobs.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PagingConfig {
    /// Posts per page in the blog list.
    pub blog_per_page: usize,
    /// Products per page once the product list switches to paged mode.
    pub product_per_page: usize,
    /// How many more products each reveal shows.
    pub reveal_step: usize,
    /// Shown count at which a large product list switches to paged mode.
    pub paged_threshold: usize,
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            blog_per_page: 7,
            product_per_page: 12,
            reveal_step: 4,
            paged_threshold: 12,
        }
    }
}

impl PagingConfig {
    /// Page sizes and the reveal step must be at least 1. A hand-edited
    /// config with a zero falls back to the default for that knob.
    pub fn sanitize(&mut self) {
        let defaults = Self::default();
        if self.blog_per_page == 0 {
            tracing::warn!("blog_per_page must be at least 1, using default");
            self.blog_per_page = defaults.blog_per_page;
        }
        if self.product_per_page == 0 {
            tracing::warn!("product_per_page must be at least 1, using default");
            self.product_per_page = defaults.product_per_page;
        }
        if self.reveal_step == 0 {
            tracing::warn!("reveal_step must be at least 1, using default");
            self.reveal_step = defaults.reveal_step;
        }
    }
}

/// Recommendation caps per kind.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RecommendConfig {
    pub product_cap: usize,
    pub post_cap: usize,
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            product_cap: 2,
            post_cap: 3,
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, creates a default one with comments.
    /// Missing fields in the config file will use default values.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::default_config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|e| ConfigError::Io {
            path: config_path.clone(),
            source: e,
        })?;

        let mut config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: config_path,
            source: e,
        })?;
        config.paging.sanitize();

        Ok(config)
    }

    /// Get the default config file path: `~/.config/engawa/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("engawa").join("config.toml"))
    }

    /// Create a default config file with comments.
    fn create_default_config(path: &PathBuf) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let default_config = Self::default_config_content();

        let mut file = fs::File::create(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        file.write_all(default_config.as_bytes())
            .map_err(|e| ConfigError::Io {
                path: path.clone(),
                source: e,
            })?;

        Ok(())
    }

    /// Generate the default config file content with comments.
    fn default_config_content() -> String {
        r##"# Engawa Configuration
#
# Colors can be specified as:
# - Named colors: Black, Red, Green, Yellow, Blue, Magenta, Cyan, Gray,
#   DarkGray, LightRed, LightGreen, LightYellow, LightBlue, LightMagenta,
#   LightCyan, White, Reset
# - Hex colors: "#RRGGBB" or "#RGB"

[site]
# Base URL of the publishing site
base_url = "http://localhost:3000"

# Local static snapshot directory (posts.json, products.json, body files).
# Uncomment to override the default of ~/.local/share/engawa/snapshot
# snapshot_dir = "/path/to/snapshot"

[paging]
# Posts per page in the blog list
blog_per_page = 7

# Products per page once the product list is paged
product_per_page = 12

# How many more products each reveal shows
reveal_step = 4

# Shown count at which a large product list switches to paged mode
paged_threshold = 12

[recommend]
# How many pinned (or random) items the home section shows per kind
product_cap = 2
post_cap = 3

[colors]
active_border = "Cyan"
inactive_border = "DarkGray"
selection_bg = "Cyan"
selection_fg = "Black"
metadata_date = "Yellow"
metadata_author = "Yellow"
status_fg = "White"
status_bg = "DarkGray"

[tags]
# Fallback color for tags not listed below
fallback = "#9b6b6b"

[tags.labels]
"AI" = "#d4877a"
"思考" = "#8a7a6b"
"コード" = "#6b7a8a"
"3D" = "#8a6b7a"
"哲学" = "#7a6b8a"
"テクノロジー" = "#d4877a"
"社会" = "#6b8a7a"
"作品" = "#7a8a6b"
"ツール" = "#6b8a8a"
"デザイン" = "#8a6b6b"
"言語" = "#6b6b8a"
"##
        .to_string()
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read/write config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}
