use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::{PagerError, PagerResult};

pub const DEFAULT_SIBLING_COUNT: usize = 1;
pub const DEFAULT_BOUNDARY_COUNT: usize = 1;
pub const DEFAULT_PAGE_SIZE: usize = 20;

fn default_sibling_count() -> usize {
    DEFAULT_SIBLING_COUNT
}

fn default_boundary_count() -> usize {
    DEFAULT_BOUNDARY_COUNT
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

/// Windowing defaults shared by every paginated list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagerConfig {
    #[serde(default = "default_sibling_count")]
    pub sibling_count: usize,
    #[serde(default = "default_boundary_count")]
    pub boundary_count: usize,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            sibling_count: DEFAULT_SIBLING_COUNT,
            boundary_count: DEFAULT_BOUNDARY_COUNT,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PagerConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/pager/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("pager/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("pager\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    /// Load from the default location, falling back to defaults on any failure.
    pub fn load() -> Self {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                match Self::load_from(&config_path) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!("Ignoring config at {}: {}", config_path.display(), e)
                    }
                }
            }
        }
        Self::default()
    }

    /// Load from an explicit path. Unlike [`PagerConfig::load`], failures are reported.
    pub fn load_from(path: &Path) -> PagerResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> PagerResult<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| PagerError::Config(e.to_string()))?;
        if config.page_size == 0 {
            return Err(PagerError::Config("page_size must be at least 1".into()));
        }
        Ok(config)
    }
}
