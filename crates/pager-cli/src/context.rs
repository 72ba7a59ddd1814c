use std::path::Path;

use pager_core::{PagerConfig, PaginationParameters};

/// Settings shared by every subcommand.
pub struct CliContext {
    pub config: PagerConfig,
}

impl CliContext {
    /// An explicit config path must load cleanly; the default location
    /// falls back to built-in defaults.
    pub fn load(config_path: Option<&str>) -> anyhow::Result<Self> {
        let config = match config_path {
            Some(path) => PagerConfig::load_from(Path::new(path))
                .map_err(|e| anyhow::anyhow!("Failed to load config {}: {}", path, e))?,
            None => PagerConfig::load(),
        };
        tracing::debug!("Using pager config: {:?}", config);
        Ok(Self { config })
    }

    pub fn parameters(
        &self,
        current_page: usize,
        total_pages: usize,
        siblings: Option<usize>,
        boundaries: Option<usize>,
    ) -> PaginationParameters {
        PaginationParameters::from_config(current_page, total_pages, &self.config)
            .with_sibling_count(siblings.unwrap_or(self.config.sibling_count))
            .with_boundary_count(boundaries.unwrap_or(self.config.boundary_count))
    }

    pub fn page_size(&self, page_size: Option<usize>) -> usize {
        page_size.unwrap_or(self.config.page_size)
    }
}
