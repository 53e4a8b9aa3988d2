use std::sync::Arc;

use crate::app::error::Result;
use crate::config::Config;
use crate::source::http::HttpSource;
use crate::source::snapshot::SnapshotSource;
use crate::source::{ContentResolver, ContentSource};

pub struct AppContext {
    pub config: Config,
    pub resolver: Arc<ContentResolver>,
}

impl AppContext {
    /// Build the canonical source chain from the configuration:
    /// the dynamic site endpoints first, the static snapshot second.
    pub fn new(config: Config) -> Result<Self> {
        let mut sources: Vec<Arc<dyn ContentSource + Send + Sync>> =
            vec![Arc::new(HttpSource::new(&config.site.base_url)?)];
        if let Some(dir) = config.site.snapshot_dir() {
            sources.push(Arc::new(SnapshotSource::new(dir)));
        }

        Ok(Self {
            resolver: Arc::new(ContentResolver::new(sources)),
            config,
        })
    }

    /// Build a context over an explicit source chain. Used by tests and
    /// by anything that wants to bypass the configured site.
    pub fn with_sources(
        config: Config,
        sources: Vec<Arc<dyn ContentSource + Send + Sync>>,
    ) -> Self {
        Self {
            resolver: Arc::new(ContentResolver::new(sources)),
            config,
        }
    }
}
