use std::path::PathBuf;

use async_trait::async_trait;

use crate::app::Result;
use crate::domain::{ContentItem, ContentKind};
use crate::source::ContentSource;

/// Static snapshot of the site's content on local disk.
///
/// Layout mirrors the site's public directory: `posts.json` and
/// `products.json` at the root, legacy body files under `posts/` and
/// `products/`. A missing snapshot file is absence, not an error.
pub struct SnapshotSource {
    root: PathBuf,
}

impl SnapshotSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl ContentSource for SnapshotSource {
    fn name(&self) -> &'static str {
        "snapshot"
    }

    async fn collection(&self, kind: ContentKind) -> Result<Vec<ContentItem>> {
        let path = self.root.join(kind.snapshot_file());
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = tokio::fs::read_to_string(&path).await?;
        Ok(serde_json::from_str(&content)?)
    }

    async fn asset(&self, path: &str) -> Result<String> {
        Ok(tokio::fs::read_to_string(self.root.join(path)).await?)
    }
}
