pub mod http;
pub mod snapshot;

pub use http::HttpSource;
pub use snapshot::SnapshotSource;

use std::sync::Arc;

use async_trait::async_trait;

use crate::app::{EngawaError, Result};
use crate::domain::{ContentItem, ContentKind};
use crate::render;

/// Maximum derived-summary length when the service sends a body without
/// an excerpt.
const EXCERPT_CHARS: usize = 100;

/// One place content can come from.
///
/// A source either yields the data or it doesn't; deciding what to do
/// next is the resolver's job. An `Ok` empty collection counts as
/// absence and advances the chain just like an error.
#[async_trait]
pub trait ContentSource {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// The full collection for a kind.
    async fn collection(&self, kind: ContentKind) -> Result<Vec<ContentItem>>;

    /// A raw asset (legacy body file), addressed relative to the source root.
    async fn asset(&self, path: &str) -> Result<String>;
}

/// Resolves content through an ordered list of fallback sources.
///
/// The canonical chain is the dynamic site endpoints first, the static
/// snapshot second. Nothing is cached and nothing is retried within a
/// single resolution; callers re-run the whole chain on each call.
pub struct ContentResolver {
    sources: Vec<Arc<dyn ContentSource + Send + Sync>>,
}

impl ContentResolver {
    pub fn new(sources: Vec<Arc<dyn ContentSource + Send + Sync>>) -> Self {
        Self { sources }
    }

    /// Resolve a collection, stopping at the first source that yields a
    /// non-empty result. Exhausting every source degrades to an empty
    /// collection; the rest of the UI stays interactive.
    pub async fn resolve(&self, kind: ContentKind) -> Vec<ContentItem> {
        for source in &self.sources {
            match source.collection(kind).await {
                Ok(items) if !items.is_empty() => {
                    tracing::debug!(
                        "resolved {} {:?} items from {}",
                        items.len(),
                        kind,
                        source.name()
                    );
                    return items.into_iter().map(|i| finalize(i, kind)).collect();
                }
                Ok(_) => {
                    tracing::debug!("{} has no {:?} entries", source.name(), kind);
                }
                Err(e) => {
                    tracing::warn!("{} failed for {:?}: {}", source.name(), kind, e);
                }
            }
        }

        tracing::warn!("no source could provide the {:?} collection", kind);
        Vec::new()
    }

    /// Resolve one item's body as terminal-renderable text.
    ///
    /// Chain: body embedded in the item, then the item's explicit file
    /// reference, then `{slug-or-id}.md`. Products whose chain comes up
    /// empty get a body synthesized from their own fields instead of an
    /// error, since the site never stores product bodies separately.
    pub async fn resolve_body(&self, item: &ContentItem) -> Result<String> {
        if let Some(body) = item.body.as_deref() {
            if !body.trim().is_empty() {
                return Ok(render::to_plain_text(body));
            }
        }

        if let Some(file) = item.file.as_deref() {
            let path = format!("{}/{}", item.kind.asset_dir(), file);
            if let Some(text) = self.first_asset(&path).await {
                return Ok(render::to_plain_text(&text));
            }
        }

        let named = format!("{}/{}.md", item.kind.asset_dir(), item.key());
        if let Some(text) = self.first_asset(&named).await {
            return Ok(render::to_plain_text(&text));
        }

        if item.kind == ContentKind::Product {
            return Ok(product_body(item));
        }

        Err(EngawaError::SourceExhausted(item.key().to_string()))
    }

    /// First source that yields a non-empty asset, or None.
    async fn first_asset(&self, path: &str) -> Option<String> {
        for source in &self.sources {
            match source.asset(path).await {
                Ok(text) if !text.trim().is_empty() => return Some(text),
                Ok(_) => {}
                Err(e) => {
                    tracing::debug!("asset {} unavailable from {}: {}", path, source.name(), e);
                }
            }
        }
        None
    }
}

/// Attach the kind and fill fields the wire format may omit.
fn finalize(mut item: ContentItem, kind: ContentKind) -> ContentItem {
    item.kind = kind;
    if item.summary.is_empty() {
        if let Some(body) = item.body.as_deref() {
            item.summary = render::excerpt(body, EXCERPT_CHARS);
        }
    }
    item
}

/// Overlay body for a product with no stored body of its own.
fn product_body(item: &ContentItem) -> String {
    if item.summary.is_empty() {
        item.display_title().to_string()
    } else {
        format!("{}\n\n{}", item.display_title(), item.summary)
    }
}
