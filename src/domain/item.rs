use chrono::DateTime;
use serde::{Deserialize, Serialize};

/// Which collection an item belongs to.
///
/// The site serves two independent streams with different presentation
/// policies; the kind also determines the deep-link path segment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    #[default]
    Post,
    Product,
}

impl ContentKind {
    /// Path segment used in deep links: `/post/{key}` or `/product/{key}`.
    pub fn path_segment(self) -> &'static str {
        match self {
            ContentKind::Post => "post",
            ContentKind::Product => "product",
        }
    }

    /// Collection endpoint on the dynamic backing service.
    pub fn collection_endpoint(self) -> &'static str {
        match self {
            ContentKind::Post => "api/posts",
            ContentKind::Product => "api/products",
        }
    }

    /// File name of the static snapshot for this collection.
    pub fn snapshot_file(self) -> &'static str {
        match self {
            ContentKind::Post => "posts.json",
            ContentKind::Product => "products.json",
        }
    }

    /// Directory holding legacy per-item body files.
    pub fn asset_dir(self) -> &'static str {
        match self {
            ContentKind::Post => "posts",
            ContentKind::Product => "products",
        }
    }
}

/// Author as served by the dynamic endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Author {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// A post or product.
///
/// One serde model absorbs both the dynamic endpoint shape and the legacy
/// static snapshot shape (products use `name`/`desc`, snapshots carry
/// `slug`/`date`/`file`). Missing optional fields default instead of
/// failing the whole collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentItem {
    pub id: String,
    pub slug: Option<String>,
    /// Attached by the resolver; not part of the wire format.
    #[serde(skip)]
    pub kind: ContentKind,
    #[serde(alias = "name")]
    pub title: String,
    #[serde(alias = "excerpt", alias = "desc")]
    pub summary: String,
    #[serde(alias = "content")]
    pub body: Option<String>,
    pub tags: Vec<String>,
    pub published: bool,
    pub pinned: bool,
    #[serde(alias = "createdAt")]
    pub created_at: Option<String>,
    #[serde(alias = "updatedAt")]
    pub updated_at: Option<String>,
    /// Legacy snapshot date, preferred over `created_at` when present.
    pub date: Option<String>,
    pub author: Option<Author>,
    /// Legacy per-item body file reference.
    pub file: Option<String>,
    pub color: Option<String>,
}

impl Default for ContentItem {
    fn default() -> Self {
        Self {
            id: String::new(),
            slug: None,
            kind: ContentKind::default(),
            title: String::new(),
            summary: String::new(),
            body: None,
            tags: Vec::new(),
            published: true,
            pinned: false,
            created_at: None,
            updated_at: None,
            date: None,
            author: None,
            file: None,
            color: None,
        }
    }
}

impl ContentItem {
    /// Preferred deep-link key: slug when present, id otherwise.
    pub fn key(&self) -> &str {
        self.slug
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(&self.id)
    }

    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            "(Untitled)"
        } else {
            &self.title
        }
    }

    /// Site date format: `YYYY.MM.DD`.
    ///
    /// Accepts full RFC 3339 timestamps from the dynamic service as well
    /// as plain `YYYY-MM-DD` strings from snapshots.
    pub fn display_date(&self) -> String {
        let raw = self
            .date
            .as_deref()
            .or(self.created_at.as_deref())
            .unwrap_or("");
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return dt.format("%Y.%m.%d").to_string();
        }
        if raw.chars().count() > 10 {
            raw.chars().take(10).collect::<String>().replace('-', ".")
        } else {
            raw.replace('-', ".")
        }
    }

    pub fn author_name(&self) -> Option<&str> {
        self.author.as_ref().and_then(|a| a.name.as_deref())
    }
}
