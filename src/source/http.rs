use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::app::Result;
use crate::domain::{ContentItem, ContentKind};
use crate::source::ContentSource;

/// The site's dynamic backing service.
pub struct HttpSource {
    client: Client,
    base: Url,
}

impl HttpSource {
    pub fn new(base_url: &str) -> Result<Self> {
        let base = Url::parse(base_url)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .gzip(true)
            .brotli(true)
            .user_agent("engawa/0.1.0")
            .build()
            .expect("Failed to build HTTP client");

        Ok(Self { client, base })
    }
}

#[async_trait]
impl ContentSource for HttpSource {
    fn name(&self) -> &'static str {
        "site"
    }

    async fn collection(&self, kind: ContentKind) -> Result<Vec<ContentItem>> {
        let url = self.base.join(kind.collection_endpoint())?;
        let response = self.client.get(url).send().await?;
        response.error_for_status_ref()?;
        let items = response.json().await?;
        Ok(items)
    }

    async fn asset(&self, path: &str) -> Result<String> {
        let url = self.base.join(path)?;
        let response = self.client.get(url).send().await?;
        response.error_for_status_ref()?;
        Ok(response.text().await?)
    }
}
