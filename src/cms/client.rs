//! HTTP client for the content service

use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::config::SiteConfig;
use crate::error::{FetchError, Result};

use super::document::DocumentPage;

/// Client for the content service REST API
#[derive(Debug, Clone)]
pub struct CmsClient {
    client: Client,
    api_url: Url,
    access_token: Option<String>,
}

impl CmsClient {
    /// Create a client from the site configuration
    pub fn new(config: &SiteConfig) -> Result<Self> {
        if config.api_url.is_empty() {
            return Err(FetchError::config(
                "api_url is not set (folhetim.yml or --api-url)",
            ));
        }
        let api_url = Url::parse(&config.api_url)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("folhetim/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            api_url,
            access_token: config.access_token.clone(),
        })
    }

    /// The configured API base URL
    pub fn api_url(&self) -> &Url {
        &self.api_url
    }

    /// Run the index query for a content type
    ///
    /// Asks for documents of `content_type`, fetching only the named data
    /// fields, `page_size` results per page.
    pub async fn query_documents(
        &self,
        content_type: &str,
        fields: &[String],
        page_size: usize,
    ) -> Result<DocumentPage> {
        let base = self.api_url.as_str().trim_end_matches('/');
        let mut url = Url::parse(&format!("{base}/documents/search"))?;

        let fetch = fields
            .iter()
            .map(|field| format!("{content_type}.{field}"))
            .collect::<Vec<_>>()
            .join(",");

        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("q", &format!("[[at(document.type,\"{content_type}\")]]"));
            pairs.append_pair("fetch", &fetch);
            pairs.append_pair("pageSize", &page_size.to_string());
            if let Some(token) = &self.access_token {
                pairs.append_pair("access_token", token);
            }
        }

        self.get_page(url.as_str()).await
    }

    /// Fetch a pagination cursor URL exactly as the service handed it out
    ///
    /// Only URLs on the configured API origin are accepted; anything else is
    /// rejected before a request is made.
    pub async fn fetch_page(&self, url: &str) -> Result<DocumentPage> {
        let parsed = Url::parse(url)?;
        if parsed.scheme() != self.api_url.scheme()
            || parsed.host_str() != self.api_url.host_str()
            || parsed.port_or_known_default() != self.api_url.port_or_known_default()
        {
            return Err(FetchError::foreign_url(url));
        }

        self.get_page(url).await
    }

    /// GET a URL and decode the body as a result page
    async fn get_page(&self, url: &str) -> Result<DocumentPage> {
        tracing::debug!("Fetching {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::status(status.as_u16(), url));
        }

        let body = response.text().await?;
        let page: DocumentPage = serde_json::from_str(&body)?;
        Ok(page)
    }
}
