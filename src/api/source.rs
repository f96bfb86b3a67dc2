//! Page sources

use crate::catalog::{Book, Page};
use crate::config::PagerConfig;
use crate::error::Result;
use crate::http::{HttpClient, RequestConfig};
use crate::pagination::PageRequest;
use async_trait::async_trait;
use tracing::debug;

/// Something that can produce one window of the books collection
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch the window described by `request`
    async fn fetch_page(&self, request: &PageRequest) -> Result<Page<Book>>;
}

/// HTTP source backed by the catalog REST API
#[derive(Debug)]
pub struct BooksApi {
    client: HttpClient,
    endpoint: String,
}

impl BooksApi {
    /// Create a source for `endpoint` using an existing client
    pub fn new(client: HttpClient, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// Create a source from pager configuration
    pub fn from_config(config: &PagerConfig) -> Result<Self> {
        let client = HttpClient::with_config(config.http_config())?;
        Ok(Self::new(client, config.endpoint.clone()))
    }

    /// Collection path requests are sent to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl PageSource for BooksApi {
    async fn fetch_page(&self, request: &PageRequest) -> Result<Page<Book>> {
        debug!(
            offset = request.offset,
            limit = request.limit,
            expand = request.expand,
            "Fetching books page"
        );
        let config = RequestConfig::new().query_params(request.query_params());
        self.client.get_json(&self.endpoint, &config).await
    }
}
