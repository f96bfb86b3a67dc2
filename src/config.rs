//! Pager configuration
//!
//! `PagerConfig` describes where the books collection lives and how it is
//! paged. It is normally loaded from YAML:
//!
//! ```yaml
//! base_url: http://localhost:8000
//! endpoint: /api/v1/books/
//! limit: 10
//! expand: true
//! offset_policy: clamp
//! timeout_secs: 10
//! headers:
//!   Accept-Language: en
//! ```

use crate::error::{Error, Result};
use crate::http::{default_user_agent, HttpClientConfig};
use crate::pagination::{OffsetPolicy, DEFAULT_LIMIT};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

/// Books endpoint relative to the base URL
pub const DEFAULT_ENDPOINT: &str = "/api/v1/books/";

/// Complete pager configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagerConfig {
    /// Base URL of the catalog service
    pub base_url: String,

    /// Books collection path
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Books per page
    #[serde(default = "default_limit")]
    pub limit: u32,

    /// Request embedded author and category records
    #[serde(default = "default_expand")]
    pub expand: bool,

    /// Negative offset handling
    #[serde(default)]
    pub offset_policy: OffsetPolicy,

    /// Request timeout in seconds (unset keeps the transport default)
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// User agent override
    #[serde(default)]
    pub user_agent: Option<String>,

    /// Extra headers sent with every request
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

fn default_expand() -> bool {
    true
}

impl PagerConfig {
    /// Create a config with defaults for everything but the base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            endpoint: default_endpoint(),
            limit: default_limit(),
            expand: default_expand(),
            offset_policy: OffsetPolicy::default(),
            timeout_secs: None,
            user_agent: None,
            headers: HashMap::new(),
        }
    }

    /// Parse and validate a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Check field values
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(Error::missing_field("base_url"));
        }
        let url = url::Url::parse(&self.base_url)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::invalid_value(
                "base_url",
                format!("unsupported scheme '{}'", url.scheme()),
            ));
        }
        if self.limit == 0 {
            return Err(Error::invalid_value("limit", "must be greater than zero"));
        }
        if self.endpoint.trim().is_empty() {
            return Err(Error::missing_field("endpoint"));
        }
        Ok(())
    }

    /// Request timeout as a duration
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Transport configuration derived from this config
    pub fn http_config(&self) -> HttpClientConfig {
        let mut builder = HttpClientConfig::builder()
            .base_url(&self.base_url)
            .user_agent(self.user_agent.clone().unwrap_or_else(default_user_agent));
        if let Some(timeout) = self.timeout() {
            builder = builder.timeout(timeout);
        }
        for (key, value) in &self.headers {
            builder = builder.header(key, value);
        }
        builder.build()
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
