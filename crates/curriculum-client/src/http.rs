//! HTTP fragment source

use std::time::Duration;

use async_trait::async_trait;
use curriculum_model::FragmentDocument;
use reqwest::{header, Client};
use tracing::{debug, info};
use url::Url;

use crate::error::{FetchError, Result};
use crate::location::{resolve_base_path, SourceLocation};
use crate::source::{FragmentSource, SourceIndex, INDEX_FILE};

/// Configuration for the HTTP source
#[derive(Debug, Clone)]
pub struct HttpSourceConfig {
    /// Scheme and host the curriculum is served from
    pub origin: String,
    /// Explicit base path; `None` or `/` enables the page-URL heuristic
    pub base_path: Option<String>,
    /// URL of the page hosting the application, when known
    pub page_url: Option<String>,
    /// Wait bound for the discovery index (default: 30)
    pub index_timeout_secs: u64,
    /// Wait bound for header-only probes (default: 10)
    pub probe_timeout_secs: u64,
}

impl Default for HttpSourceConfig {
    fn default() -> Self {
        Self {
            origin: "http://localhost:5173".to_string(),
            base_path: None,
            page_url: None,
            index_timeout_secs: 30,
            probe_timeout_secs: 10,
        }
    }
}

/// Fetches fragments from `{origin}{base_path}curriculum/`.
///
/// # Example
///
/// ```rust,no_run
/// use std::time::Duration;
/// use curriculum_client::{FragmentSource, HttpFragmentSource, HttpSourceConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let source = HttpFragmentSource::new(HttpSourceConfig {
///     origin: "https://someone.github.io".into(),
///     page_url: Some("https://someone.github.io/ita-rp/".into()),
///     ..Default::default()
/// })?;
///
/// let index = source.fetch_index().await?;
/// let fragment = source.fetch_fragment(&index.files[0], Duration::from_secs(30)).await?;
/// # Ok(())
/// # }
/// ```
pub struct HttpFragmentSource {
    location: SourceLocation,
    client: Client,
    index_timeout: Duration,
    probe_timeout: Duration,
}

impl HttpFragmentSource {
    pub fn new(config: HttpSourceConfig) -> Result<Self> {
        let page_url = config
            .page_url
            .as_deref()
            .map(Url::parse)
            .transpose()
            .map_err(|e| FetchError::InvalidConfig(format!("page url: {}", e)))?;

        let base_path = resolve_base_path(config.base_path.as_deref(), page_url.as_ref());
        let location = SourceLocation::new(&config.origin, &base_path)?;

        let mut headers = header::HeaderMap::new();
        headers.insert(header::ACCEPT, header::HeaderValue::from_static("application/json"));
        headers.insert(header::CACHE_CONTROL, header::HeaderValue::from_static("no-cache"));

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| FetchError::InvalidConfig(format!("http client: {}", e)))?;

        info!(origin = %config.origin, base_path = %base_path, "Curriculum source resolved");

        Ok(Self {
            location,
            client,
            index_timeout: Duration::from_secs(config.index_timeout_secs),
            probe_timeout: Duration::from_secs(config.probe_timeout_secs),
        })
    }

    pub fn location(&self) -> &SourceLocation {
        &self.location
    }

    /// GET a JSON body, checking status and declared content type.
    async fn get_json(&self, source_name: &str, url: &str, timeout: Duration) -> Result<Vec<u8>> {
        debug!(source = %source_name, url = %url, "Fetching");

        let response = self
            .client
            .get(url)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| transport_error(source_name, timeout, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::unavailable(
                source_name,
                Some(status.as_u16()),
                format!("HTTP {}", status),
            ));
        }

        if let Some(content_type) = response.headers().get(header::CONTENT_TYPE) {
            let content_type = content_type.to_str().unwrap_or_default().to_ascii_lowercase();
            if !content_type.contains("application/json") {
                return Err(FetchError::NotJson {
                    source_name: source_name.to_string(),
                    content_type,
                });
            }
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| transport_error(source_name, timeout, e))?;
        Ok(body.to_vec())
    }
}

fn transport_error(source_name: &str, after: Duration, error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout {
            source_name: source_name.to_string(),
            after,
        }
    } else {
        FetchError::unavailable(source_name, error.status().map(|s| s.as_u16()), error.to_string())
    }
}

#[async_trait]
impl FragmentSource for HttpFragmentSource {
    fn describe(&self) -> String {
        self.location.index_url()
    }

    async fn fetch_index(&self) -> Result<SourceIndex> {
        let url = self.location.index_url();
        let body = self.get_json(INDEX_FILE, &url, self.index_timeout).await?;
        let value: serde_json::Value =
            serde_json::from_slice(&body).map_err(|e| FetchError::malformed(INDEX_FILE, e.to_string()))?;
        SourceIndex::from_value(&value)
    }

    async fn fetch_fragment(&self, source_name: &str, timeout: Duration) -> Result<FragmentDocument> {
        let url = self.location.fragment_url(source_name);
        let body = self.get_json(source_name, &url, timeout).await?;
        FragmentDocument::from_slice(&body).map_err(|e| FetchError::malformed(source_name, e.to_string()))
    }

    async fn probe_size(&self, source_name: &str) -> Result<Option<u64>> {
        let url = self.location.fragment_url(source_name);
        let response = self
            .client
            .head(&url)
            .timeout(self.probe_timeout)
            .send()
            .await
            .map_err(|e| transport_error(source_name, self.probe_timeout, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::unavailable(
                source_name,
                Some(status.as_u16()),
                format!("HTTP {}", status),
            ));
        }

        Ok(response
            .headers()
            .get(header::CONTENT_LENGTH)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok()))
    }
}
