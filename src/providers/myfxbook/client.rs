//! HTTP client for fetching myfxbook pages.

use std::time::Duration;

use reqwest::Client as HttpClient;
use reqwest::header::{HeaderMap, HeaderValue};
use tracing::debug;

use crate::dom::{self, Document};
use crate::providers::{ProviderError, Result};

/// HTTP request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// Page fetcher with the request headers the source site expects.
///
/// The paging endpoint serves its rows only to requests that look like the
/// site's own XHR calls, so every request carries a browser-like header set.
pub(super) struct Client {
    http_client: HttpClient,
}

impl Client {
    pub fn new() -> Self {
        let http_client = HttpClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .default_headers(default_headers())
            .build()
            .expect("failed to build http client");

        Self { http_client }
    }

    /// Fetches a page and parses it into a document tree.
    pub async fn fetch_document(&self, url: &str) -> Result<Document> {
        debug!(url, "fetching page");

        let response = self.http_client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response.text().await?;
        debug!(url, bytes = body.len(), "page fetched");
        Ok(dom::parse(&body))
    }
}

fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert("accept", HeaderValue::from_static("*/*"));
    headers.insert(
        "user-agent",
        HeaderValue::from_static(
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
             (KHTML, like Gecko) Chrome/83.0.4103.97 Safari/537.36 Edg/83.0.478.50",
        ),
    );
    headers.insert("x-requested-with", HeaderValue::from_static("XMLHttpRequest"));
    headers.insert("sec-fetch-site", HeaderValue::from_static("same-origin"));
    headers.insert("sec-fetch-mode", HeaderValue::from_static("cors"));
    headers.insert("sec-fetch-dest", HeaderValue::from_static("empty"));
    headers.insert(
        "referer",
        HeaderValue::from_static("https://www.myfxbook.com/"),
    );
    headers.insert(
        "accept-language",
        HeaderValue::from_static("uk,en;q=0.9,en-GB;q=0.8,en-US;q=0.7"),
    );
    headers
}
