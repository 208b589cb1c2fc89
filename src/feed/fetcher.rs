use futures::StreamExt;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use std::time::{Duration, Instant};
use thiserror::Error;

use crate::config::Config;

const MAX_FEED_SIZE: usize = 10 * 1024 * 1024; // 10MB

/// Media types a feed may be served as, most specific first.
const FEED_ACCEPT: &str =
    "application/rss+xml, application/atom+xml, application/xml, text/xml, */*";

/// Errors that can occur while retrieving the feed.
///
/// Covers everything between "send the request" and "have non-empty text
/// in hand". Parsing failures are reported separately by the parser.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network-level error (DNS, connection, TLS, etc.)
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),
    /// Non-2xx HTTP response
    #[error("HTTP {status}: {reason}")]
    HttpStatus { status: u16, reason: String },
    /// The exchange did not complete within the configured timeout
    #[error("Request timed out after {}s", .0.as_secs())]
    Timeout(Duration),
    /// Response body exceeded the 10MB size limit
    #[error("Response too large")]
    ResponseTooLarge,
    /// Body was empty or only whitespace
    #[error("Empty response")]
    EmptyResponse,
}

impl FetchError {
    /// Short machine-readable label for health reporting.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Network(_) => "network",
            FetchError::HttpStatus { .. } => "http_status",
            FetchError::Timeout(_) => "timeout",
            FetchError::ResponseTooLarge => "too_large",
            FetchError::EmptyResponse => "empty_response",
        }
    }

    fn from_status(status: reqwest::StatusCode) -> Self {
        FetchError::HttpStatus {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
        }
    }
}

/// Outcome of a HEAD request against the feed URL.
#[derive(Debug, Clone)]
pub struct ProbeReport {
    pub status: u16,
    pub status_text: String,
    /// True for 2xx responses
    pub accessible: bool,
    pub content_type: Option<String>,
    pub elapsed: Duration,
}

/// HTTP access to the one configured feed.
///
/// Makes exactly one attempt per call. Retry policy, if any, belongs to
/// the caller.
#[derive(Debug, Clone)]
pub struct FeedFetcher {
    client: reqwest::Client,
    url: String,
    timeout: Duration,
    probe_timeout: Duration,
}

impl FeedFetcher {
    /// Build a fetcher with its own client, identified by the configured User-Agent.
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()?;
        Ok(Self::with_client(
            client,
            &config.feed_url,
            config.fetch_timeout(),
            config.probe_timeout(),
        ))
    }

    /// Build a fetcher around an existing client.
    pub fn with_client(
        client: reqwest::Client,
        url: impl Into<String>,
        timeout: Duration,
        probe_timeout: Duration,
    ) -> Self {
        Self {
            client,
            url: url.into(),
            timeout,
            probe_timeout,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetches the feed body as text.
    ///
    /// The timeout covers the whole exchange, body included.
    ///
    /// # Errors
    ///
    /// - [`FetchError::Timeout`] - exchange exceeded the configured timeout
    /// - [`FetchError::Network`] - connection or TLS errors
    /// - [`FetchError::HttpStatus`] - non-2xx HTTP response
    /// - [`FetchError::ResponseTooLarge`] - body exceeded 10MB
    /// - [`FetchError::EmptyResponse`] - body empty or whitespace only
    pub async fn fetch(&self) -> Result<String, FetchError> {
        tracing::debug!(url = %self.url, "Fetching feed");

        let bytes = tokio::time::timeout(self.timeout, self.fetch_bytes())
            .await
            .map_err(|_| FetchError::Timeout(self.timeout))??;

        // Feeds that lie about their encoding still parse; bad bytes become U+FFFD
        let text = String::from_utf8_lossy(&bytes).into_owned();
        if text.trim().is_empty() {
            return Err(FetchError::EmptyResponse);
        }

        tracing::debug!(url = %self.url, length = text.len(), "Feed content received");
        Ok(text)
    }

    async fn fetch_bytes(&self) -> Result<Vec<u8>, FetchError> {
        let response = self
            .client
            .get(&self.url)
            .header(ACCEPT, FEED_ACCEPT)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FetchError::from_status(response.status()));
        }

        tracing::debug!(
            url = %self.url,
            content_type = ?response.headers().get(CONTENT_TYPE),
            "Feed response headers"
        );

        read_limited_bytes(response, MAX_FEED_SIZE).await
    }

    /// Lightweight reachability check with HEAD.
    ///
    /// Only transport failures are errors; any HTTP status, including 4xx
    /// and 5xx, is reported in the [`ProbeReport`].
    pub async fn probe(&self) -> Result<ProbeReport, FetchError> {
        let started = Instant::now();

        let response = tokio::time::timeout(
            self.probe_timeout,
            self.client
                .head(&self.url)
                .header(ACCEPT, FEED_ACCEPT)
                .send(),
        )
        .await
        .map_err(|_| FetchError::Timeout(self.probe_timeout))??;

        let status = response.status();
        let report = ProbeReport {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or("Unknown").to_string(),
            accessible: status.is_success(),
            content_type: response
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string),
            elapsed: started.elapsed(),
        };

        tracing::debug!(
            url = %self.url,
            status = report.status,
            elapsed_ms = report.elapsed.as_millis() as u64,
            "Feed probe completed"
        );
        Ok(report)
    }
}

async fn read_limited_bytes(
    response: reqwest::Response,
    limit: usize,
) -> Result<Vec<u8>, FetchError> {
    // Fast path: check Content-Length header
    if let Some(len) = response.content_length() {
        if len as usize > limit {
            return Err(FetchError::ResponseTooLarge);
        }
    }

    let mut bytes = Vec::new();
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        if bytes.len().saturating_add(chunk.len()) > limit {
            return Err(FetchError::ResponseTooLarge);
        }
        bytes.extend_from_slice(&chunk);
    }

    Ok(bytes)
}
