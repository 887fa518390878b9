use crate::feed::parser::{parse_feed, FeedPayload};
use futures::future::BoxFuture;
use futures::{FutureExt, StreamExt};
use reqwest::redirect::Policy;
use std::time::Duration;
use thiserror::Error;
use url::Url;

const MAX_FEED_SIZE: usize = 10 * 1024 * 1024; // 10MB

/// Errors that can occur while fetching a feed.
///
/// The loader treats every variant the same way: the load failed and the
/// message goes to the error region.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The URL string could not be parsed
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    /// The URL uses a scheme other than http or https
    #[error("Unsupported scheme: {0} (only http/https allowed)")]
    UnsupportedScheme(String),
    /// Network-level error (DNS, connection, TLS, etc.)
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),
    /// HTTP response with non-2xx status code
    #[error("HTTP error: status {0}")]
    HttpStatus(u16),
    /// Request exceeded the configured timeout
    #[error("Request timed out")]
    Timeout,
    /// Feed XML could not be parsed as RSS or Atom
    #[error("Parse error: {0}")]
    Parse(String),
    /// Response body exceeded the 10MB size limit
    #[error("Response too large")]
    ResponseTooLarge,
    /// Response was incomplete (received fewer bytes than Content-Length)
    #[error("Incomplete response: expected {expected} bytes, received {received}")]
    IncompleteResponse { expected: u64, received: usize },
    /// The fetch task panicked
    #[error("Internal error: {0}")]
    TaskPanicked(String),
}

/// Source of feed payloads.
///
/// Returned futures are `'static` so the loader can move them onto a tokio
/// task without borrowing the transport.
pub trait Transport: Send + Sync {
    fn fetch(&self, url: &str) -> BoxFuture<'static, Result<FeedPayload, FetchError>>;
}

/// Create a custom redirect policy with loop detection and limited hops.
fn create_redirect_policy() -> Policy {
    Policy::custom(|attempt| {
        if attempt.previous().len() >= 3 {
            return attempt.error("Too many redirects (max 3)");
        }

        let url = attempt.url();
        for prev in attempt.previous() {
            if prev.as_str() == url.as_str() {
                return attempt.error("Redirect loop detected");
            }
        }

        tracing::debug!(
            from = %attempt.previous().last().map(|u| u.as_str()).unwrap_or("initial"),
            to = %url,
            hop = attempt.previous().len() + 1,
            "Following redirect"
        );

        attempt.follow()
    })
}

/// HTTP transport backed by a shared reqwest client.
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .redirect(create_redirect_policy())
            .pool_max_idle_per_host(4)
            .pool_idle_timeout(Duration::from_secs(30))
            .tcp_keepalive(Duration::from_secs(60))
            .build()?;
        Ok(Self { client, timeout })
    }
}

impl Transport for HttpTransport {
    fn fetch(&self, url: &str) -> BoxFuture<'static, Result<FeedPayload, FetchError>> {
        let client = self.client.clone();
        let timeout = self.timeout;
        let url = url.to_string();
        async move { fetch_payload(&client, &url, timeout).await }.boxed()
    }
}

async fn fetch_payload(
    client: &reqwest::Client,
    url: &str,
    timeout: Duration,
) -> Result<FeedPayload, FetchError> {
    let parsed = Url::parse(url).map_err(|e| FetchError::InvalidUrl(e.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => {}
        scheme => return Err(FetchError::UnsupportedScheme(scheme.to_owned())),
    }

    let response = tokio::time::timeout(timeout, client.get(parsed).send())
        .await
        .map_err(|_| FetchError::Timeout)?
        .map_err(FetchError::Network)?;

    if !response.status().is_success() {
        return Err(FetchError::HttpStatus(response.status().as_u16()));
    }

    let bytes = tokio::time::timeout(timeout, read_limited_bytes(response, MAX_FEED_SIZE))
        .await
        .map_err(|_| FetchError::Timeout)??;

    let payload = parse_feed(&bytes).map_err(|e| FetchError::Parse(e.to_string()))?;
    tracing::debug!(
        url = %url,
        entries = payload.entries.len(),
        bytes = bytes.len(),
        "Fetched feed"
    );
    Ok(payload)
}

async fn read_limited_bytes(
    response: reqwest::Response,
    limit: usize,
) -> Result<Vec<u8>, FetchError> {
    let expected_length = response.content_length();

    // Fast path: check Content-Length header
    if let Some(len) = expected_length {
        if len as usize > limit {
            return Err(FetchError::ResponseTooLarge);
        }
    }

    let mut bytes = Vec::new();
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(FetchError::Network)?;
        if bytes.len().saturating_add(chunk.len()) > limit {
            return Err(FetchError::ResponseTooLarge);
        }
        bytes.extend_from_slice(&chunk);
    }

    if let Some(expected) = expected_length {
        if (bytes.len() as u64) < expected {
            return Err(FetchError::IncompleteResponse {
                expected,
                received: bytes.len(),
            });
        }
    }

    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const VALID_RSS: &str = r#"<?xml version="1.0"?>
<rss version="2.0"><channel>
    <title>Mock</title>
    <item><guid>1</guid><title>Test</title><link>https://example.com/1</link></item>
</channel></rss>"#;

    fn transport() -> HttpTransport {
        HttpTransport::new(Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/feed"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(VALID_RSS)
                    .insert_header("Content-Type", "application/xml"),
            )
            .mount(&mock_server)
            .await;

        let payload = transport()
            .fetch(&format!("{}/feed", mock_server.uri()))
            .await
            .unwrap();
        assert_eq!(payload.title.as_deref(), Some("Mock"));
        assert_eq!(payload.entries.len(), 1);
    }

    #[tokio::test]
    async fn test_fetch_404_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let result = transport()
            .fetch(&format!("{}/feed", mock_server.uri()))
            .await;
        match result {
            Err(FetchError::HttpStatus(404)) => {}
            other => panic!("Expected HttpStatus(404), got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_500_is_not_retried() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&mock_server)
            .await;

        let result = transport()
            .fetch(&format!("{}/feed", mock_server.uri()))
            .await;
        assert!(matches!(result, Err(FetchError::HttpStatus(500))));
    }

    #[tokio::test]
    async fn test_malformed_feed_parse_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<not valid xml"))
            .mount(&mock_server)
            .await;

        let result = transport()
            .fetch(&format!("{}/feed", mock_server.uri()))
            .await;
        assert!(matches!(result, Err(FetchError::Parse(_))));
    }

    #[tokio::test]
    async fn test_unsupported_scheme() {
        let result = transport().fetch("htttp://thisistest.com/").await;
        match result {
            Err(FetchError::UnsupportedScheme(s)) => assert_eq!(s, "htttp"),
            other => panic!("Expected UnsupportedScheme, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_invalid_url() {
        let result = transport().fetch("not a url").await;
        assert!(matches!(result, Err(FetchError::InvalidUrl(_))));
    }

    #[tokio::test]
    async fn test_slow_response_times_out() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(VALID_RSS)
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&mock_server)
            .await;

        let transport = HttpTransport::new(Duration::from_millis(50)).unwrap();
        let result = transport
            .fetch(&format!("{}/feed", mock_server.uri()))
            .await;
        assert!(matches!(result, Err(FetchError::Timeout)));
    }
}
