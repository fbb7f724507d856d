// src/fetch/http.rs
// =============================================================================
// This module downloads pages and scripts over HTTP.
//
// Key functionality:
// - One reqwest Client for the whole run (connection pooling)
// - The same timeout on every request
// - TLS certificate errors are ignored, since targets often have
//   self-signed or expired certificates
// - The body is returned whatever the status code is (a 404 page can
//   still reference scripts)
// - Failures are sorted into FetchError variants (timeout, connect, ...)
//
// Rust concepts:
// - Traits + async_trait: so the pipeline can use a fake fetcher in tests
// - thiserror: derives std::error::Error and Display for our error enum
// =============================================================================

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

// Why a fetch failed
//
// Request failures carry the URL so log lines make sense on their own.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} timed out")]
    Timeout { url: String },
    #[error("could not connect to {url}: {reason}")]
    Connect { url: String, reason: String },
    #[error("too many redirects for {url}")]
    Redirect { url: String },
    #[error("failed to read body of {url}: {reason}")]
    Body { url: String, reason: String },
    #[error("invalid URL {url}")]
    InvalidUrl { url: String },
    #[error("request to {url} failed: {reason}")]
    Request { url: String, reason: String },
    #[error("could not build HTTP client: {0}")]
    Client(String),
}

/// Anything that can turn a URL into a response body.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

// The real, network-backed fetcher
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    // Creates a fetcher
    //
    // Parameters:
    //   timeout: applied to every request (connect + body)
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .danger_accept_invalid_certs(true)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(HttpFetcher { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| categorize_error(url, e))?;

        debug!(url, status = response.status().as_u16(), "fetched");

        let bytes = response.bytes().await.map_err(|e| FetchError::Body {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

// Sorts a reqwest error into one of our FetchError variants
fn categorize_error(url: &str, error: reqwest::Error) -> FetchError {
    let url = url.to_string();

    if error.is_timeout() {
        FetchError::Timeout { url }
    } else if error.is_redirect() {
        FetchError::Redirect { url }
    } else if error.is_builder() {
        FetchError::InvalidUrl { url }
    } else if error.is_connect() {
        FetchError::Connect {
            url,
            reason: error.to_string(),
        }
    } else {
        FetchError::Request {
            url,
            reason: error.to_string(),
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why #[async_trait]?
//    - It rewrites `async fn` in traits into boxed futures
//    - That makes the trait usable with generics and with dyn Fetcher alike
//
// 2. What is danger_accept_invalid_certs?
//    - It turns off certificate validation for every request
//    - Fine for a recon tool pointed at test hosts, never for normal clients
//
// 3. Why from_utf8_lossy?
//    - Minified scripts are sometimes not valid UTF-8
//    - Lossy decoding replaces bad bytes instead of failing the whole file
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_fetch_returns_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/app.js"))
            .respond_with(ResponseTemplate::new(200).set_body_string("var a = 1;"))
            .mount(&server)
            .await;

        let fetcher = HttpFetcher::new(Duration::from_secs(5)).unwrap();
        let body = fetcher.fetch(&format!("{}/app.js", server.uri())).await.unwrap();
        assert_eq!(body, "var a = 1;");
    }

    #[tokio::test]
    async fn test_fetch_keeps_body_on_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_string("not here"))
            .mount(&server)
            .await;

        let fetcher = HttpFetcher::new(Duration::from_secs(5)).unwrap();
        let body = fetcher.fetch(&format!("{}/missing.js", server.uri())).await.unwrap();
        assert_eq!(body, "not here");
    }

    #[tokio::test]
    async fn test_fetch_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
            .mount(&server)
            .await;

        let fetcher = HttpFetcher::new(Duration::from_millis(200)).unwrap();
        let result = fetcher.fetch(&server.uri()).await;
        assert!(matches!(result, Err(FetchError::Timeout { .. })));
    }

    #[tokio::test]
    async fn test_fetch_invalid_url() {
        let fetcher = HttpFetcher::new(Duration::from_secs(1)).unwrap();
        assert!(fetcher.fetch("not a url").await.is_err());
    }
}
