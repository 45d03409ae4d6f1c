//! Page fetch transport: the request/response contract and the HTTP
//! implementation.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{ClientError, Result};

/// User agent string identifying this client.
const USER_AGENT: &str = concat!("readmore-client/", env!("CARGO_PKG_VERSION"));

/// HTTP timeout in seconds.
const HTTP_TIMEOUT_SECS: u64 = 30;

/// Request for one result page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    /// 1-based page to fetch.
    pub page: usize,
    pub page_size: usize,
    /// Anti-forgery token supplied by the host configuration.
    pub csrf_token: String,
}

/// Page envelope returned by the fetch service.
///
/// Successful envelopes carry fragments plus the page actually served (for
/// drift detection); failure envelopes carry `ok: false` and a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse {
    pub ok: bool,
    #[serde(default)]
    pub fragments: Vec<String>,
    #[serde(default)]
    pub max_page: usize,
    #[serde(default)]
    pub current_page: usize,
    #[serde(default)]
    pub message: Option<String>,
}

/// Trait for page fetchers, enabling mocking in tests.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch one page. Errors are transport-class only; service-level
    /// rejections come back as `ok:false` envelopes.
    async fn fetch(&self, request: &PageRequest) -> Result<PageResponse>;
}

/// HTTP fetcher posting JSON to the page fetch service.
#[derive(Debug, Clone)]
pub struct HttpPageFetcher {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpPageFetcher {
    /// Create a fetcher for the given endpoint URL.
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch(&self, request: &PageRequest) -> Result<PageResponse> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = %status, page = request.page, "page fetch rejected");
            return Err(ClientError::Status(status.as_u16()));
        }

        response
            .json::<PageResponse>()
            .await
            .map_err(|e| ClientError::ResponseParse(e.to_string()))
    }
}

/// Test utilities for the page fetcher.
#[cfg(any(test, feature = "test-utils"))]
pub mod test_support {
    use super::*;
    use std::sync::Mutex;

    /// Mock fetcher for testing. Returns pre-configured responses in order
    /// and records every request it sees.
    pub struct MockPageFetcher {
        responses: Mutex<Vec<Result<PageResponse>>>,
        requests: Mutex<Vec<PageRequest>>,
    }

    impl MockPageFetcher {
        pub fn new(responses: Vec<Result<PageResponse>>) -> Self {
            // Reverse so we can pop from the end
            let mut responses = responses;
            responses.reverse();
            Self {
                responses: Mutex::new(responses),
                requests: Mutex::new(Vec::new()),
            }
        }

        /// One successful page with the given fragments.
        pub fn page(fragments: Vec<&str>, current_page: usize, max_page: usize) -> PageResponse {
            PageResponse {
                ok: true,
                fragments: fragments.into_iter().map(str::to_string).collect(),
                max_page,
                current_page,
                message: None,
            }
        }

        /// An `ok:false` envelope with the given message.
        pub fn failure(message: &str) -> PageResponse {
            PageResponse {
                ok: false,
                fragments: Vec::new(),
                max_page: 0,
                current_page: 0,
                message: Some(message.to_string()),
            }
        }

        /// Requests observed so far, in order.
        pub fn requests(&self) -> Vec<PageRequest> {
            self.requests
                .lock()
                .map(|r| r.clone())
                .unwrap_or_default()
        }
    }

    #[async_trait]
    impl PageFetcher for MockPageFetcher {
        async fn fetch(&self, request: &PageRequest) -> Result<PageResponse> {
            if let Ok(mut requests) = self.requests.lock() {
                requests.push(request.clone());
            }
            let mut responses = self
                .responses
                .lock()
                .map_err(|e| ClientError::ResponseParse(format!("mock lock poisoned: {e}")))?;
            responses
                .pop()
                .unwrap_or(Err(ClientError::ResponseParse("no scripted response".into())))
        }
    }
}
