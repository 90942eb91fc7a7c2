use std::time::Duration;

use reqwest::{header, Client, StatusCode};
use thiserror::Error;
use tracing::{debug, info};

pub const TRENDING_URL: &str = "https://github.com/trending";

pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

const ACCEPT_HTML: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";
const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";

/// Where and how to fetch the trending page.
#[derive(Debug, Clone)]
pub struct TrendingPageRequest {
    pub url: String,
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for TrendingPageRequest {
    fn default() -> Self {
        Self {
            url: TRENDING_URL.to_string(),
            user_agent: BROWSER_USER_AGENT.to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

pub struct TrendingPageResult {
    pub body: String,
    pub status: StatusCode,
}

/// Issues exactly one GET. Non-2xx statuses and timeouts are errors; nothing is retried.
pub async fn fetch_trending_page(
    request: &TrendingPageRequest,
) -> Result<TrendingPageResult, FetchTrendingPageError> {
    let client = Client::builder()
        .timeout(request.timeout)
        .build()
        .map_err(|source| FetchTrendingPageError::ClientBuild { source })?;

    debug!(url = %request.url, timeout = ?request.timeout, "Requesting trending page");

    let response = client
        .get(&request.url)
        .header(header::USER_AGENT, &request.user_agent)
        .header(header::ACCEPT, ACCEPT_HTML)
        .header(header::ACCEPT_LANGUAGE, ACCEPT_LANGUAGE)
        .header(header::CACHE_CONTROL, "no-cache")
        .send()
        .await
        .map_err(|source| FetchTrendingPageError::RequestSend { source })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchTrendingPageError::UnexpectedStatus {
            status,
            url: request.url.clone(),
        });
    }

    let body = response
        .text()
        .await
        .map_err(|source| FetchTrendingPageError::ResponseRead { source })?;

    info!(%status, bytes = body.len(), "Fetched trending page");

    Ok(TrendingPageResult { body, status })
}

#[derive(Debug, Error)]
pub enum FetchTrendingPageError {
    #[error("ClientBuild: {source}")]
    ClientBuild {
        source: reqwest::Error,
    },

    #[error("RequestSend: {source}")]
    RequestSend {
        source: reqwest::Error,
    },

    #[error("UnexpectedStatus: {status} from {url}")]
    UnexpectedStatus {
        status: StatusCode,
        url: String,
    },

    #[error("ResponseRead: {source}")]
    ResponseRead {
        source: reqwest::Error,
    },
}

impl FetchTrendingPageError {
    pub fn is_timeout(&self) -> bool {
        match self {
            Self::RequestSend { source } | Self::ResponseRead { source } => source.is_timeout(),
            _ => false,
        }
    }
}
