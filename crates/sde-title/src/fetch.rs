//! Page title fetchers.

use std::time::Duration;

use ureq::Agent;

use crate::extract::extract_title;

/// Error from a single title lookup.
#[derive(Debug, thiserror::Error)]
pub enum TitleError {
    /// HTTP request failed (DNS, connection, timeout, body read).
    #[error("HTTP request failed: {0}")]
    Http(#[from] ureq::Error),

    /// Server answered with an error status.
    #[error("HTTP error: {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },

    /// Page has no usable `<title>` element.
    #[error("page has no title")]
    MissingTitle,
}

/// Source of page titles for URLs.
///
/// Implementations perform the expensive part of a lookup; memoization is
/// the job of [`TitleCache`](crate::TitleCache).
pub trait TitleFetcher: Send + Sync {
    /// Retrieve the title of the page at `url`.
    fn fetch_title(&self, url: &str) -> Result<String, TitleError>;
}

/// [`TitleFetcher`] that downloads the page over HTTP and reads its `<title>`.
pub struct HttpTitleFetcher {
    agent: Agent,
}

impl HttpTitleFetcher {
    /// Create a fetcher.
    ///
    /// `timeout` bounds the whole request; `None` keeps the HTTP client's
    /// defaults.
    #[must_use]
    pub fn new(timeout: Option<Duration>) -> Self {
        Self {
            agent: create_agent(timeout),
        }
    }
}

impl Default for HttpTitleFetcher {
    fn default() -> Self {
        Self::new(None)
    }
}

impl TitleFetcher for HttpTitleFetcher {
    fn fetch_title(&self, url: &str) -> Result<String, TitleError> {
        let response = self.agent.get(url).call()?;

        let status = response.status().as_u16();
        if status >= 400 {
            return Err(TitleError::Status { status });
        }

        let mut body = response.into_body();
        let html = body.read_to_string()?;
        extract_title(&html).ok_or(TitleError::MissingTitle)
    }
}

/// Create an HTTP agent that reports error statuses as responses.
fn create_agent(timeout: Option<Duration>) -> Agent {
    Agent::config_builder()
        .timeout_global(timeout)
        .http_status_as_error(false)
        .build()
        .into()
}
