//! Page retrieval with a bounded timeout and non-HTML payload detection.

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use tracing::debug;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Immutable client configuration, constructed once and handed to the
/// Fetcher. No process-global state.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        FetchConfig {
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Outcome of fetching one address.
pub enum Fetched {
    Page(String),
    /// Binary payload (PDF). Skipped by the pipeline, not an error.
    NonHtml,
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request timed out")]
    Timeout,
    #[error("http status {0}")]
    Status(u16),
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new(config: FetchConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent)
            .use_rustls_tls()
            .build()?;
        Ok(Fetcher { client })
    }

    /// Retrieve one page. PDFs are recognized by address extension, declared
    /// content type, or body magic marker, and reported as `NonHtml`.
    pub async fn fetch(&self, url: &str) -> Result<Fetched, FetchError> {
        if path_is_pdf(url) {
            debug!(url, "address has a PDF extension, skipping fetch");
            return Ok(Fetched::NonHtml);
        }

        let response = self.client.get(url).send().await.map_err(classify)?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();
        if is_pdf_content_type(&content_type) {
            return Ok(Fetched::NonHtml);
        }

        let body = response.text().await.map_err(classify)?;
        if body_is_pdf(&body) {
            return Ok(Fetched::NonHtml);
        }
        Ok(Fetched::Page(body))
    }
}

fn classify(e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout
    } else {
        FetchError::Transport(e)
    }
}

fn path_is_pdf(url: &str) -> bool {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    path.to_ascii_lowercase().ends_with(".pdf")
}

fn is_pdf_content_type(content_type: &str) -> bool {
    content_type.contains("application/pdf")
}

fn body_is_pdf(body: &str) -> bool {
    body.starts_with("%PDF-")
}

// ── Tests ──
