use std::time::Duration;

use harvest_logging::{harvest_debug, harvest_warn};
use reqwest::header::CONTENT_TYPE;

use crate::decode::decode_html;
use crate::{FailureKind, FetchError, FetchOutput};

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (XenForo scraper for personal use)";

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub connect_timeout: Duration,
    /// Bounds each individual attempt.
    pub request_timeout: Duration,
    pub redirect_limit: usize,
    pub user_agent: String,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(20),
            redirect_limit: 5,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Linear backoff: after failed attempt `i` (zero-based) wait `base_delay + step * i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub attempts: u32,
    pub base_delay: Duration,
    pub step: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: 3,
            base_delay: Duration::from_secs(1),
            step: Duration::from_secs(1),
        }
    }
}

impl RetryPolicy {
    pub fn delay_after(&self, attempt: u32) -> Duration {
        self.base_delay + self.step * attempt
    }
}

/// A single GET attempt.
#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<FetchOutput, FetchError>;
}

/// One shared `reqwest::Client` for the whole run.
#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    client: reqwest::Client,
}

impl ReqwestFetcher {
    pub fn new(settings: FetchSettings) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(settings.user_agent.as_str())
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .redirect(reqwest::redirect::Policy::limited(settings.redirect_limit))
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl Fetcher for ReqwestFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchOutput, FetchError> {
        let parsed = reqwest::Url::parse(url)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;

        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        // Any successful body is parsed, whatever its declared type.
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());
        let bytes = response.bytes().await.map_err(map_reqwest_error)?.to_vec();

        Ok(FetchOutput {
            bytes,
            content_type,
        })
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_redirect() {
        return FetchError::new(FailureKind::RedirectLimitExceeded, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}

/// Retrying page fetcher returning decoded text, or `None` once every attempt failed.
#[derive(Debug, Clone)]
pub struct PageFetcher<F = ReqwestFetcher> {
    fetcher: F,
    policy: RetryPolicy,
}

impl PageFetcher<ReqwestFetcher> {
    pub fn from_settings(
        settings: FetchSettings,
        policy: RetryPolicy,
    ) -> Result<Self, FetchError> {
        Ok(Self::new(ReqwestFetcher::new(settings)?, policy))
    }
}

impl<F: Fetcher> PageFetcher<F> {
    pub fn new(fetcher: F, policy: RetryPolicy) -> Self {
        Self { fetcher, policy }
    }

    pub fn into_inner(self) -> F {
        self.fetcher
    }

    pub async fn fetch_text(&self, url: &str) -> Option<String> {
        let attempts = self.policy.attempts;
        for attempt in 0..attempts {
            match self.fetcher.fetch(url).await {
                Ok(output) => {
                    let decoded = decode_html(&output.bytes, output.content_type.as_deref());
                    if decoded.had_errors {
                        harvest_debug!(
                            "GET {url}: malformed {} sequences replaced",
                            decoded.encoding_label
                        );
                    }
                    return Some(decoded.html);
                }
                Err(err) => {
                    harvest_warn!("GET {url} failed ({err}), retry {}/{attempts}", attempt + 1);
                    // Never sleep after the final attempt.
                    if attempt + 1 < attempts {
                        tokio::time::sleep(self.policy.delay_after(attempt)).await;
                    }
                }
            }
        }
        None
    }
}
