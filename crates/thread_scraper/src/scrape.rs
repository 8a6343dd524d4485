use std::path::PathBuf;

use harvest_logging::{harvest_debug, harvest_info, harvest_warn};
use url::Url;

use crate::output::TranscriptWriter;
use crate::{
    detect_page_count, extract_posts, page_url, Fetcher, PageFetcher, ScrapeError, ScrapeSummary,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeRequest {
    /// First page of the thread.
    pub thread_url: String,
    /// Compared verbatim against each post's author attribute.
    pub author: String,
    pub output: PathBuf,
}

/// Walk every page of a thread and write the requested author's posts to `request.output`.
///
/// Pages that cannot be fetched are logged and skipped. Only an invalid
/// thread URL or an output-file error aborts the run.
pub async fn scrape_thread<F: Fetcher>(
    fetcher: &PageFetcher<F>,
    request: &ScrapeRequest,
) -> Result<ScrapeSummary, ScrapeError> {
    validate_thread_url(&request.thread_url)?;
    let mut transcript = TranscriptWriter::create(&request.output)?;

    let mut first_page = fetcher.fetch_text(&request.thread_url).await;
    let pages = first_page.as_deref().map(detect_page_count).unwrap_or(1);
    harvest_info!("Detected {pages} pages");

    let mut summary = ScrapeSummary {
        pages_detected: pages,
        ..ScrapeSummary::default()
    };

    for page in 1..=pages {
        // Page 1 was already downloaded for page-count detection.
        let cached = if page == 1 { first_page.take() } else { None };
        let html = match cached {
            Some(html) => Some(html),
            None => fetcher.fetch_text(&page_url(&request.thread_url, page)).await,
        };
        let Some(html) = html else {
            harvest_warn!("Skipping page {page}; fetch failed.");
            summary.pages_skipped += 1;
            continue;
        };
        summary.pages_fetched += 1;

        let posts = extract_posts(&html, &request.author);
        harvest_info!(
            "Page {page}: found {} posts by {}",
            posts.len(),
            request.author
        );
        for post in &posts {
            transcript.write_post(post)?;
        }
    }

    summary.posts_written = transcript.posts_written();
    transcript.finish()?;
    harvest_debug!("Transcript written to {:?}", request.output);
    Ok(summary)
}

fn validate_thread_url(thread_url: &str) -> Result<(), ScrapeError> {
    let invalid = |reason: String| ScrapeError::InvalidUrl {
        url: thread_url.to_string(),
        reason,
    };
    let parsed = Url::parse(thread_url).map_err(|err| invalid(err.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(invalid(format!("unsupported scheme {other}"))),
    }
}
