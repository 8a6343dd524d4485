//! Thread scraper: page through a forum thread and keep one author's posts.
mod decode;
mod extract;
mod fetch;
mod html;
mod output;
mod pager;
mod scrape;
mod types;

pub use decode::{decode_html, DecodedHtml};
pub use extract::extract_posts;
pub use fetch::{
    FetchSettings, Fetcher, PageFetcher, ReqwestFetcher, RetryPolicy, DEFAULT_USER_AGENT,
};
pub use html::{HtmlDocument, HtmlNode};
pub use output::{TranscriptWriter, SEPARATOR_WIDTH};
pub use pager::{detect_page_count, page_url};
pub use scrape::{scrape_thread, ScrapeRequest};
pub use types::{FailureKind, FetchError, FetchOutput, Post, ScrapeError, ScrapeSummary};
