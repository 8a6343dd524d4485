use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use thread_scraper::{FetchSettings, RetryPolicy, ScrapeRequest};

/// Split a text/.docx file into word-limited chunks.
#[derive(Debug, Parser)]
#[command(name = "chunk_doc")]
pub struct ChunkArgs {
    /// Plain text or .docx file to split
    #[arg(long, value_name = "PATH")]
    pub input: PathBuf,

    /// Words per chunk
    #[arg(long, default_value_t = 5000, allow_negative_numbers = true)]
    pub words: i64,

    /// Directory receiving chunk_NNN.txt files
    #[arg(long, value_name = "DIR", default_value = "chunks")]
    pub outdir: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Scrape XenForo thread posts by author.
#[derive(Debug, Parser)]
#[command(name = "scrape_thread")]
pub struct ScrapeArgs {
    /// Thread URL (first page)
    #[arg(long)]
    pub url: String,

    /// Author to extract
    #[arg(long)]
    pub author: String,

    /// Output text file
    #[arg(long, value_name = "PATH", default_value = "output.txt")]
    pub output: PathBuf,

    /// Attempts per page before it is skipped
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u32).range(1..))]
    pub retries: u32,

    /// Per-attempt timeout in seconds
    #[arg(
        long,
        value_name = "SECS",
        default_value_t = 20,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl ScrapeArgs {
    pub fn request(&self) -> ScrapeRequest {
        ScrapeRequest {
            thread_url: self.url.clone(),
            author: self.author.clone(),
            output: self.output.clone(),
        }
    }

    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            request_timeout: Duration::from_secs(self.timeout),
            ..FetchSettings::default()
        }
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            attempts: self.retries,
            ..RetryPolicy::default()
        }
    }
}
