use anyhow::Context;
use clap::Parser;
use harvest_cli::cli::ScrapeArgs;
use harvest_logging::{harvest_info, LogOptions};
use thread_scraper::{scrape_thread, PageFetcher};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = ScrapeArgs::parse();
    harvest_logging::initialize(LogOptions {
        verbose: args.verbose,
    });

    let fetcher = PageFetcher::from_settings(args.fetch_settings(), args.retry_policy())
        .context("failed to build HTTP client")?;
    let request = args.request();
    let summary = scrape_thread(&fetcher, &request)
        .await
        .with_context(|| format!("failed to scrape {}", request.thread_url))?;

    harvest_info!(
        "Wrote {} posts from {}/{} pages to {}",
        summary.posts_written,
        summary.pages_fetched,
        summary.pages_detected,
        request.output.display()
    );
    Ok(())
}
