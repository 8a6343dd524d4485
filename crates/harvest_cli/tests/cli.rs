use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use harvest_cli::cli::{ChunkArgs, ScrapeArgs};
use pretty_assertions::assert_eq;

#[test]
fn chunk_defaults_match_documented_values() {
    let args = ChunkArgs::try_parse_from(["chunk_doc", "--input", "book.docx"]).unwrap();
    assert_eq!(args.input, PathBuf::from("book.docx"));
    assert_eq!(args.words, 5000);
    assert_eq!(args.outdir, PathBuf::from("chunks"));
    assert!(!args.verbose);
}

#[test]
fn chunk_input_is_required() {
    assert!(ChunkArgs::try_parse_from(["chunk_doc"]).is_err());
}

#[test]
fn negative_word_count_reaches_validation() {
    let args =
        ChunkArgs::try_parse_from(["chunk_doc", "--input", "a.txt", "--words", "-5"]).unwrap();
    assert_eq!(args.words, -5);
    assert!(word_chunker::ChunkSize::new(args.words).is_err());
}

#[test]
fn scrape_defaults_match_documented_values() {
    let args = ScrapeArgs::try_parse_from([
        "scrape_thread",
        "--url",
        "https://forum.example/threads/t.1/",
        "--author",
        "alice",
    ])
    .unwrap();

    assert_eq!(args.output, PathBuf::from("output.txt"));
    assert_eq!(args.retry_policy().attempts, 3);
    assert_eq!(args.retry_policy().delay_after(0), Duration::from_secs(1));
    assert_eq!(args.fetch_settings().request_timeout, Duration::from_secs(20));

    let request = args.request();
    assert_eq!(request.thread_url, "https://forum.example/threads/t.1/");
    assert_eq!(request.author, "alice");
}

#[test]
fn scrape_requires_url_and_author() {
    assert!(ScrapeArgs::try_parse_from(["scrape_thread", "--url", "https://x"]).is_err());
    assert!(ScrapeArgs::try_parse_from(["scrape_thread", "--author", "alice"]).is_err());
}

#[test]
fn zero_retries_is_rejected() {
    let result = ScrapeArgs::try_parse_from([
        "scrape_thread",
        "--url",
        "https://x",
        "--author",
        "a",
        "--retries",
        "0",
    ]);
    assert!(result.is_err());
}
