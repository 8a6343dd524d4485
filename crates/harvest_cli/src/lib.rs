//! Command-line front ends for the chunker and the thread scraper.
pub mod cli;
