use anyhow::Context;
use clap::Parser;
use harvest_cli::cli::ChunkArgs;
use harvest_logging::{harvest_info, LogOptions};
use word_chunker::{split_file, ChunkSize, StdoutProgressSink};

fn main() -> anyhow::Result<()> {
    let args = ChunkArgs::parse();
    harvest_logging::initialize(LogOptions {
        verbose: args.verbose,
    });

    let size = ChunkSize::new(args.words)?;

    let written = split_file(&args.input, size, &args.outdir, &StdoutProgressSink)
        .with_context(|| format!("failed to split {}", args.input.display()))?;
    harvest_info!(
        "{} chunk files in {}",
        written.len(),
        args.outdir.display()
    );
    Ok(())
}
