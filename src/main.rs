use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing::{info, Level};

use concordance::{
    read_input, write_report, ConcordanceBuilder, InputSource, ReaderConfig, ReportFormat, RunStats,
};

#[derive(Parser, Debug)]
#[command(name = "concordance")]
#[command(about = "Word concordance with frequencies and sentence numbers")]
#[command(version)]
struct Args {
    /// Text file to index; the built-in sample text is used when omitted
    input: Option<PathBuf>,

    /// Index the built-in sample text even when an input file is given
    #[arg(long)]
    sample: bool,

    /// Decode invalid UTF-8 input with replacement characters instead of failing
    #[arg(long)]
    lossy_utf8: bool,

    /// Report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,

    /// Optional run statistics output file path
    #[arg(long)]
    stats_out: Option<PathBuf>,

    /// Debug-level logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    // WHY: stdout carries the report, so structured JSON logs go to stderr
    tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(io::stderr)
        .json()
        .init();

    info!(?args, "Parsed CLI arguments");

    let source = InputSource::from_args(args.input.clone(), args.sample);
    let reader_config = ReaderConfig {
        lossy_utf8: args.lossy_utf8,
    };
    let (text, read_stats) = read_input(&source, &reader_config).await?;

    let start_time = std::time::Instant::now();
    let builder = ConcordanceBuilder::new()?;
    let concordance = builder.build(&text);
    let processing_time_ms = start_time.elapsed().as_millis() as u64;

    write_report(&concordance, args.format, io::stdout().lock())?;

    if let Some(stats_path) = &args.stats_out {
        let run_stats = RunStats::new(&read_stats, concordance.stats(), processing_time_ms);
        run_stats.save(stats_path).await?;
        info!("Run statistics written to {}", stats_path.display());
    }

    Ok(())
}
