use clap::Parser;
use instance_format::batch::DEFAULT_IDS;
use instance_format::io::OutputLayout;
use instance_format::{run_batch, BatchConfig, FailurePolicy};
use std::error::Error;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::FmtSubscriber;

/// Converts instance_<N>.txt into instance_transformed_<N>.txt for a range of N.
#[derive(Debug, Parser)]
struct Cli {
    /// Directory containing the instance files.
    #[arg(long)]
    dir: PathBuf,
    /// Directory for the transformed files. Defaults to --dir.
    #[arg(long)]
    output_dir: Option<PathBuf>,
    #[arg(long, default_value_t = *DEFAULT_IDS.start())]
    first: u32,
    #[arg(long, default_value_t = *DEFAULT_IDS.end())]
    last: u32,
    #[arg(long, value_enum, default_value_t = OutputLayout::Joined)]
    layout: OutputLayout,
    /// Stop at the first instance that fails.
    #[arg(long)]
    fail_fast: bool,
    /// Read every transformed file back and check its edge count.
    #[arg(long)]
    verify: bool,
    #[arg(long)]
    log_level: Option<Level>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if let Some(level) = cli.log_level {
        let subscriber = FmtSubscriber::builder().with_max_level(level).with_span_events(FmtSpan::CLOSE).finish();

        subscriber.init();
    };

    let mut config = BatchConfig::new(cli.dir);
    if let Some(output_dir) = cli.output_dir {
        config.output_dir = output_dir;
    }
    config.ids = cli.first..=cli.last;
    config.layout = cli.layout;
    config.policy = if cli.fail_fast { FailurePolicy::FailFast } else { FailurePolicy::Continue };
    config.verify = cli.verify;

    let report = run_batch(&config)?;
    for (id, summary) in &report.converted {
        println!("{id:4} n {:8} m {:8}", summary.num_vertices, summary.num_edges);
    }
    for (_, err) in &report.failed {
        eprintln!("{err}");
    }
    if !report.is_success() {
        let total = report.converted.len() + report.failed.len();
        return Err(format!("{} of {total} instances failed", report.failed.len()).into());
    }
    Ok(())
}
